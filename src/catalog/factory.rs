use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub fn create_catalog_service(config: &Configuration, via: GatewayPublisherVia) -> Box<dyn CatalogService> {
    let publisher = create_publisher(via);
    Box::new(CatalogServiceImpl::new(config, publisher))
}
