use std::collections::HashMap;
use crate::books::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};

// CatalogSession pairs a catalog with the books a driver has created but that
// no reader has read yet. Those drafts are addressed by isbn.
pub struct CatalogSession {
    catalog_service: Box<dyn CatalogService>,
    drafts: HashMap<u64, Book>,
}

impl CatalogSession {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
            drafts: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &dyn CatalogService {
        self.catalog_service.as_ref()
    }

    pub fn catalog_mut(&mut self) -> &mut dyn CatalogService {
        self.catalog_service.as_mut()
    }

    pub fn add_draft(&mut self, book: Book) {
        self.drafts.insert(book.isbn(), book);
    }

    // A draft leaves the table once a read has registered it in the catalog.
    pub fn forget_draft(&mut self, isbn: u64) {
        self.drafts.remove(&isbn);
    }

    pub fn drafts(&self) -> usize {
        self.drafts.len()
    }

    // Registered books win over drafts so that ratings already stored are kept.
    pub fn resolve(&self, isbn: u64) -> LibraryResult<Book> {
        if let Some(book) = self.catalog_service.books().into_iter().find(|b| b.isbn() == isbn) {
            return Ok(book.clone());
        }
        self.drafts.get(&isbn).cloned().ok_or_else(||
            LibraryError::unknown_book(format!("no book with isbn {}", isbn).as_str()))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::factory::create_catalog_service;
    use crate::catalog::session::CatalogSession;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_resolve_drafts_then_registered_books() {
        let mut session = CatalogSession::new(
            create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory));
        let book = session.catalog_mut().create_book("T", 1, 2.0).expect("book");
        session.add_draft(book.clone());
        assert_eq!(book, session.resolve(1).expect("draft"));

        session.catalog_mut().add_reader("Ann", "ann@x.org", &[]).expect("reader");
        session.catalog_mut().record_read(&book, "ann@x.org", Some(4)).expect("read");
        assert_eq!(&[4], session.resolve(1).expect("registered").ratings());
        assert!(session.resolve(2).is_err());
    }

    #[test]
    fn test_should_forget_registered_draft() {
        let mut session = CatalogSession::new(
            create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory));
        let book = session.catalog_mut().create_book("T", 1, 2.0).expect("book");
        session.add_draft(book);
        session.forget_draft(1);
        assert_eq!(0, session.drafts());
        assert!(session.resolve(1).is_err());
    }
}
