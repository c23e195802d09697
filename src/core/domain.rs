use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

pub const DEFAULT_EMAIL_DOMAINS: [&str; 3] = [".org", ".edu", ".com"];
pub const DEFAULT_MAX_RATING: u8 = 4;

// Identifiable defines common traits that can be shared by catalog entities
pub trait Identifiable {
    fn id(&self) -> String;
}

// Rated is implemented by anything that can report an average rating.
// None means there is nothing to average over.
pub trait Rated {
    fn average_rating(&self) -> Option<f64>;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub catalog_id: String,
    pub allowed_email_domains: Vec<String>,
    pub max_rating: u8,
}

impl Configuration {
    pub fn new(catalog_id: &str) -> Self {
        Configuration {
            catalog_id: catalog_id.to_string(),
            allowed_email_domains: DEFAULT_EMAIL_DOMAINS.iter().map(|d| d.to_string()).collect(),
            max_rating: DEFAULT_MAX_RATING,
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("default")
    }
}
