use serde::{Deserialize, Serialize};
use crate::core::domain::Rated;
use crate::readers::model::Reader;

// ReaderDto is the report view of a registered reader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderDto {
    pub name: String,
    pub email: String,
    pub books_read: usize,
    pub average_rating: Option<f64>,
}

impl From<&Reader> for ReaderDto {
    fn from(other: &Reader) -> Self {
        Self {
            name: other.name().to_string(),
            email: other.email().to_string(),
            books_read: other.books_read(),
            average_rating: other.average_rating(),
        }
    }
}
