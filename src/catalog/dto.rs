use serde::{Deserialize, Serialize};
use crate::books::model::BookKey;
use crate::core::library::RatingOutcome;

// ReadReceipt describes the effect of one recorded read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadReceipt {
    pub book: BookKey,
    pub email: String,
    pub read_count: u32,
    pub first_read: bool,
    pub rating: RatingOutcome,
}

impl ReadReceipt {
    pub fn new(book: BookKey, email: &str, read_count: u32, first_read: bool, rating: RatingOutcome) -> Self {
        Self {
            book,
            email: email.to_string(),
            read_count,
            first_read,
            rating,
        }
    }
}
