use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::core::domain::{DEFAULT_MAX_RATING, Identifiable, Rated};
use crate::core::library::{BookCategory, LibraryError, LibraryResult};

// BookKey is the value identity of a book. Two separately built books with the
// same title and isbn collide on the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookKey {
    pub title: String,
    pub isbn: u64,
}

impl BookKey {
    pub fn new(title: &str, isbn: u64) -> Self {
        Self {
            title: title.to_string(),
            isbn,
        }
    }
}

impl Display for BookKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}#{}", self.title, self.isbn)
    }
}

// BookKind carries the payload that differs between general, fiction and
// non-fiction books. Only the display form depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum BookKind {
    General,
    Fiction {
        author: String,
    },
    NonFiction {
        subject: String,
        level: String,
    },
}

// Book abstracts a purchasable, ratable work in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    title: String,
    isbn: u64,
    price: f64,
    #[serde(default)]
    ratings: Vec<u8>,
    #[serde(flatten)]
    kind: BookKind,
}

impl Book {
    pub fn new(title: &str, isbn: u64, price: f64) -> Self {
        Self::build(title, isbn, price, BookKind::General)
    }

    pub fn fiction(title: &str, author: &str, isbn: u64, price: f64) -> Self {
        Self::build(title, isbn, price, BookKind::Fiction { author: author.to_string() })
    }

    pub fn non_fiction(title: &str, subject: &str, level: &str, isbn: u64, price: f64) -> Self {
        Self::build(title, isbn, price, BookKind::NonFiction {
            subject: subject.to_string(),
            level: level.to_string(),
        })
    }

    fn build(title: &str, isbn: u64, price: f64, kind: BookKind) -> Self {
        Self {
            title: title.to_string(),
            isbn,
            price,
            ratings: vec![],
            kind,
        }
    }

    pub fn key(&self) -> BookKey {
        BookKey::new(self.title.as_str(), self.isbn)
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn isbn(&self) -> u64 {
        self.isbn
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn ratings(&self) -> &[u8] {
        &self.ratings
    }

    pub fn kind(&self) -> &BookKind {
        &self.kind
    }

    pub fn category(&self) -> BookCategory {
        match self.kind {
            BookKind::General => BookCategory::General,
            BookKind::Fiction { .. } => BookCategory::Fiction,
            BookKind::NonFiction { .. } => BookCategory::NonFiction,
        }
    }

    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            BookKind::Fiction { author } => Some(author.as_str()),
            _ => None,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        match &self.kind {
            BookKind::NonFiction { subject, .. } => Some(subject.as_str()),
            _ => None,
        }
    }

    pub fn level(&self) -> Option<&str> {
        match &self.kind {
            BookKind::NonFiction { level, .. } => Some(level.as_str()),
            _ => None,
        }
    }

    // Reassigns the isbn in place. Uniqueness is not checked here; a book that
    // is already registered must be re-keyed through the catalog instead.
    pub fn set_isbn(&mut self, new_isbn: u64) {
        self.isbn = new_isbn;
        info!(title = %self.title, isbn = new_isbn, "isbn updated");
    }

    // Copy of the book with an empty rating list, as it enters a catalog.
    pub(crate) fn without_ratings(&self) -> Self {
        Self::build(self.title.as_str(), self.isbn, self.price, self.kind.clone())
    }

    pub fn add_rating(&mut self, rating: Option<u8>) -> LibraryResult<u8> {
        self.add_rating_with_max(rating, DEFAULT_MAX_RATING)
    }

    pub fn add_rating_with_max(&mut self, rating: Option<u8>, max_rating: u8) -> LibraryResult<u8> {
        match rating {
            Some(r) if r <= max_rating => {
                self.ratings.push(r);
                debug!(book = %self.key(), rating = r, "rating stored");
                Ok(r)
            }
            Some(_) => Err(LibraryError::invalid_rating(
                format!("rating for {} must be within 0..={}", self.key(), max_rating).as_str(), rating)),
            None => Err(LibraryError::invalid_rating(
                format!("rating for {} not provided", self.key()).as_str(), None)),
        }
    }
}

impl Rated for Book {
    fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: f64 = self.ratings.iter().map(|r| f64::from(*r)).sum();
        Some(sum / self.ratings.len() as f64)
    }
}

impl Identifiable for Book {
    fn id(&self) -> String {
        self.key().to_string()
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.isbn.hash(state);
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.kind {
            BookKind::General => {
                write!(f, "Book named {} costs {}", self.title, self.price)
            }
            BookKind::Fiction { author } => {
                write!(f, "{} by {} costs {}", self.title, author, self.price)
            }
            BookKind::NonFiction { subject, level } => {
                write!(f, "{}, a {} manual on {} costs {}", self.title, level, subject, self.price)
            }
        }
    }
}
