use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::{info, warn};
use crate::books::model::BookKey;
use crate::core::domain::{DEFAULT_EMAIL_DOMAINS, Identifiable, Rated};
use crate::core::library::{LibraryError, LibraryResult};

// An email is accepted when it contains '@' and ends with one of the allowed
// top-level domains.
pub fn validate_email<S: AsRef<str>>(email: &str, allowed_domains: &[S]) -> LibraryResult<()> {
    let domain_ok = allowed_domains.iter().any(|d| email.ends_with(d.as_ref()));
    if email.contains('@') && domain_ok {
        Ok(())
    } else {
        warn!(email, "rejected email");
        Err(LibraryError::invalid_email(format!("incorrect email provided {}", email).as_str()))
    }
}

// Reader abstracts a person who has read zero or more books, each with an
// optional rating.
#[derive(Debug, Clone)]
pub struct Reader {
    name: String,
    email: String,
    books: HashMap<BookKey, Option<u8>>,
}

impl Reader {
    pub fn new(name: &str, email: &str) -> LibraryResult<Self> {
        Self::with_domains(name, email, &DEFAULT_EMAIL_DOMAINS)
    }

    pub fn with_domains<S: AsRef<str>>(name: &str, email: &str, allowed_domains: &[S]) -> LibraryResult<Self> {
        validate_email(email, allowed_domains)?;
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            books: HashMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn books(&self) -> &HashMap<BookKey, Option<u8>> {
        &self.books
    }

    pub fn books_read(&self) -> usize {
        self.books.len()
    }

    // Outer None: never read. Inner None: read without a rating.
    pub fn rating_for(&self, book: &BookKey) -> Option<Option<u8>> {
        self.books.get(book).copied()
    }

    // Replaces the email without re-validating it. A reader registered in a
    // catalog must be renamed through the catalog so its index follows.
    pub fn change_email(&mut self, new_email: &str) {
        self.email = new_email.to_string();
        info!(reader = %self.name, email = new_email, "email updated");
    }

    // Re-reading a book overwrites the earlier rating.
    pub fn read_book(&mut self, book: BookKey, rating: Option<u8>) -> Option<Option<u8>> {
        self.books.insert(book, rating)
    }

    pub(crate) fn rekey_book(&mut self, old: &BookKey, new: BookKey) {
        if let Some(rating) = self.books.remove(old) {
            self.books.insert(new, rating);
        }
    }
}

impl Rated for Reader {
    // Divides by every book read, rated or not.
    fn average_rating(&self) -> Option<f64> {
        if self.books.is_empty() {
            return None;
        }
        let sum: f64 = self.books.values().flatten().map(|r| f64::from(*r)).sum();
        Some(sum / self.books.len() as f64)
    }
}

impl Identifiable for Reader {
    fn id(&self) -> String {
        self.email.to_string()
    }
}

impl PartialEq for Reader {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }
}

impl Eq for Reader {}

impl Display for Reader {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Reader {}, email: {}, books read: {}", self.name, self.email, self.books.len())
    }
}
