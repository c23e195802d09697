use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    InvalidEmail {
        message: String,
    },
    DuplicateIsbn {
        message: String,
    },
    DuplicateEmail {
        message: String,
    },
    UnknownReader {
        message: String,
    },
    UnknownBook {
        message: String,
    },
    // A rating that is absent or outside the accepted range. The read that
    // carried it is still recorded.
    InvalidRating {
        message: String,
        rating: Option<u8>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn invalid_email(message: &str) -> LibraryError {
        LibraryError::InvalidEmail { message: message.to_string() }
    }

    pub fn duplicate_isbn(message: &str) -> LibraryError {
        LibraryError::DuplicateIsbn { message: message.to_string() }
    }

    pub fn duplicate_email(message: &str) -> LibraryError {
        LibraryError::DuplicateEmail { message: message.to_string() }
    }

    pub fn unknown_reader(message: &str) -> LibraryError {
        LibraryError::UnknownReader { message: message.to_string() }
    }

    pub fn unknown_book(message: &str) -> LibraryError {
        LibraryError::UnknownBook { message: message.to_string() }
    }

    pub fn invalid_rating(message: &str, rating: Option<u8>) -> LibraryError {
        LibraryError::InvalidRating { message: message.to_string(), rating }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidEmail { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateIsbn { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateEmail { message } => {
                write!(f, "{}", message)
            }
            LibraryError::UnknownReader { message } => {
                write!(f, "{}", message)
            }
            LibraryError::UnknownBook { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidRating { message, rating } => {
                write!(f, "{} {:?}", message, rating)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookCategory {
    General,
    Fiction,
    NonFiction,
}

impl Display for BookCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookCategory::General => write!(f, "General"),
            BookCategory::Fiction => write!(f, "Fiction"),
            BookCategory::NonFiction => write!(f, "NonFiction"),
        }
    }
}

// What happened to the rating attached to a recorded read.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum RatingOutcome {
    Stored(u8),
    Missing,
    OutOfRange(u8),
}

impl Display for RatingOutcome {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RatingOutcome::Stored(r) => write!(f, "Stored({})", r),
            RatingOutcome::Missing => write!(f, "Missing"),
            RatingOutcome::OutOfRange(r) => write!(f, "OutOfRange({})", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookCategory, LibraryError, RatingOutcome};

    #[test]
    fn test_should_create_invalid_email_error() {
        assert!(matches!(LibraryError::invalid_email("test"), LibraryError::InvalidEmail{ message: _ }));
    }

    #[test]
    fn test_should_create_duplicate_errors() {
        assert!(matches!(LibraryError::duplicate_isbn("test"), LibraryError::DuplicateIsbn{ message: _ }));
        assert!(matches!(LibraryError::duplicate_email("test"), LibraryError::DuplicateEmail{ message: _ }));
    }

    #[test]
    fn test_should_create_not_found_errors() {
        assert!(matches!(LibraryError::unknown_reader("test"), LibraryError::UnknownReader{ message: _ }));
        assert!(matches!(LibraryError::unknown_book("test"), LibraryError::UnknownBook{ message: _ }));
    }

    #[test]
    fn test_should_create_invalid_rating_error() {
        let err = LibraryError::invalid_rating("rating out of range", Some(5));
        assert!(matches!(err, LibraryError::InvalidRating{ message: _, rating: Some(5) }));
        assert_eq!("rating out of range Some(5)", err.to_string());
    }

    #[test]
    fn test_should_convert_json_error() {
        let err = serde_json::from_str::<u32>("nope").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_format_book_category() {
        assert_eq!("General", BookCategory::General.to_string());
        assert_eq!("Fiction", BookCategory::Fiction.to_string());
        assert_eq!("NonFiction", BookCategory::NonFiction.to_string());
    }

    #[test]
    fn test_should_format_rating_outcome() {
        assert_eq!("Stored(3)", RatingOutcome::Stored(3).to_string());
        assert_eq!("Missing", RatingOutcome::Missing.to_string());
        assert_eq!("OutOfRange(9)", RatingOutcome::OutOfRange(9).to_string());
    }
}
