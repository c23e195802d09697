use std::fmt;
use std::fmt::{Display, Formatter};
use serde::Serialize;
use crate::core::library::LibraryError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidEmail { message } => {
                CommandError::Validation { message, reason_code: Some("invalid_email".to_string()) }
            }
            LibraryError::DuplicateIsbn { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::DuplicateEmail { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::UnknownReader { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::UnknownBook { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::InvalidRating { message, .. } => {
                CommandError::Validation { message, reason_code: Some("invalid_rating".to_string()) }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::from(LibraryError::from(err))
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::DuplicateKey { message } => write!(f, "duplicate: {}", message),
            CommandError::NotFound { message } => write!(f, "not found: {}", message),
            CommandError::Validation { message, reason_code } => {
                write!(f, "validation: {} {:?}", message, reason_code)
            }
            CommandError::Serialization { message } => write!(f, "serialization: {}", message),
            CommandError::Runtime { message, reason_code } => {
                write!(f, "runtime: {} {:?}", message, reason_code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_map_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::duplicate_isbn("x")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_email("x")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::unknown_reader("x")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::unknown_book("x")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::invalid_email("x")), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::invalid_rating("x", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("x")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("x", None)), CommandError::Runtime { .. }));
    }

    #[test]
    fn test_should_serialize_command_error() {
        let err = CommandError::NotFound { message: "no reader".to_string() };
        let json = serde_json::to_value(&err).expect("serialize");
        assert_eq!("not_found", json["error"]);
        assert_eq!("no reader", json["message"]);
    }
}
