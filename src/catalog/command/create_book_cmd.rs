use serde::{Deserialize, Serialize};
use crate::books::model::{Book, BookKind};
use crate::catalog::session::CatalogSession;
use crate::core::command::{Command, CommandError};

pub struct CreateBookCommand<'a> {
    session: &'a mut CatalogSession,
}

impl<'a> CreateBookCommand<'a> {
    pub fn new(session: &'a mut CatalogSession) -> Self {
        Self {
            session,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookCommandRequest {
    pub title: String,
    pub isbn: u64,
    pub price: f64,
    #[serde(flatten)]
    pub kind: BookKind,
}

impl CreateBookCommandRequest {
    pub fn new(title: &str, isbn: u64, price: f64, kind: BookKind) -> Self {
        Self {
            title: title.to_string(),
            isbn,
            price,
            kind,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateBookCommandResponse {
    pub book: Book,
}

impl CreateBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

impl Command<CreateBookCommandRequest, CreateBookCommandResponse> for CreateBookCommand<'_> {
    fn execute(&mut self, req: CreateBookCommandRequest) -> Result<CreateBookCommandResponse, CommandError> {
        let catalog = self.session.catalog_mut();
        let book = match &req.kind {
            BookKind::General => catalog.create_book(req.title.as_str(), req.isbn, req.price),
            BookKind::Fiction { author } => {
                catalog.create_novel(req.title.as_str(), author.as_str(), req.isbn, req.price)
            }
            BookKind::NonFiction { subject, level } => {
                catalog.create_non_fiction(req.title.as_str(), subject.as_str(), level.as_str(), req.isbn, req.price)
            }
        }?;
        self.session.add_draft(book.clone());
        Ok(CreateBookCommandResponse::new(book))
    }
}
