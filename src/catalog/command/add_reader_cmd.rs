use serde::{Deserialize, Serialize};
use crate::catalog::dto::ReadReceipt;
use crate::catalog::session::CatalogSession;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::readers::dto::ReaderDto;

pub struct AddReaderCommand<'a> {
    session: &'a mut CatalogSession,
}

impl<'a> AddReaderCommand<'a> {
    pub fn new(session: &'a mut CatalogSession) -> Self {
        Self {
            session,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddReaderCommandRequest {
    pub name: String,
    pub email: String,
    // isbns of books the reader has already read
    #[serde(default)]
    pub books: Vec<u64>,
}

impl AddReaderCommandRequest {
    pub fn new(name: &str, email: &str, books: Vec<u64>) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            books,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddReaderCommandResponse {
    pub reader: ReaderDto,
    pub receipts: Vec<ReadReceipt>,
}

impl Command<AddReaderCommandRequest, AddReaderCommandResponse> for AddReaderCommand<'_> {
    fn execute(&mut self, req: AddReaderCommandRequest) -> Result<AddReaderCommandResponse, CommandError> {
        let books = req.books.iter()
            .map(|isbn| self.session.resolve(*isbn))
            .collect::<LibraryResult<Vec<_>>>()?;
        let catalog = self.session.catalog_mut();
        let receipts = catalog.add_reader(req.name.as_str(), req.email.as_str(), &books)?;
        let reader = catalog.reader(req.email.as_str()).map(ReaderDto::from).ok_or_else(||
            CommandError::NotFound { message: format!("reader {} vanished after registration", req.email) })?;
        for isbn in req.books.iter() {
            self.session.forget_draft(*isbn);
        }
        Ok(AddReaderCommandResponse { reader, receipts })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_reader_cmd::{AddReaderCommand, AddReaderCommandRequest};
    use crate::catalog::command::tests::new_session;
    use crate::core::command::{Command, CommandError};

    #[test]
    fn test_should_run_add_reader_with_books() {
        let mut session = new_session();
        let book = session.catalog_mut().create_book("T", 1, 3.0).expect("book");
        session.add_draft(book);
        let res = AddReaderCommand::new(&mut session)
            .execute(AddReaderCommandRequest::new("Ann", "ann@x.org", vec![1]))
            .expect("should add reader");
        assert_eq!(1, res.reader.books_read);
        assert_eq!(1, res.receipts.len());
        assert_eq!(0, session.drafts());
    }

    #[test]
    fn test_should_refuse_unknown_initial_book() {
        let mut session = new_session();
        let res = AddReaderCommand::new(&mut session)
            .execute(AddReaderCommandRequest::new("Ann", "ann@x.org", vec![99]));
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        assert!(session.catalog().reader("ann@x.org").is_none());
    }

    #[test]
    fn test_should_refuse_invalid_email() {
        let mut session = new_session();
        let res = AddReaderCommand::new(&mut session)
            .execute(AddReaderCommandRequest::new("Ann", "ann.x.org", vec![]));
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
