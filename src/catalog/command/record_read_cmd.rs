use serde::{Deserialize, Serialize};
use crate::catalog::dto::ReadReceipt;
use crate::catalog::session::CatalogSession;
use crate::core::command::{Command, CommandError};

pub struct RecordReadCommand<'a> {
    session: &'a mut CatalogSession,
}

impl<'a> RecordReadCommand<'a> {
    pub fn new(session: &'a mut CatalogSession) -> Self {
        Self {
            session,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordReadCommandRequest {
    pub email: String,
    pub isbn: u64,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl RecordReadCommandRequest {
    pub fn new(email: &str, isbn: u64, rating: Option<u8>) -> Self {
        Self {
            email: email.to_string(),
            isbn,
            rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecordReadCommandResponse {
    pub receipt: ReadReceipt,
}

impl Command<RecordReadCommandRequest, RecordReadCommandResponse> for RecordReadCommand<'_> {
    fn execute(&mut self, req: RecordReadCommandRequest) -> Result<RecordReadCommandResponse, CommandError> {
        let book = self.session.resolve(req.isbn)?;
        let receipt = self.session.catalog_mut().record_read(&book, req.email.as_str(), req.rating)?;
        self.session.forget_draft(req.isbn);
        Ok(RecordReadCommandResponse { receipt })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::record_read_cmd::{RecordReadCommand, RecordReadCommandRequest};
    use crate::catalog::command::tests::new_session;
    use crate::core::command::{Command, CommandError};
    use crate::core::library::RatingOutcome;

    #[test]
    fn test_should_run_record_read() {
        let mut session = new_session();
        let book = session.catalog_mut().create_book("T", 1, 3.0).expect("book");
        session.add_draft(book);
        session.catalog_mut().add_reader("Ann", "ann@x.org", &[]).expect("reader");

        let res = RecordReadCommand::new(&mut session)
            .execute(RecordReadCommandRequest::new("ann@x.org", 1, Some(9)))
            .expect("should record read");
        assert_eq!(RatingOutcome::OutOfRange(9), res.receipt.rating);
        assert_eq!(1, res.receipt.read_count);
        assert_eq!(0, session.drafts());
    }

    #[test]
    fn test_should_refuse_unknown_reader() {
        let mut session = new_session();
        let book = session.catalog_mut().create_book("T", 1, 3.0).expect("book");
        session.add_draft(book);
        let res = RecordReadCommand::new(&mut session)
            .execute(RecordReadCommandRequest::new("ghost@x.org", 1, None));
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
