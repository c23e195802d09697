use serde::{Deserialize, Serialize};
use crate::books::model::BookKey;
use crate::catalog::session::CatalogSession;
use crate::core::command::{Command, CommandError};

pub struct ReassignIsbnCommand<'a> {
    session: &'a mut CatalogSession,
}

impl<'a> ReassignIsbnCommand<'a> {
    pub fn new(session: &'a mut CatalogSession) -> Self {
        Self {
            session,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReassignIsbnCommandRequest {
    pub title: String,
    pub isbn: u64,
    pub new_isbn: u64,
}

#[derive(Debug, Serialize)]
pub struct ReassignIsbnCommandResponse {
    pub book: BookKey,
}

impl Command<ReassignIsbnCommandRequest, ReassignIsbnCommandResponse> for ReassignIsbnCommand<'_> {
    fn execute(&mut self, req: ReassignIsbnCommandRequest) -> Result<ReassignIsbnCommandResponse, CommandError> {
        let key = BookKey::new(req.title.as_str(), req.isbn);
        let book = self.session.catalog_mut().reassign_isbn(&key, req.new_isbn)?;
        self.session.forget_draft(req.isbn);
        Ok(ReassignIsbnCommandResponse { book })
    }
}
