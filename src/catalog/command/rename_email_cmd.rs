use serde::{Deserialize, Serialize};
use crate::catalog::session::CatalogSession;
use crate::core::command::{Command, CommandError};
use crate::readers::dto::ReaderDto;

pub struct RenameEmailCommand<'a> {
    session: &'a mut CatalogSession,
}

impl<'a> RenameEmailCommand<'a> {
    pub fn new(session: &'a mut CatalogSession) -> Self {
        Self {
            session,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenameEmailCommandRequest {
    pub old_email: String,
    pub new_email: String,
}

impl RenameEmailCommandRequest {
    pub fn new(old_email: &str, new_email: &str) -> Self {
        Self {
            old_email: old_email.to_string(),
            new_email: new_email.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RenameEmailCommandResponse {
    pub reader: Option<ReaderDto>,
}

impl Command<RenameEmailCommandRequest, RenameEmailCommandResponse> for RenameEmailCommand<'_> {
    fn execute(&mut self, req: RenameEmailCommandRequest) -> Result<RenameEmailCommandResponse, CommandError> {
        let catalog = self.session.catalog_mut();
        catalog.rename_reader_email(req.old_email.as_str(), req.new_email.as_str())?;
        Ok(RenameEmailCommandResponse { reader: catalog.reader(req.new_email.as_str()).map(ReaderDto::from) })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::rename_email_cmd::{RenameEmailCommand, RenameEmailCommandRequest};
    use crate::catalog::command::tests::new_session;
    use crate::core::command::Command;

    #[test]
    fn test_should_run_rename_email() {
        let mut session = new_session();
        session.catalog_mut().add_reader("Ann", "ann@x.org", &[]).expect("reader");
        let res = RenameEmailCommand::new(&mut session)
            .execute(RenameEmailCommandRequest::new("ann@x.org", "ann@y.edu"))
            .expect("should rename");
        assert_eq!(Some("ann@y.edu".to_string()), res.reader.map(|r| r.email));
    }
}
