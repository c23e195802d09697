use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::books::model::Book;
use crate::catalog::domain::CatalogService;
use crate::catalog::session::CatalogSession;
use crate::core::command::{Command, CommandError};
use crate::readers::dto::ReaderDto;

pub struct ReportCommand<'a> {
    session: &'a CatalogSession,
}

impl<'a> ReportCommand<'a> {
    pub fn new(session: &'a CatalogSession) -> Self {
        Self {
            session,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    MostReadBook,
    MostReadBooks,
    ProlificReaders,
    HighestRatedBook,
    MostPositiveReader,
    WorthOfReader,
    MostExpensiveBooks,
    Catalog,
    Users,
    Summary,
}

#[derive(Debug, Deserialize)]
pub struct ReportCommandRequest {
    pub report: ReportKind,
    #[serde(default)]
    pub n: Option<usize>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ReportCommandRequest {
    pub fn new(report: ReportKind) -> Self {
        Self {
            report,
            n: None,
            email: None,
        }
    }

    pub fn top(report: ReportKind, n: usize) -> Self {
        Self {
            report,
            n: Some(n),
            email: None,
        }
    }

    pub fn for_reader(report: ReportKind, email: &str) -> Self {
        Self {
            report,
            n: None,
            email: Some(email.to_string()),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCommandResponse {
    Books(Vec<BookDto>),
    Readers(Vec<ReaderDto>),
    Worth(f64),
    Lines(Vec<String>),
    Summary(String),
}

fn book_dtos(catalog: &dyn CatalogService, books: Vec<&Book>) -> ReportCommandResponse {
    ReportCommandResponse::Books(books.into_iter()
        .map(|b| BookDto::from_book(b, catalog.read_count(&b.key())))
        .collect())
}

fn lines(buf: Vec<u8>) -> ReportCommandResponse {
    ReportCommandResponse::Lines(String::from_utf8_lossy(&buf).lines().map(str::to_string).collect())
}

impl Command<ReportCommandRequest, ReportCommandResponse> for ReportCommand<'_> {
    fn execute(&mut self, req: ReportCommandRequest) -> Result<ReportCommandResponse, CommandError> {
        let catalog = self.session.catalog();
        let n = req.n.unwrap_or(1);
        let res = match req.report {
            ReportKind::MostReadBook => book_dtos(catalog, catalog.most_read_book().into_iter().collect()),
            ReportKind::MostReadBooks => book_dtos(catalog, catalog.n_most_read_books(n)),
            ReportKind::HighestRatedBook => book_dtos(catalog, catalog.highest_rated_book().into_iter().collect()),
            ReportKind::MostExpensiveBooks => book_dtos(catalog, catalog.n_most_expensive_books(n)),
            ReportKind::ProlificReaders => ReportCommandResponse::Readers(
                catalog.n_most_prolific_readers(n).into_iter().map(ReaderDto::from).collect()),
            ReportKind::MostPositiveReader => ReportCommandResponse::Readers(
                catalog.most_positive_reader().into_iter().map(ReaderDto::from).collect()),
            ReportKind::WorthOfReader => {
                let email = req.email.as_deref().ok_or_else(|| CommandError::Validation {
                    message: "worth_of_reader needs an email".to_string(),
                    reason_code: None,
                })?;
                ReportCommandResponse::Worth(catalog.worth_of_reader(email)?)
            }
            ReportKind::Catalog => {
                let mut buf = Vec::new();
                catalog.print_catalog(&mut buf)?;
                lines(buf)
            }
            ReportKind::Users => {
                let mut buf = Vec::new();
                catalog.print_users(&mut buf)?;
                lines(buf)
            }
            ReportKind::Summary => ReportCommandResponse::Summary(catalog.summary()),
        };
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::report_cmd::{ReportCommand, ReportCommandRequest, ReportCommandResponse, ReportKind};
    use crate::catalog::command::tests::new_session;
    use crate::catalog::session::CatalogSession;
    use crate::core::command::{Command, CommandError};

    fn seeded() -> CatalogSession {
        let mut session = new_session();
        let catalog = session.catalog_mut();
        let a = catalog.create_book("A", 1, 10.0).expect("book");
        let b = catalog.create_novel("B", "Writer", 2, 20.0).expect("book");
        catalog.add_reader("Ann", "ann@x.org", &[]).expect("reader");
        catalog.add_reader("Ben", "ben@x.org", &[]).expect("reader");
        catalog.record_read(&a, "ann@x.org", Some(1)).expect("read");
        catalog.record_read(&a, "ben@x.org", Some(3)).expect("read");
        catalog.record_read(&b, "ben@x.org", Some(4)).expect("read");
        session
    }

    fn run(session: &CatalogSession, req: ReportCommandRequest) -> Result<ReportCommandResponse, CommandError> {
        ReportCommand::new(session).execute(req)
    }

    #[test]
    fn test_should_report_most_read_books() {
        let session = seeded();
        match run(&session, ReportCommandRequest::top(ReportKind::MostReadBooks, 5)).expect("report") {
            ReportCommandResponse::Books(books) => {
                assert_eq!(vec!["A", "B"], books.iter().map(|b| b.title.as_str()).collect::<Vec<_>>());
                assert_eq!(2, books[0].read_count);
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_should_report_highest_rated_and_positive() {
        let session = seeded();
        match run(&session, ReportCommandRequest::new(ReportKind::HighestRatedBook)).expect("report") {
            ReportCommandResponse::Books(books) => assert_eq!("B", books[0].title.as_str()),
            other => panic!("unexpected response {:?}", other),
        }
        match run(&session, ReportCommandRequest::new(ReportKind::MostPositiveReader)).expect("report") {
            ReportCommandResponse::Readers(readers) => assert_eq!("Ben", readers[0].name.as_str()),
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_should_report_worth() {
        let session = seeded();
        assert_eq!(ReportCommandResponse::Worth(30.0),
                   run(&session, ReportCommandRequest::for_reader(ReportKind::WorthOfReader, "ben@x.org")).expect("report"));
        assert!(matches!(run(&session, ReportCommandRequest::new(ReportKind::WorthOfReader)),
                         Err(CommandError::Validation { .. })));
        assert!(matches!(run(&session, ReportCommandRequest::for_reader(ReportKind::WorthOfReader, "x@y.org")),
                         Err(CommandError::NotFound { .. })));
    }

    #[test]
    fn test_should_report_listings() {
        let session = seeded();
        assert_eq!(ReportCommandResponse::Lines(vec![
            "Book named A costs 10".to_string(),
            "B by Writer costs 20".to_string(),
        ]), run(&session, ReportCommandRequest::new(ReportKind::Catalog)).expect("report"));
        assert_eq!(ReportCommandResponse::Summary("The catalog contains 2 readers and 2 books read by them.".to_string()),
                   run(&session, ReportCommandRequest::new(ReportKind::Summary)).expect("report"));
    }

    #[test]
    fn test_should_parse_report_request() {
        let req: ReportCommandRequest = serde_json::from_str(r#"{"report": "most_expensive_books", "n": 3}"#)
            .expect("should parse");
        assert_eq!(ReportKind::MostExpensiveBooks, req.report);
        assert_eq!(Some(3), req.n);
    }
}
