use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use crate::catalog::command::add_reader_cmd::{AddReaderCommand, AddReaderCommandRequest};
use crate::catalog::command::create_book_cmd::{CreateBookCommand, CreateBookCommandRequest};
use crate::catalog::command::reassign_isbn_cmd::{ReassignIsbnCommand, ReassignIsbnCommandRequest};
use crate::catalog::command::record_read_cmd::{RecordReadCommand, RecordReadCommandRequest};
use crate::catalog::command::rename_email_cmd::{RenameEmailCommand, RenameEmailCommandRequest};
use crate::catalog::command::report_cmd::{ReportCommand, ReportCommandRequest};
use crate::catalog::factory;
use crate::catalog::session::CatalogSession;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

// One step of a driver script, tagged by its `step` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    AddReader(AddReaderCommandRequest),
    CreateBook(CreateBookCommandRequest),
    RecordRead(RecordReadCommandRequest),
    RenameEmail(RenameEmailCommandRequest),
    ReassignIsbn(ReassignIsbnCommandRequest),
    Report(ReportCommandRequest),
}

#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: Option<Configuration>,
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// Outcome of a single step. A refused step does not stop the script.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Ok(Value),
    Refused(CommandError),
}

pub fn dispatch(session: &mut CatalogSession, step: ScriptStep) -> Result<Value, CommandError> {
    let res = match step {
        ScriptStep::AddReader(req) => serde_json::to_value(AddReaderCommand::new(session).execute(req)?)?,
        ScriptStep::CreateBook(req) => serde_json::to_value(CreateBookCommand::new(session).execute(req)?)?,
        ScriptStep::RecordRead(req) => serde_json::to_value(RecordReadCommand::new(session).execute(req)?)?,
        ScriptStep::RenameEmail(req) => serde_json::to_value(RenameEmailCommand::new(session).execute(req)?)?,
        ScriptStep::ReassignIsbn(req) => serde_json::to_value(ReassignIsbnCommand::new(session).execute(req)?)?,
        ScriptStep::Report(req) => serde_json::to_value(ReportCommand::new(session).execute(req)?)?,
    };
    Ok(res)
}

pub fn run_script(script: Script, via: GatewayPublisherVia) -> Vec<StepOutcome> {
    let config = script.config.unwrap_or_default();
    info!(catalog = %config.catalog_id, steps = script.steps.len(), "running script");
    let mut session = CatalogSession::new(factory::create_catalog_service(&config, via));
    let mut outcomes = Vec::with_capacity(script.steps.len());
    for (ndx, step) in script.steps.into_iter().enumerate() {
        match dispatch(&mut session, step) {
            Ok(value) => outcomes.push(StepOutcome::Ok(value)),
            Err(err) => {
                warn!(step = ndx, %err, "step refused");
                outcomes.push(StepOutcome::Refused(err));
            }
        }
    }
    outcomes
}
