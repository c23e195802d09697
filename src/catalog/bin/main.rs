use std::process::ExitCode;
use reading_catalog::catalog::controller::{run_script, Script};
use reading_catalog::core::domain::Configuration;
use reading_catalog::core::library::LibraryResult;
use reading_catalog::gateway::GatewayPublisherVia;
use reading_catalog::utils::logging::setup_tracing;

// Runs a JSON script against a fresh in-memory catalog and prints one JSON
// outcome per step on stdout. Logs go to stderr. A config file given as the
// second argument replaces the script's own config.
fn main() -> ExitCode {
    let verbose = std::env::var("CATALOG_VERBOSE").is_ok();
    setup_tracing(verbose);

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: catalog <script.json> [config.json]");
        return ExitCode::from(2);
    };
    match run(path.as_str(), args.next()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, path, "script failed");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, config_path: Option<String>) -> LibraryResult<()> {
    let json = std::fs::read_to_string(path)?;
    let mut script = Script::from_json(json.as_str())?;
    if let Some(config_path) = config_path {
        let config = std::fs::read_to_string(config_path)?;
        script.config = Some(Configuration::from_json(config.as_str())?);
    }
    for outcome in run_script(script, GatewayPublisherVia::Log) {
        println!("{}", serde_json::to_string(&outcome)?);
    }
    Ok(())
}
