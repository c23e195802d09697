use tracing::Level;

// Installs the JSON subscriber used by the catalog binary. Library code only
// emits events and never installs a subscriber itself.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        // module paths add noise to the one-line-per-event output.
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .json()
        .init();
}
