use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs a global `tracing` subscriber writing to stdout.
///
/// The level is read from the `LOGLEVEL` environment variable (`ERROR`, `WARN`,
/// `INFO`, `DEBUG` or `TRACE`, case insensitive) and defaults to `INFO`. Calling it
/// more than once is harmless; only the first call installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(&env::var("LOGLEVEL").unwrap_or_default());

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .with_line_number(true)
            .compact()
            .finish();

        // Another subscriber may already be installed by the host application.
        let _ = tracing::subscriber::set_global_default(subscriber);
        tracing::debug!("Log level set to: {}", level);
    });
}

fn parse_level(value: &str) -> Level {
    match value.to_uppercase().as_str() {
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "DEBUG" => Level::DEBUG,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    }
}
