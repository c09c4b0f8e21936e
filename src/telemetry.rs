//! Logging setup for the binaries.
//!
//! - `LOG_LEVEL` holds the filter directives, e.g. `debug` or
//!   `info,esl_lessons=trace`.
//! - `LOG_FORMAT=json` switches to JSON lines, anything else is the default
//!   human-readable format.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,esl_lessons=debug";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
