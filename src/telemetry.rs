//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! - `CODE_DRILL_LOG` sets the filter (e.g. `debug` or
//!   `info,code_drill_gen::problem_engine=debug`). Defaults to `info`.
//! - `CODE_DRILL_LOG_FORMAT=json` switches to JSON lines; anything else is
//!   the human-readable format.
//!
//! Logs go to stderr so `--stdout` output stays clean JSON.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("CODE_DRILL_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match std::env::var("CODE_DRILL_LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
