//! Diagnostic logging on stderr via `tracing`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `ASK_LOG=debug`.
pub const LOG_ENV: &str = "ASK_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "ask_cli=debug" } else { "warn" }
}

/// Installs the global subscriber. `ASK_LOG` wins over `--verbose`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
