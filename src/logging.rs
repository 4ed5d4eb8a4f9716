//! Opt-in structured logging.
//!
//! The library only emits `tracing` spans and events; it never installs a subscriber. Harnesses
//! embedding the front end call [`init`] (or [`init_with_filter`]) once at startup.
//!
//! Useful targets: `sprig_syntax::lexer=trace` logs every token, `sprig_syntax::parser=debug` logs
//! every reduced statement.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to [`DEFAULT_FILTER`].
///
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

/// Install a `fmt` subscriber with explicit filter directives (e.g. `"sprig_syntax=debug"`).
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_with_filter(directives: &str) -> bool {
    install(EnvFilter::new(directives))
}

fn install(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok()
}
