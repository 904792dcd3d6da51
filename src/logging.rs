//! Structured logging setup.
//!
//! The library only emits `tracing` events; the binary installs the
//! subscriber. Output goes to stderr so stdout stays clean for `config get`
//! and friends.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count: 0 = warnings, 1 = info, 2+ = debug,
/// always scoped to this crate with everything else at `warn`.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "dirlaunch=warn,warn",
        1 => "dirlaunch=info,warn",
        2 => "dirlaunch=debug,warn",
        _ => "dirlaunch=trace,warn",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `verbosity`.
/// Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();
}

/// Route logs through the test harness's captured output.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directives() {
        assert_eq!(default_directive(0), "dirlaunch=warn,warn");
        assert_eq!(default_directive(1), "dirlaunch=info,warn");
        assert_eq!(default_directive(9), "dirlaunch=trace,warn");
    }

    #[test]
    fn test_init_is_repeatable() {
        init_test();
        init(2);
        tracing::debug!("still fine");
    }
}
