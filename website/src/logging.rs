//! Logging setup.
//!
//! `tracing` events are formatted by `tracing-subscriber` and written to the
//! browser console through `tracing-web`. The level filter is fixed at build
//! time through the `LIMIINAL_LOG` environment variable (`error`, `warn`,
//! `info`, `debug`, `trace` or `off`), defaulting to `info`.

use tracing_subscriber::filter::LevelFilter;
use tracing_web::MakeWebConsoleWriter;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Parse a log level, falling back to `info` on anything unrecognised.
pub fn level_from(raw: Option<&str>) -> LevelFilter {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

fn console_subscriber(level: LevelFilter) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .with_max_level(level)
        // wasm32 has no SystemTime clock
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .finish()
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let level = level_from(option_env!("LIMIINAL_LOG"));
    if let Err(e) = tracing::subscriber::set_global_default(console_subscriber(level)) {
        tracing::warn!("logging already initialised: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing::Level;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(level_from(None), LevelFilter::INFO);
        assert_eq!(level_from(Some("")), LevelFilter::INFO);
        assert_eq!(level_from(Some("loud")), LevelFilter::INFO);
    }

    #[test]
    fn level_parses_known_names() {
        assert_eq!(level_from(Some("debug")), LevelFilter::DEBUG);
        assert_eq!(level_from(Some(" WARN ")), LevelFilter::WARN);
        assert_eq!(level_from(Some("off")), LevelFilter::OFF);
    }

    #[test]
    fn console_subscriber_applies_level_filter() {
        tracing::subscriber::with_default(console_subscriber(LevelFilter::WARN), || {
            assert!(tracing::enabled!(Level::ERROR));
            assert!(tracing::enabled!(Level::WARN));
            assert!(!tracing::enabled!(Level::INFO));
        });
    }

    #[test]
    fn off_silences_everything() {
        tracing::subscriber::with_default(console_subscriber(LevelFilter::OFF), || {
            assert!(!tracing::enabled!(Level::ERROR));
        });
    }
}
