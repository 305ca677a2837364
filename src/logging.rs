use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Parse a level name ("trace" .. "error"), case-insensitive.
/// "off" disables logging entirely.
pub fn parse_level(name: &str) -> Option<Option<Level>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" | "none" => Some(None),
        other => other.parse::<Level>().ok().map(Some),
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    ["html5ever=warn", "selectors=warn"]
        .into_iter()
        .filter_map(|d| d.parse::<Directive>().ok())
        .fold(filter, EnvFilter::add_directive)
}

/// Install a stderr subscriber once per process. Later calls are no-ops, and
/// so is a call made after the host already installed a global subscriber.
pub fn init(level: Option<&str>) {
    INIT.get_or_init(|| {
        let level = match level.map(parse_level) {
            Some(Some(Some(level))) => level,
            Some(Some(None)) => return,
            Some(None) | None => DEFAULT_LEVEL,
        };

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true);

        let _ = tracing_subscriber::registry()
            .with(build_env_filter(level))
            .with(stderr_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_names() {
        assert_eq!(parse_level("debug"), Some(Some(Level::DEBUG)));
        assert_eq!(parse_level(" INFO "), Some(Some(Level::INFO)));
        assert_eq!(parse_level("off"), Some(None));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn init_is_idempotent() {
        init(Some("debug"));
        init(Some("trace"));
        init(None);
    }
}
