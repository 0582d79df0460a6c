use sentio_domain::config::LoggingConfig;
use sentio_logger::{LevelFilter, Logger, LoggerError};

/// Installs the global subscriber described by a `[logging]` section.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level and
/// propagates any builder failure.
pub fn init_logging(name: &str, cfg: &LoggingConfig) -> Result<Logger, LoggerError> {
    let level = parse_level(&cfg.level)?;

    let builder = Logger::builder().name(name).level(level).ansi(cfg.ansi);
    let builder = match &cfg.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };

    match &cfg.path {
        Some(path) => builder.path(path).json(cfg.json).init(),
        None => builder.init(),
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse::<LevelFilter>().map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}': {e}").into(),
        context: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_accepts_names_case_insensitively() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
    }

    #[test]
    fn test_parse_level_rejects_garbage() {
        assert!(matches!(parse_level("loud"), Err(LoggerError::InvalidConfiguration { .. })));
    }
}
