use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PrismError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");
    }

    #[test]
    fn config_error_parse_display() {
        let err = ConfigError::ParseError("bad toml".into());
        assert_eq!(err.to_string(), "config parse error: bad toml");
    }

    #[test]
    fn prism_error_from_config() {
        let err: PrismError = ConfigError::ValidationError("out of range".into()).into();
        assert_eq!(err.to_string(), "config validation error: out of range");
    }

    #[test]
    fn prism_error_renderer_display() {
        let err = PrismError::Renderer("no adapter".into());
        assert_eq!(err.to_string(), "renderer error: no adapter");
    }
}
