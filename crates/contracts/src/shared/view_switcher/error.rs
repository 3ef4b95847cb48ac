use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid switcher config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid visibility classes (hidden '{hidden}', visible '{visible}'): expected two distinct non-empty tokens without whitespace")]
    InvalidClasses { hidden: String, visible: String },

    #[error("unknown switcher variant '{0}' (expected 'strict' or 'lenient')")]
    UnknownVariant(String),
}
