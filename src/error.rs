use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenegramError {
    #[error("Grammar inconsistency: {0}")]
    GrammarInconsistency(String),

    #[error("Production index {index} out of bounds (grammar has {len} productions)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenegramError>;
