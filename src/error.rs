use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum EcoindexError {
    #[error("reference dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("reference dataset parse error: {0}")]
    DatasetParse(String),

    #[error("reference dataset invalid: {0}")]
    DatasetInvalid(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid page metrics: {0}")]
    InvalidMetrics(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("no metric files found under: {0}")]
    EmptyBatch(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EcoindexError>;
