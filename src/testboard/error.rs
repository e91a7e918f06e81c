use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No snapshot found for collection '{0}'")]
    CollectionNotFound(String),

    #[error("Unknown filter field '{field}' for {entity}")]
    UnknownField { entity: String, field: String },

    #[error("Unknown sort key '{key}' for {entity}")]
    UnknownSortKey { entity: String, key: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, TestboardError>;
