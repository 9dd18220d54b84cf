use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlybyError {
    #[error("no data source available: pass --data or configure data-file")]
    NoDataSource,

    #[error("unsupported feature: {0}")]
    Unsupported(String),

    #[error("invalid filter expression '{0}': expected field:op:value")]
    InvalidFilter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlybyError>;
