use thiserror::Error;

#[derive(Error, Debug)]
pub enum SbcmError {
    #[error("Data Source Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data Source Error (CSV): {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Schema Error: {0}")]
    Schema(String),
}

pub type SbcmResult<T> = Result<T, SbcmError>;
