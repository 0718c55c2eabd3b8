use thiserror::Error;

#[derive(Error, Debug)]
pub enum MortgageError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Numeric error: {0}")]
    Numeric(String),
}

pub type Result<T> = std::result::Result<T, MortgageError>;
