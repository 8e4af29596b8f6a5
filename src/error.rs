use thiserror::Error;

#[derive(Error, Debug)]
pub enum WheelboardError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML Parsing Error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type WbResult<T> = Result<T, WheelboardError>;
