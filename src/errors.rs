use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionalyzeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("AI service error: {0}")]
    AiServiceError(String),

    #[error("Invalid alert: {0}")]
    InvalidAlert(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, ActionalyzeError>;

impl From<String> for ActionalyzeError {
    fn from(s: String) -> Self {
        ActionalyzeError::Unknown(s)
    }
}

impl From<&str> for ActionalyzeError {
    fn from(s: &str) -> Self {
        ActionalyzeError::Unknown(s.to_string())
    }
}
