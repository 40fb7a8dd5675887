use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanshuError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no entry with id '{0}'")]
    InvalidId(String),

    #[error("index {index} is out of range for '{bucket}' (length {len})")]
    IndexOutOfRange { bucket: &'static str, index: usize, len: usize },

    #[error("invalid dataset: {0}")]
    Validation(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<std::io::Error> for KanshuError {
    fn from(error: std::io::Error) -> Self {
        KanshuError::Io(Box::new(error))
    }
}
