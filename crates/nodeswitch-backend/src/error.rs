use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum BackendError {
    #[error("nvm not found on this system")]
    NotFound,

    #[error("Command failed: {output}")]
    CommandFailed { output: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::IoError(err.to_string())
    }
}
