use crate::intake::candidate_file::CandidateFile;
use thiserror::Error;

/// Failure of a single upload. `Display` is what ends up in the
/// "Details:" part of the status message.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read {name}: {source}")]
    ReadFile {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid upload request: {0}")]
    Request(String),
    #[error("{0}")]
    Transport(String),
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("invalid JSON in response: {0}")]
    Decode(String),
}

pub trait PredictionClient: Send + Sync {
    /// Uploads one file and returns the parsed JSON body of a 2xx response.
    fn predict(&self, file: &CandidateFile) -> Result<serde_json::Value, UploadError>;
}
