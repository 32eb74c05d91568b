#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("room, name, complaint and treatments are required")]
    MissingRequiredFields,
    #[error("patient not found: {0}")]
    NotFound(i64),
    #[error("failed to read patient store: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write patient store: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize patients: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize patients: {0}")]
    Deserialization(serde_json::Error),
    #[error("patient store is unavailable: a previous writer panicked")]
    StoreUnavailable,
}

impl PatientError {
    /// True for failures of the backing store itself, as opposed to problems with the request.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            PatientError::FileRead(_)
                | PatientError::FileWrite(_)
                | PatientError::Serialization(_)
                | PatientError::Deserialization(_)
                | PatientError::StoreUnavailable
        )
    }
}

pub type PatientResult<T> = std::result::Result<T, PatientError>;
