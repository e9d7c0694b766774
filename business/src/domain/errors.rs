/// Storage errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read_failed")]
    Read,
    #[error("storage.write_failed")]
    Write,
    #[error("storage.serialization_failed")]
    Serialization,
}

impl StorageError {
    pub fn read() -> Self {
        StorageError::Read
    }
    pub fn write() -> Self {
        StorageError::Write
    }
    pub fn serialization() -> Self {
        StorageError::Serialization
    }
}
