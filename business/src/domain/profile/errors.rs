#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile.invalid")]
    Validation(crate::domain::shared::validation::FieldErrors),
    #[error("profile.not_found")]
    NotFound,
    #[error("storage.unavailable")]
    Storage(#[from] crate::domain::errors::StorageError),
}
