#[derive(Debug, thiserror::Error)]
pub enum SoilError {
    #[error("soil.address_required")]
    AddressRequired,
    #[error("soil.monitor_unavailable")]
    MonitorUnavailable(String),
    #[error("storage.unavailable")]
    Storage(#[from] crate::domain::errors::StorageError),
}
