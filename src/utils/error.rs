use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    #[error("D-Bus object enumeration failed: {0}")]
    DbusFdoError(#[from] zbus::fdo::Error),

    #[error("Cellular provider unavailable: {message}")]
    ProviderUnavailableError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SimError>;
