//! Error types for sonarviz

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// sonarviz error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Serial device could not be opened
    #[error("failed to open serial device {path}: {source}")]
    Open {
        /// Device path that was attempted
        path: String,
        /// Underlying serial error
        source: serialport::Error,
    },

    /// Serial attributes could not be applied to an open handle
    #[error("failed to configure serial device: {0}")]
    Config(serialport::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid config file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    /// Publish target address could not be parsed
    #[error("invalid publish target address: {0}")]
    InvalidAddress(String),

    /// Wire serialization failure
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
