use thiserror::Error;

/// Errors raised by [`crate::DataService`] backends and local persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored data is malformed: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("could not encode data: {0}")]
    Encode(#[from] toml::ser::Error),

    /// The remote backend answered with an error.
    #[error("{0}")]
    Remote(String),

    /// The local platform store could not be opened or used.
    #[error("local store unavailable: {0}")]
    Unavailable(String),
}
