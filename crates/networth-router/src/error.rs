use std::fmt;

/// Result type for networth-router operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while setting up the router
#[derive(Debug)]
pub enum Error {
    /// The default section's container or link is absent from the document,
    /// so no navigable state exists.
    MissingDefaultSection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingDefaultSection(msg) => {
                write!(f, "Default section unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
