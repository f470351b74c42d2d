use thiserror::Error;

/// Result type local to mapsieve-core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // The application algorithm itself raises nothing; a spec that reaches it
    // is already well-formed. Construction is the only place this can surface.
    #[error("invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
