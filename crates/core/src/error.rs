#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required parameter is missing or malformed. Raised before any
    /// process is spawned.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The listing operation extracted successfully but the generated
    /// resource script could not be read back.
    #[error("Failed to read generated resource script: {0}")]
    ArtifactRead(std::io::Error),
}
