//! Error types for Roster

/// Main error type for Roster operations
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for RosterError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
