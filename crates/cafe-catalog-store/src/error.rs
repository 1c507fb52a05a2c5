//! Error types for catalog storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record with the given id.
    #[error("cafe not found: id={id}")]
    NotFound {
        /// The id that was not found.
        id: i64,
    },

    /// A random pick was requested from an empty table.
    #[error("the catalog is empty")]
    EmptyCatalog,

    /// An insert collided with an existing record's name.
    #[error("cafe name already taken: {name}")]
    NameTaken {
        /// The name that collided.
        name: String,
    },

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
