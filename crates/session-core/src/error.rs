//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User store error: {0}")]
    StorageError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
