//! User repository trait (port)

use async_trait::async_trait;
use crate::domain::User;
use crate::error::DomainError;

/// Read side of the user-management subsystem.
///
/// `Ok(None)` means the id is unknown; `Err` is reserved for a failing
/// backend.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;
}
