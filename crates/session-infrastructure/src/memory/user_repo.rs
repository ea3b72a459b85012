//! In-memory user repository, optionally seeded from a JSON user file

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{info, warn};

use session_core::error::DomainError;
use session_core::repositories::UserRepository;
use session_core::User;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a JSON object keyed by user id (`{"<id>": {...user...}}`).
    ///
    /// A missing file yields an empty repository.
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("User file {} not found, starting with no users", path.display());
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(DomainError::StorageError(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let repo = Self::from_json(&raw)?;
        info!("Loaded {} users from {}", repo.len(), path.display());
        Ok(repo)
    }

    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Ok(Self::new());
        }
        let entries: HashMap<String, User> = serde_json::from_str(raw)
            .map_err(|e| DomainError::StorageError(format!("invalid user file: {}", e)))?;

        let repo = Self::new();
        for (_, user) in entries {
            repo.insert(user);
        }
        Ok(repo)
    }

    pub fn insert(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }
}
