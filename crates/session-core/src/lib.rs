//! # Session Core
//!
//! Domain entities and repository traits used by the session authenticator.

pub mod domain;
pub mod repositories;
pub mod error;

pub use domain::*;
pub use error::DomainError;
pub use repositories::UserRepository;
