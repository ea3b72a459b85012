//! In-memory adapters

pub mod user_repo;

pub use user_repo::InMemoryUserRepository;
