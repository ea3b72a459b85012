//! # Session Infrastructure
//!
//! `UserRepository` adapters: JSON-file backed in-memory store and PostgreSQL.

pub mod database;
pub mod memory;

pub use database::{create_pool, PgUserRepository};
pub use memory::InMemoryUserRepository;
