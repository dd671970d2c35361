//! # Quire Infrastructure
//!
//! Concrete implementations of the ports defined in `quire-core`:
//! the PostgreSQL storage connector and the post repositories built on it.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository, PostgresPostRepository, Storage};
