//! Database connection management and post persistence.

mod connections;
mod memory;
mod postgres_repo;

pub mod entity;

pub use connections::{DatabaseConfig, Storage};
pub use memory::InMemoryPostRepository;
pub use postgres_repo::PostgresPostRepository;
