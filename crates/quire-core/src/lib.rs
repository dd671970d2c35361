//! # Quire Core
//!
//! The domain layer of the Quire blog service.
//! This crate contains the post model, the search filter and the storage port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod search;

pub use error::DomainError;
