//! # Pulse Core
//!
//! The domain layer of the Pulse posts API.
//! This crate contains the entities, the ports infrastructure must implement,
//! and the `BlogService` that answers reads, applies upvotes and fans them out.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::BlogService;
