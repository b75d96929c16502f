//! # Remark Core
//!
//! The domain layer of the Remark service: comment ingestion, user use cases
//! and the ports that storage and external integrations implement.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError, ValidationError};
pub use service::{CommentService, UserService};
