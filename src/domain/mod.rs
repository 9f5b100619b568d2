//! Core business entities, errors and persistence contracts.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{NewUser, User, UserDraft, UserRepositoryInterface, UserRole};
