//! User aggregate
//!
//! Contains the user record, the draft submitted by callers, and the
//! repository interface.

pub mod draft;
pub mod model;
pub mod repository;

pub use draft::UserDraft;
pub use model::{NewUser, User, UserRole};
pub use repository::UserRepositoryInterface;
