//! Business logic and use-case orchestration

pub mod users;

pub use users::{RecordValidator, UserService};
