//! Credential hashing

pub mod password;

pub use password::PasswordHasher;
