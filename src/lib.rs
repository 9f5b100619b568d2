//! # Accounts Service
//!
//! User-account management service: registration, login, role and profile
//! updates, deletion and listing, backed by a relational store.
//!
//! ## Architecture
//!
//! - **domain**: core entities, the error taxonomy and the repository contract
//! - **application**: validation rules and the user service
//! - **infrastructure**: persistence (SeaORM and in-memory) and password hashing
//! - **interfaces**: Axum REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
