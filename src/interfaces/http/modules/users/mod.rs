//! Users module — account CRUD and login

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
