//! User DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{User, UserDraft};

/// User API representation. The password hash never crosses this boundary.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub registered_at: NaiveDate,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            role: u.role.as_str().to_string(),
            address: u.address,
            phone: u.phone,
            registered_at: u.registered_at,
        }
    }
}

/// Registration and profile-update request body.
///
/// Missing string fields deserialize as empty so the validation engine can
/// report every violated field at once instead of the request failing at
/// the JSON layer.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl From<UserPayload> for UserDraft {
    fn from(p: UserPayload) -> Self {
        Self {
            email: p.email,
            password: p.password,
            first_name: p.first_name,
            last_name: p.last_name,
            role: p.role,
            address: p.address,
            phone: p.phone,
        }
    }
}

/// Login request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Role-update query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct UpdateRoleParams {
    /// New role, one of `admin` / `cliente` (case-insensitive)
    pub new_role: String,
}
