use chrono::NaiveDate;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Cliente,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Cliente => "cliente",
        }
    }

    /// Case-insensitive parse against the fixed role set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "cliente" => Some(UserRole::Cliente),
            _ => None,
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Cliente
    }
}

/// Persisted user record
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Stamped once at registration, never touched by updates.
    pub registered_at: NaiveDate,
}

/// Record ready for insertion; the store assigns the id.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub registered_at: NaiveDate,
}
