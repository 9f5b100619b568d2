//! User management service — application-layer orchestration
//!
//! All user-related business logic lives here. HTTP handlers are thin
//! wrappers that delegate to this service.

use std::sync::Arc;

use chrono::Local;
use tracing::info;

use crate::application::users::validation::{aggregate, RecordValidator, PASSWORD_RULE};
use crate::domain::{
    DomainError, DomainResult, NewUser, User, UserDraft, UserRepositoryInterface, UserRole,
};
use crate::infrastructure::crypto::PasswordHasher;

/// User service — orchestrates validation, uniqueness checks, credential
/// hashing and store operations.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from the
/// concrete persistence layer; validator and hasher are injected rather
/// than process-wide singletons.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
    validator: RecordValidator,
    hasher: PasswordHasher,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>, validator: RecordValidator, hasher: PasswordHasher) -> Self {
        Self {
            repo,
            validator,
            hasher,
        }
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new account.
    ///
    /// Validates the draft, pre-checks email uniqueness, enforces password
    /// strength, then hashes the password and persists. The registration
    /// date is stamped here; callers cannot supply it.
    pub async fn register(&self, draft: UserDraft) -> DomainResult<User> {
        let violations = self.validator.validate_record(&draft);
        if !violations.is_empty() {
            return Err(DomainError::Validation(aggregate(&violations)));
        }

        if self.repo.find_by_email(&draft.email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }

        if !self.validator.validate_password_strength(&draft.password) {
            return Err(DomainError::Validation(PASSWORD_RULE.to_string()));
        }

        let role = UserRole::parse(&draft.role)
            .ok_or_else(|| DomainError::Validation("Invalid role".to_string()))?;
        let password_hash = self.hasher.hash(&draft.password)?;

        let user = self
            .repo
            .create(NewUser {
                email: draft.email,
                password_hash,
                first_name: draft.first_name,
                last_name: draft.last_name,
                role,
                address: draft.address,
                phone: draft.phone,
                registered_at: Local::now().date_naive(),
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "New user registered");
        Ok(user)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by email and password.
    ///
    /// Returns the full stored record; the transport layer decides what
    /// crosses the boundary.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(DomainError::NotFound("User"))?;

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(DomainError::Validation("Incorrect password".to_string()));
        }

        Ok(user)
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Change a user's role. The value is validated case-insensitively
    /// against the fixed role set and normalized before persisting.
    pub async fn update_role(&self, id: i64, new_role: &str) -> DomainResult<User> {
        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("User"))?;

        let role = UserRole::parse(new_role)
            .ok_or_else(|| DomainError::Validation("Invalid role".to_string()))?;

        user.role = role;
        let updated = self.repo.update(user).await?;

        info!(user_id = updated.id, role = updated.role.as_str(), "User role updated");
        Ok(updated)
    }

    /// Update first/last name, address and phone. Email, credentials and
    /// role never change through this path.
    pub async fn update_profile(&self, id: i64, mut draft: UserDraft) -> DomainResult<User> {
        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("User"))?;

        // The stored hash and role stand in for the draft's fields so the
        // candidate validates as a whole record.
        draft.password = user.password_hash.clone();
        draft.role = user.role.as_str().to_string();

        let violations = self.validator.validate_record(&draft);
        if !violations.is_empty() {
            return Err(DomainError::Validation(aggregate(&violations)));
        }

        user.first_name = draft.first_name;
        user.last_name = draft.last_name;
        user.address = draft.address;
        user.phone = draft.phone;

        let updated = self.repo.update(user).await?;

        info!(user_id = updated.id, "User profile updated");
        Ok(updated)
    }

    /// Delete an account by id. Hard delete, immediate.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound("User"));
        }

        self.repo.delete_by_id(id).await?;

        info!(user_id = id, "User deleted");
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Every stored record, no pagination or filtering.
    pub async fn list_all(&self) -> DomainResult<Vec<User>> {
        self.repo.find_all().await
    }
}
