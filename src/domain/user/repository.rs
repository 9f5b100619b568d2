use async_trait::async_trait;

use super::{NewUser, User};
use crate::domain::DomainResult;

/// Persistence contract for user records.
///
/// Implementations own their concurrency control; every method is safe to
/// call concurrently. The storage layer enforces a unique constraint on
/// email as a backstop to the service-level pre-check.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    /// Insert a new record; the store assigns the identifier.
    async fn create(&self, user: NewUser) -> DomainResult<User>;

    /// Persist changes to an existing record, keyed by `user.id`.
    async fn update(&self, user: User) -> DomainResult<User>;

    async fn delete_by_id(&self, id: i64) -> DomainResult<()>;
    async fn find_all(&self) -> DomainResult<Vec<User>>;
}
