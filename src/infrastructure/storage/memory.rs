//! In-memory storage implementation

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainError, DomainResult, NewUser, User, UserRepositoryInterface};

/// In-memory user store for development and testing
pub struct InMemoryUserRepository {
    users: DashMap<i64, User>,
    id_counter: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            id_counter: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, user: NewUser) -> DomainResult<User> {
        // unique-email backstop, mirroring the relational schema
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }

        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            address: user.address,
            phone: user.phone,
            registered_at: user.registered_at,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        if !self.users.contains_key(&user.id) {
            return Err(DomainError::NotFound("User"));
        }
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        self.users
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::NotFound("User"))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let mut all: Vec<User> = self.users.iter().map(|entry| entry.value().clone()).collect();
        all.sort_by_key(|u| u.id);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use chrono::NaiveDate;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "$2b$04$hash".to_string(),
            first_name: "Alicia".to_string(),
            last_name: "Gomez".to_string(),
            role: UserRole::Cliente,
            address: None,
            phone: None,
            registered_at: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create(new_user("a@b.com")).await.unwrap();
        let second = repo.create(new_user("c@d.com")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("a@b.com")).await.unwrap();
        let err = repo.create(new_user("a@b.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn find_all_returns_records_in_id_order() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.create(new_user("a@b.com")).await.unwrap();
        repo.create(new_user("c@d.com")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id < all[1].id);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let err = repo.delete_by_id(999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
