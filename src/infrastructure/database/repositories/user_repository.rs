use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    DomainError, DomainResult, NewUser, User, UserRepositoryInterface, UserRole,
};
use crate::infrastructure::database::entities::user;

/// SeaORM-backed user store.
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::Cliente => UserRole::Cliente,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Admin => user::UserRole::Admin,
        UserRole::Cliente => user::UserRole::Cliente,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        role: entity_role_to_domain(model.role),
        address: model.address,
        phone: model.phone,
        registered_at: model.registered_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

/// Writes can trip the unique-email constraint; surface that as a conflict
/// rather than an internal fault.
fn write_err(e: sea_orm::DbErr) -> DomainError {
    let text = e.to_string();
    if text.contains("UNIQUE") || text.contains("duplicate") {
        DomainError::Conflict("Email already exists".to_string())
    } else {
        db_err(e)
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn create(&self, record: NewUser) -> DomainResult<User> {
        let new_user = user::ActiveModel {
            id: NotSet,
            email: Set(record.email),
            password_hash: Set(record.password_hash),
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            role: Set(domain_role_to_entity(record.role)),
            address: Set(record.address),
            phone: Set(record.phone),
            registered_at: Set(record.registered_at),
        };

        let inserted = new_user.insert(&self.db).await.map_err(write_err)?;
        Ok(user_model_to_domain(inserted))
    }

    async fn update(&self, record: User) -> DomainResult<User> {
        let existing = user::Entity::find_by_id(record.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(DomainError::NotFound("User"))?;

        let mut active: user::ActiveModel = existing.into();
        active.email = Set(record.email);
        active.password_hash = Set(record.password_hash);
        active.first_name = Set(record.first_name);
        active.last_name = Set(record.last_name);
        active.role = Set(domain_role_to_entity(record.role));
        active.address = Set(record.address);
        active.phone = Set(record.phone);
        // registered_at is immutable after creation

        let updated = active.update(&self.db).await.map_err(write_err)?;
        Ok(user_model_to_domain(updated))
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound("User"));
        }

        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }
}
