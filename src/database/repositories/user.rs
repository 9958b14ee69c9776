//! SeaORM User repository implementation

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;

use crate::entities::{prelude::*, users};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{User, UserCreateRequest};

/// SeaORM-based User repository
#[derive(Clone)]
pub struct UserSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

impl UserSeaOrmRepository {
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }

    /// Create a new user
    ///
    /// The email is checked for uniqueness before inserting so a duplicate
    /// surfaces as a conflict instead of a backend-specific constraint error.
    pub async fn create(&self, request: UserCreateRequest) -> RepositoryResult<User> {
        let existing = Users::find()
            .filter(users::Column::Email.eq(request.email.as_str()))
            .one(&*self.connection)
            .await?;
        if existing.is_some() {
            return Err(RepositoryError::constraint_violation(
                "users_email_unique",
                format!("email '{}' is already registered", request.email),
            ));
        }

        let active_model = users::ActiveModel {
            username: Set(request.name),
            email: Set(request.email),
            password: Set(request.password),
            ..Default::default()
        };

        let model = active_model.insert(&*self.connection).await?;
        Ok(Self::to_domain(model))
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let model = Users::find_by_id(id).one(&*self.connection).await?;
        Ok(model.map(Self::to_domain))
    }

    /// List users in insertion order, bounded by an offset/limit window
    pub async fn list(&self, skip: u64, limit: u64) -> RepositoryResult<Vec<User>> {
        let models = Users::find()
            .order_by_asc(users::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&*self.connection)
            .await?;
        Ok(models.into_iter().map(Self::to_domain).collect())
    }

    /// Delete user by ID
    pub async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = Users::delete_by_id(id).exec(&*self.connection).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::record_not_found("users", "id", id));
        }
        Ok(())
    }

    fn to_domain(model: users::Model) -> User {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            password: model.password,
        }
    }
}
