use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: model.id,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }

    fn map_db_err(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        tracing::error!(error = %e, "User repository database error");
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::map_to_user_result(inserted))
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
