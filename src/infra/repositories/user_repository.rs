//! User repository - data access for `tb_inai_mas_user`.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{Set, Unchanged},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

#[cfg(test)]
use mockall::automock;

use super::base::{self, persistence_failure};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::RECORD_ACTIVE;
use crate::domain::{NewUser, User};
use crate::errors::AppError;
use crate::types::{Done, Outcome};

const ENTITY: &str = "User";

/// User repository trait. Reads only ever see active rows.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Outcome<Vec<User>>;

    /// Fails with 404 when absent or soft-deleted.
    async fn get_by_id(&self, id: i32) -> Outcome<User>;

    /// Every active user with this name, oldest first. Names are not unique.
    async fn get_by_user_name(&self, user_name: String) -> Outcome<Vec<User>>;

    /// Every active user with this biometric id (possibly none).
    async fn get_by_bio_id(&self, bio_id: i32) -> Outcome<Vec<User>>;

    async fn create(&self, user: NewUser) -> Outcome<User>;

    async fn update(&self, user: User) -> Outcome<User>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_active(&self, filter: sea_orm::Condition) -> Outcome<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::IsDeleted.eq(RECORD_ACTIVE))
            .filter(filter)
            .order_by_asc(user::Column::UserId)
            .all(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?;

        Ok(Done::ok(models.into_iter().map(User::from).collect()))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn get_all(&self) -> Outcome<Vec<User>> {
        self.find_active(sea_orm::Condition::all()).await
    }

    async fn get_by_id(&self, id: i32) -> Outcome<User> {
        let model = UserEntity::find_by_id(id)
            .filter(user::Column::IsDeleted.eq(RECORD_ACTIVE))
            .one(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?;

        match model {
            Some(model) => Ok(Done::ok(User::from(model))),
            None => {
                tracing::debug!(user_id = id, "User not found");
                Err(AppError::not_found(ENTITY))
            }
        }
    }

    async fn get_by_user_name(&self, user_name: String) -> Outcome<Vec<User>> {
        self.find_active(sea_orm::Condition::all().add(user::Column::UserName.eq(user_name)))
            .await
    }

    async fn get_by_bio_id(&self, bio_id: i32) -> Outcome<Vec<User>> {
        self.find_active(sea_orm::Condition::all().add(user::Column::BioId.eq(bio_id)))
            .await
    }

    async fn create(&self, user: NewUser) -> Outcome<User> {
        let active = ActiveModel {
            bio_id: Set(user.bio_id),
            user_name: Set(user.user_name),
            password_hash: Set(user.password_hash),
            created_by: Set(user.created_by),
            created_at: Set(user.created_at),
            is_deleted: Set(RECORD_ACTIVE),
            ..Default::default()
        };

        let model = base::insert(&self.db, ENTITY, active).await?;
        Ok(Done::ok(User::from(model)))
    }

    async fn update(&self, user: User) -> Outcome<User> {
        let active = ActiveModel {
            user_id: Unchanged(user.user_id),
            bio_id: Set(user.bio_id),
            user_name: Set(user.user_name),
            password_hash: Set(user.password_hash),
            created_by: Set(user.created_by),
            created_at: Set(user.created_at),
            updated_by: Set(user.updated_by),
            updated_at: Set(user.updated_at),
            is_deleted: Set(user.is_deleted),
        };

        let model = base::update(&self.db, ENTITY, active).await?;
        Ok(Done::ok(User::from(model)))
    }
}
