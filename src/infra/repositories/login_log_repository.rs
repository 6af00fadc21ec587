//! Login log repository - data access for `tb_inai_log`.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{Set, Unchanged},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

#[cfg(test)]
use mockall::automock;

use super::base::{self, persistence_failure};
use super::entities::login_log::{self, ActiveModel, Entity as LoginLogEntity};
use crate::domain::{LoginLog, NewLoginLog};
use crate::errors::AppError;
use crate::types::{Done, Outcome};

const ENTITY: &str = "Login session";

/// Login events have no soft-delete flag; every row is visible.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LoginLogRepository: Send + Sync {
    async fn get_all(&self) -> Outcome<Vec<LoginLog>>;

    async fn get_by_id(&self, id: i32) -> Outcome<LoginLog>;

    /// All events of one user, newest first.
    async fn get_by_user(&self, user_id: i32) -> Outcome<Vec<LoginLog>>;

    /// The user's most recent event without a logout time.
    async fn get_open_session(&self, user_id: i32) -> Outcome<LoginLog>;

    async fn create(&self, log: NewLoginLog) -> Outcome<LoginLog>;

    async fn update(&self, log: LoginLog) -> Outcome<LoginLog>;
}

pub struct LoginLogStore {
    db: DatabaseConnection,
}

impl LoginLogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LoginLogRepository for LoginLogStore {
    async fn get_all(&self) -> Outcome<Vec<LoginLog>> {
        let models = LoginLogEntity::find()
            .order_by_asc(login_log::Column::LogId)
            .all(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?;

        Ok(Done::ok(models.into_iter().map(LoginLog::from).collect()))
    }

    async fn get_by_id(&self, id: i32) -> Outcome<LoginLog> {
        LoginLogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?
            .map(|model| Done::ok(LoginLog::from(model)))
            .ok_or_else(|| AppError::not_found(ENTITY))
    }

    async fn get_by_user(&self, user_id: i32) -> Outcome<Vec<LoginLog>> {
        let models = LoginLogEntity::find()
            .filter(login_log::Column::UserId.eq(user_id))
            .order_by_desc(login_log::Column::LogId)
            .all(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?;

        Ok(Done::ok(models.into_iter().map(LoginLog::from).collect()))
    }

    async fn get_open_session(&self, user_id: i32) -> Outcome<LoginLog> {
        LoginLogEntity::find()
            .filter(login_log::Column::UserId.eq(user_id))
            .filter(login_log::Column::LogoutTime.is_null())
            .order_by_desc(login_log::Column::LogId)
            .one(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?
            .map(|model| Done::ok(LoginLog::from(model)))
            .ok_or_else(|| AppError::not_found(ENTITY))
    }

    async fn create(&self, log: NewLoginLog) -> Outcome<LoginLog> {
        let active = ActiveModel {
            user_id: Set(log.user_id),
            login_time: Set(log.login_time),
            logout_time: Set(None),
            ..Default::default()
        };

        let model = base::insert(&self.db, ENTITY, active).await?;
        Ok(Done::ok(LoginLog::from(model)))
    }

    async fn update(&self, log: LoginLog) -> Outcome<LoginLog> {
        let active = ActiveModel {
            log_id: Unchanged(log.log_id),
            user_id: Set(log.user_id),
            login_time: Set(log.login_time),
            logout_time: Set(log.logout_time),
        };

        let model = base::update(&self.db, ENTITY, active).await?;
        Ok(Done::ok(LoginLog::from(model)))
    }
}
