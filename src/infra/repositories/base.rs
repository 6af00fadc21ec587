//! Shared write path and error mapping for all repositories.
//!
//! `DbErr` stops here: every persistence error leaves a repository as an
//! [`AppError`], never as a raw database error.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    SqlErr,
};

use crate::errors::AppError;
use crate::infra::unit_of_work::run_in_transaction;

/// Convert a persistence error into the failure side of an outcome.
///
/// Unique-constraint violations become `Conflict` (409); anything else is
/// logged in full and becomes a generic `Database` failure (500).
pub(crate) fn persistence_failure(entity: &str, action: &str, err: DbErr) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        tracing::warn!(entity, action, detail = %detail, "Unique constraint violated");
        return AppError::conflict(entity);
    }

    tracing::error!(entity, action, error = %err, "Persistence failure");
    AppError::database(
        format!("Database error while {} {}", action, entity.to_lowercase()),
        err,
    )
}

/// Insert a row inside its own transaction.
pub(crate) async fn insert<A>(
    db: &DatabaseConnection,
    entity: &'static str,
    model: A,
) -> Result<<A::Entity as EntityTrait>::Model, AppError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A> + Send,
{
    run_in_transaction(db, |txn| Box::pin(async move { model.insert(txn).await }))
        .await
        .map_err(|e| persistence_failure(entity, "creating", e))
}

/// Update a row by primary key inside its own transaction.
///
/// A write that matches no row is reported as `NotFound`.
pub(crate) async fn update<A>(
    db: &DatabaseConnection,
    entity: &'static str,
    model: A,
) -> Result<<A::Entity as EntityTrait>::Model, AppError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A> + Send,
{
    run_in_transaction(db, |txn| Box::pin(async move { model.update(txn).await }))
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                tracing::debug!(entity, "Update matched no row");
                AppError::not_found(entity)
            }
            other => persistence_failure(entity, "updating", other),
        })
}
