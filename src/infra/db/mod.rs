//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect and apply pending migrations.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let database = Self::connect_without_migrations(config).await?;

        if let Err(e) = database.run_migrations().await {
            tracing::error!(error = %e, "Failed to run migrations");
            return Err(e);
        }

        tracing::info!("Database connected and migrations applied");
        Ok(database)
    }

    /// Connect without running migrations (for CLI commands).
    ///
    /// On Postgres the configured schema is created if missing and used as
    /// the search path of every pooled connection.
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options.sqlx_logging(false);

        if config.is_postgres() {
            options.set_schema_search_path(config.db_schema.clone());
        }

        let connection = SeaDatabase::connect(options).await?;

        if config.is_postgres() {
            ensure_schema(&connection, &config.db_schema).await?;
        }

        tracing::debug!(schema = %config.db_schema, "Database connection established");
        Ok(Self { connection })
    }

    /// Wrap an existing connection (used by tests).
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations: Vec<(String, bool)> = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity.
    ///
    /// A closed or never-opened connection yields `Err`, never a panic.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}

/// `CREATE SCHEMA IF NOT EXISTS` for the configured schema.
async fn ensure_schema(connection: &DatabaseConnection, schema: &str) -> Result<(), DbErr> {
    if !is_plain_identifier(schema) {
        return Err(DbErr::Custom(format!("Invalid schema name: {}", schema)));
    }

    connection
        .execute(Statement::from_string(
            connection.get_database_backend(),
            format!("CREATE SCHEMA IF NOT EXISTS \"{}\"", schema),
        ))
        .await?;
    Ok(())
}

/// Schema names are interpolated into SQL, so only `[A-Za-z0-9_]` is accepted.
fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_identifier_rules() {
        assert!(is_plain_identifier("invoai"));
        assert!(is_plain_identifier("tenant_01"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("1abc"));
        assert!(!is_plain_identifier("invoai\"; DROP SCHEMA public; --"));
    }

    #[tokio::test]
    async fn test_ping_on_disconnected_handle_is_err() {
        let database = Database::from_connection(DatabaseConnection::Disconnected);
        assert!(database.ping().await.is_err());
    }
}
