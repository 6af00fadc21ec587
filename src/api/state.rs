//! Application state - Dependency injection container.
//!
//! Built once at startup and passed to the router; there is no global
//! service or configuration singleton.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

/// Name and version reported by the root endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppInfo {
    #[schema(example = "InvoAI User Management")]
    pub name: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

impl From<&Config> for AppInfo {
    fn from(config: &Config) -> Self {
        Self {
            name: config.app_name.clone(),
            version: config.app_version.clone(),
        }
    }
}

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Builds per-request services
    pub services: Arc<dyn ServiceContainer>,
    /// Database handle (health checks)
    pub database: Arc<Database>,
    pub info: AppInfo,
}

impl AppState {
    /// Create application state from a connected database and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let services = Arc::new(Services::from_connection(database.get_connection()));
        Self::new(services, database, AppInfo::from(config))
    }

    /// Create application state with a manually injected service container.
    pub fn new(
        services: Arc<dyn ServiceContainer>,
        database: Arc<Database>,
        info: AppInfo,
    ) -> Self {
        Self {
            services,
            database,
            info,
        }
    }
}
