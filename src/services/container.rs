//! Service Container - Centralized service access.
//!
//! Every accessor builds a fresh service bound to fresh repositories, so a
//! request never shares a repository with another request.

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use super::{
    AuthService, Authenticator, ExtractionManager, ExtractionService, ReturnJsonManager,
    ReturnJsonService, UserManager, UserService, VendorManager, VendorService,
};
use crate::infra::{Persistence, UnitOfWork};

/// Service container trait for dependency injection.
#[cfg_attr(test, automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn vendors(&self) -> Arc<dyn VendorService>;

    fn extractions(&self) -> Arc<dyn ExtractionService>;

    fn return_jsons(&self) -> Arc<dyn ReturnJsonService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    uow: Arc<dyn UnitOfWork>,
}

impl Services {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    /// Create service container from database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        Self::new(Arc::new(Persistence::new(db)))
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        Arc::new(Authenticator::new(self.uow.users(), self.uow.login_logs()))
    }

    fn users(&self) -> Arc<dyn UserService> {
        Arc::new(UserManager::new(self.uow.users()))
    }

    fn vendors(&self) -> Arc<dyn VendorService> {
        Arc::new(VendorManager::new(self.uow.vendors()))
    }

    fn extractions(&self) -> Arc<dyn ExtractionService> {
        Arc::new(ExtractionManager::new(
            self.uow.extractions(),
            self.uow.vendors(),
        ))
    }

    fn return_jsons(&self) -> Arc<dyn ReturnJsonService> {
        Arc::new(ReturnJsonManager::new(
            self.uow.return_jsons(),
            self.uow.vendors(),
        ))
    }
}
