//! Unit of Work pattern implementation.
//!
//! A unit of work hands out repositories bound to one database handle and
//! scopes every write in a transaction: begin, run, then commit or roll back.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::repositories::{
    ExtractionRepository, ExtractionStore, LoginLogRepository, LoginLogStore,
    ReturnJsonRepository, ReturnJsonStore, UserRepository, UserStore, VendorRepository,
    VendorStore,
};

/// Future returned by a closure running inside a transaction.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'a>>;

/// Execute a closure within a transaction.
///
/// Commits when the closure succeeds. Rolls back and returns the closure's
/// error otherwise; a failed rollback is logged, not surfaced.
pub async fn run_in_transaction<F, T>(db: &DatabaseConnection, f: F) -> Result<T, DbErr>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxFuture<'a, T> + Send,
    T: Send,
{
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(result) => {
            txn.commit().await?;
            Ok(result)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Unit of Work trait for dependency injection.
///
/// Every accessor returns a fresh repository instance, so nothing is shared
/// between two requests except the connection pool itself.
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn vendors(&self) -> Arc<dyn VendorRepository>;

    fn extractions(&self) -> Arc<dyn ExtractionRepository>;

    fn return_jsons(&self) -> Arc<dyn ReturnJsonRepository>;

    fn login_logs(&self) -> Arc<dyn LoginLogRepository>;
}

/// Concrete implementation of UnitOfWork backed by SeaORM
#[derive(Clone)]
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        Arc::new(UserStore::new(self.db.clone()))
    }

    fn vendors(&self) -> Arc<dyn VendorRepository> {
        Arc::new(VendorStore::new(self.db.clone()))
    }

    fn extractions(&self) -> Arc<dyn ExtractionRepository> {
        Arc::new(ExtractionStore::new(self.db.clone()))
    }

    fn return_jsons(&self) -> Arc<dyn ReturnJsonRepository> {
        Arc::new(ReturnJsonStore::new(self.db.clone()))
    }

    fn login_logs(&self) -> Arc<dyn LoginLogRepository> {
        Arc::new(LoginLogStore::new(self.db.clone()))
    }
}
