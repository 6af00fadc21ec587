//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - SeaORM entities and repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    ExtractionRepository, LoginLogRepository, ReturnJsonRepository, UserRepository,
    VendorRepository,
};
pub use unit_of_work::{run_in_transaction, Persistence, UnitOfWork};

#[cfg(test)]
pub use repositories::{
    MockExtractionRepository, MockLoginLogRepository, MockReturnJsonRepository,
    MockUserRepository, MockVendorRepository,
};
