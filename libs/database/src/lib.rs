//! PostgreSQL connectivity for the users service.
//!
//! - env-driven pool configuration (`PostgresConfig`)
//! - connect with exponential-backoff retry for startup
//! - migration runner generic over any SeaORM `MigratorTrait`
//! - `SELECT 1` health check
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "users").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
