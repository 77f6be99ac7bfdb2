//! Users Domain
//!
//! User records, credential checks and token issuance behind the
//! `user.UserService` RPCs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← password hashing, token issuance, role defaults
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← one statement per call (trait + in-memory + Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← records and inputs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_auth::{JwtConfig, TokenCodec};
//! use domain_users::{InMemoryUserRepository, RegisterUser, UserService};
//!
//! let tokens = TokenCodec::new(&JwtConfig::new("a-secret-of-at-least-thirty-two-characters"));
//! let service = UserService::new(InMemoryUserRepository::new(), tokens);
//!
//! let user = service
//!     .register(RegisterUser::new("John", "john@example.com", "hunter22", ""))
//!     .await?;
//! let token = service.login("john@example.com", "hunter22").await?;
//! ```

pub mod conversions;
pub mod error;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, DEFAULT_ROLE, LoginUser, NewUser, RegisterUser, UpdateUser, User, UserResponse};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
