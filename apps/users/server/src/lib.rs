//! Users gRPC Service
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC, optional Zstd)
//! AuthorizationLayer (grpc-helpers)   ← public / authenticated / admin
//!   ↓
//! UsersServiceImpl (service.rs)       ← proto ↔ domain, error → Status
//!   ↓
//! UserService (domain_users)
//!   ↓
//! PgUserRepository → PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `server`: configuration, wiring and lifecycle
//! - `service`: gRPC trait implementation (UsersServiceImpl)

pub mod server;
pub mod service;

pub use server::{access_policy, run};
pub use service::UsersServiceImpl;
