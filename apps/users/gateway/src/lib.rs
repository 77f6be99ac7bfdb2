//! HTTP/JSON gateway for `user.UserService`.
//!
//! Every route translates its JSON body into one gRPC call, forwarding the
//! caller's `Authorization` header as metadata. Access control happens on the
//! gRPC server; the gateway never inspects tokens.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;
