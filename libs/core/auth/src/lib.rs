//! Bearer credential codec shared by the users server and its tests.
//!
//! A token is an HS256-signed JWT carrying the subject email, the role and an
//! absolute expiry. Verification never touches storage.

pub mod codec;
pub mod config;
pub mod error;

pub use codec::{Claims, TokenCodec};
pub use config::{DEFAULT_TOKEN_TTL_SECS, JwtConfig};
pub use error::{AuthError, AuthResult};
