use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("failed to sign token: {0}")]
    Encode(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    Expired,
}

pub type AuthResult<T> = Result<T, AuthError>;
