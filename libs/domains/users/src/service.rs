use core_auth::TokenCodec;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, RegisterUser, UpdateUser, UserResponse, role_or_default};
use crate::password::{hash_password, verify_password};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    tokens: TokenCodec,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, tokens: TokenCodec) -> Self {
        Self {
            repository: Arc::new(repository),
            tokens,
        }
    }

    /// Self-service sign-up. The password is stored only as an Argon2 hash.
    pub async fn register(&self, input: RegisterUser) -> UserResult<UserResponse> {
        let password_hash = hash_password(&input.password)?;

        let user = self
            .repository
            .create(NewUser {
                name: input.name,
                email: input.email,
                password_hash: Some(password_hash),
                role: role_or_default(&input.role),
            })
            .await?;

        info!(user_id = user.id, role = %user.role, "User registered");
        Ok(user.into())
    }

    /// Exchange email and password for a signed token carrying the stored role.
    ///
    /// An unknown email, a wrong password and an account without a password
    /// all fail with the same [`UserError::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> UserResult<String> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            debug!("Login for unknown email");
            return Err(UserError::InvalidCredentials);
        };

        let matches = user
            .password_hash
            .as_deref()
            .is_some_and(|hash| verify_password(password, hash));
        if !matches {
            debug!(user_id = user.id, "Login with bad credentials");
            return Err(UserError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.email, &user.role)?;
        info!(user_id = user.id, "User logged in");
        Ok(token)
    }

    /// Administrative creation of a record with no password.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        let user = self
            .repository
            .create(NewUser {
                name: input.name,
                email: input.email,
                password_hash: None,
                role: role_or_default(&input.role),
            })
            .await?;

        info!(user_id = user.id, "User created");
        Ok(user.into())
    }

    pub async fn get_user(&self, id: i32) -> UserResult<UserResponse> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user.into())
    }

    /// Replace name and email. The result echoes the input rather than re-reading
    /// the row, so `role` is empty and a missing id still succeeds.
    pub async fn update_user(&self, id: i32, input: UpdateUser) -> UserResult<UserResponse> {
        let affected = self.repository.update(id, &input).await?;
        if affected == 0 {
            warn!(user_id = id, "Update matched no user");
        }

        Ok(UserResponse {
            id,
            name: input.name,
            email: input.email,
            role: String::new(),
        })
    }

    /// Remove a record. Deleting a missing id is not an error.
    pub async fn delete_user(&self, id: i32) -> UserResult<()> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            debug!(user_id = id, "Delete matched no user");
        } else {
            info!(user_id = id, "User deleted");
        }

        Ok(())
    }
}
