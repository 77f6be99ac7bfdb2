//! Users gRPC service implementation
//!
//! Handlers stay thin: proto ↔ domain conversions live in
//! `domain_users::conversions`, and each handler picks the status code its
//! operation reports on failure.

use std::sync::Arc;

use domain_users::{UserError, UserRepository, UserService};
use rpc::user::{
    CreateUserRequest, DeleteUserRequest, DeleteUserResponse, GetUserRequest, LoginRequest,
    LoginResponse, RegisterRequest, UpdateUserRequest, UserResponse,
    user_service_server::UserService as UserServiceRpc,
};
use tonic::{Request, Response, Status};
use tracing::error;

/// gRPC service implementation for users
///
/// Generic over the repository type for testability.
pub struct UsersServiceImpl<R>
where
    R: UserRepository + 'static,
{
    service: Arc<UserService<R>>,
}

impl<R> UsersServiceImpl<R>
where
    R: UserRepository + 'static,
{
    pub fn new(service: UserService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

fn internal(err: UserError) -> Status {
    error!(error = %err, "User operation failed");
    Status::internal(err.to_string())
}

fn login_status(err: UserError) -> Status {
    match err {
        UserError::InvalidCredentials => Status::unauthenticated("invalid email or password"),
        other => internal(other),
    }
}

fn get_status(err: UserError) -> Status {
    match err {
        UserError::NotFound(_) => Status::not_found(err.to_string()),
        other => internal(other),
    }
}

/// Update and delete failures are passed through without classification.
fn unclassified(err: UserError) -> Status {
    Status::unknown(err.to_string())
}

#[tonic::async_trait]
impl<R> UserServiceRpc for UsersServiceImpl<R>
where
    R: UserRepository + 'static,
{
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let user = self
            .service
            .register(request.into_inner().into())
            .await
            .map_err(internal)?;
        Ok(Response::new(user.into()))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let req = request.into_inner();
        let token = self
            .service
            .login(&req.email, &req.password)
            .await
            .map_err(login_status)?;
        Ok(Response::new(LoginResponse { token }))
    }

    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let user = self
            .service
            .create_user(request.into_inner().into())
            .await
            .map_err(internal)?;
        Ok(Response::new(user.into()))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let user = self
            .service
            .get_user(request.into_inner().id)
            .await
            .map_err(get_status)?;
        Ok(Response::new(user.into()))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();
        let id = req.id;
        let user = self
            .service
            .update_user(id, req.into())
            .await
            .map_err(unclassified)?;
        Ok(Response::new(user.into()))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        self.service
            .delete_user(request.into_inner().id)
            .await
            .map_err(unclassified)?;
        Ok(Response::new(DeleteUserResponse {
            message: "User deleted".to_string(),
        }))
    }
}
