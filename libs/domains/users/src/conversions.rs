//! Conversions between wire messages and domain types

use rpc::user as proto;

use crate::models::{CreateUser, LoginUser, RegisterUser, UpdateUser, UserResponse};

impl From<UserResponse> for proto::User {
    fn from(user: UserResponse) -> Self {
        proto::User {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<UserResponse> for proto::UserResponse {
    fn from(user: UserResponse) -> Self {
        proto::UserResponse {
            user: Some(user.into()),
        }
    }
}

impl From<proto::RegisterRequest> for RegisterUser {
    fn from(req: proto::RegisterRequest) -> Self {
        RegisterUser {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
        }
    }
}

impl From<proto::CreateUserRequest> for CreateUser {
    fn from(req: proto::CreateUserRequest) -> Self {
        CreateUser {
            name: req.name,
            email: req.email,
            role: req.role,
        }
    }
}

/// The id travels separately.
impl From<proto::UpdateUserRequest> for UpdateUser {
    fn from(req: proto::UpdateUserRequest) -> Self {
        UpdateUser {
            name: req.name,
            email: req.email,
        }
    }
}

// Outbound: JSON bodies accepted by the HTTP gateway become RPC requests.

impl From<proto::User> for UserResponse {
    fn from(user: proto::User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<RegisterUser> for proto::RegisterRequest {
    fn from(input: RegisterUser) -> Self {
        proto::RegisterRequest {
            name: input.name,
            email: input.email,
            password: input.password,
            role: input.role,
        }
    }
}

impl From<LoginUser> for proto::LoginRequest {
    fn from(input: LoginUser) -> Self {
        proto::LoginRequest {
            email: input.email,
            password: input.password,
        }
    }
}

impl From<CreateUser> for proto::CreateUserRequest {
    fn from(input: CreateUser) -> Self {
        proto::CreateUserRequest {
            name: input.name,
            email: input.email,
            role: input.role,
        }
    }
}

/// Build an update request for `id`.
pub fn update_request(id: i32, input: UpdateUser) -> proto::UpdateUserRequest {
    proto::UpdateUserRequest {
        id,
        name: input.name,
        email: input.email,
    }
}
