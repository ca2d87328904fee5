//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_NICKNAME_LENGTH, MIN_NICKNAME_LENGTH},
    models::{NewUser, UserChanges},
};

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = MIN_NICKNAME_LENGTH, max = MAX_NICKNAME_LENGTH))]
    pub nickname: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Update user request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = MIN_NICKNAME_LENGTH, max = MAX_NICKNAME_LENGTH))]
    pub nickname: String,

    #[validate(email)]
    pub email: String,

    /// New password, left unchanged when absent
    #[validate(length(min = 1))]
    pub password: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            nickname: request.nickname,
            email: request.email,
            password: request.password,
        }
    }
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            nickname: request.nickname,
            email: request.email,
            password: request.password,
        }
    }
}
