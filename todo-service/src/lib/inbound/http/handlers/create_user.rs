use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;

pub async fn create_user<US, TS>(
    State(state): State<AppState<US, TS>>,
    ApiJson(body): ApiJson<CreateUserRequest>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError>
where
    US: UserServicePort,
    TS: TodoServicePort,
{
    state
        .user_service
        .create_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MessageResponseData {
                    success: true,
                    message: "user created".to_string(),
                },
            )
        })
}

/// HTTP request body for registering a user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateUserRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseCreateUserRequestError> {
        let email = EmailAddress::new(self.email)?;
        Ok(CreateUserCommand::new(
            self.first_name.trim().to_string(),
            self.last_name.trim().to_string(),
            email,
            self.password,
        ))
    }
}

impl From<ParseCreateUserRequestError> for ApiError {
    fn from(err: ParseCreateUserRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
