use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::router::AppState;

pub async fn login<US, TS>(
    State(state): State<AppState<US, TS>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError>
where
    US: UserServicePort,
    TS: TodoServicePort,
{
    let outcome = state
        .user_service
        .authenticate(&body.email, &body.password)
        .await?;

    tracing::info!(user_id = %outcome.user.id, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            success: true,
            message: "Logged In".to_string(),
            token: outcome.token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub success: bool,
    pub message: String,
    pub token: String,
}
