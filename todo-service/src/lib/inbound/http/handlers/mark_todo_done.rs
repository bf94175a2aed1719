use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::TodoData;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Mark one of the caller's todos as done.
///
/// Unknown IDs and todos owned by another user are both reported as 400.
pub async fn mark_todo_done<US, TS>(
    State(state): State<AppState<US, TS>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(todo_id): Path<String>,
) -> Result<ApiSuccess<TodoData>, ApiError>
where
    US: UserServicePort,
    TS: TodoServicePort,
{
    let todo_id = TodoId::from_string(&todo_id).map_err(TodoError::from)?;

    let todo = state
        .todo_service
        .mark_done(todo_id, caller.user_id)
        .await
        .map_err(|e| {
            if let TodoError::NotFound(_) = e {
                tracing::warn!(todo_id = %todo_id, user_id = %caller.user_id, "Todo not found for caller");
            }
            ApiError::from(e)
        })?;

    Ok(ApiSuccess::new(StatusCode::OK, TodoData::from(&todo)))
}
