use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::TodoData;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_todos<US, TS>(
    State(state): State<AppState<US, TS>>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TodoData>>, ApiError>
where
    US: UserServicePort,
    TS: TodoServicePort,
{
    let todos = state.todo_service.list_todos(caller.user_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        todos.iter().map(TodoData::from).collect(),
    ))
}
