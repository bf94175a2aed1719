use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoData;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::TodoTitle;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Create a todo for the caller and respond with the caller's full list.
pub async fn create_todo<US, TS>(
    State(state): State<AppState<US, TS>>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateTodoRequest>,
) -> Result<ApiSuccess<Vec<TodoData>>, ApiError>
where
    US: UserServicePort,
    TS: TodoServicePort,
{
    state
        .todo_service
        .create_todo(body.try_into_command()?, caller.user_id)
        .await?;

    let todos = state.todo_service.list_todos(caller.user_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        todos.iter().map(TodoData::from).collect(),
    ))
}

/// HTTP request body for a new todo. Any owner field sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoRequest {
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    done: bool,
}

impl CreateTodoRequest {
    fn try_into_command(self) -> Result<CreateTodoCommand, TodoError> {
        Ok(CreateTodoCommand {
            title: TodoTitle::new(self.title)?,
            body: self.body,
            done: self.done,
        })
    }
}
