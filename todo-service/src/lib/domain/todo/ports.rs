use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::user::models::UserId;

/// Port for todo domain service operations.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a todo owned by `owner`.
    ///
    /// # Arguments
    /// * `command` - Validated title, body and initial completion flag
    /// * `owner` - Authenticated caller; always becomes the todo's owner
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_todo(&self, command: CreateTodoCommand, owner: UserId)
        -> Result<Todo, TodoError>;

    /// List every todo owned by `owner`, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_todos(&self, owner: UserId) -> Result<Vec<Todo>, TodoError>;

    /// Mark one of the caller's todos as done.
    ///
    /// # Arguments
    /// * `id` - Todo to update
    /// * `owner` - Authenticated caller
    ///
    /// # Errors
    /// * `NotFound` - No todo with this ID owned by `owner`
    /// * `DatabaseError` - Database operation failed
    async fn mark_done(&self, id: TodoId, owner: UserId) -> Result<Todo, TodoError>;
}

/// Persistence operations for todos.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist a new todo.
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Retrieve all todos of one owner, ordered by creation time.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError>;

    /// Set `done = true` on a todo if it belongs to `owner`.
    ///
    /// # Returns
    /// Updated todo, or None when no todo with this ID belongs to `owner`
    async fn mark_done(&self, id: TodoId, owner: UserId) -> Result<Option<Todo>, TodoError>;
}
