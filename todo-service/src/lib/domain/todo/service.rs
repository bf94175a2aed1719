use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for todo operations.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(
        &self,
        command: CreateTodoCommand,
        owner: UserId,
    ) -> Result<Todo, TodoError> {
        let todo = Todo {
            id: TodoId::new(),
            user_id: owner,
            title: command.title,
            body: command.body,
            done: command.done,
            created_at: Utc::now(),
        };

        let created = self.repository.create(todo).await?;
        tracing::debug!(todo_id = %created.id, user_id = %owner, "Todo created");

        Ok(created)
    }

    async fn list_todos(&self, owner: UserId) -> Result<Vec<Todo>, TodoError> {
        self.repository.list_by_owner(owner).await
    }

    async fn mark_done(&self, id: TodoId, owner: UserId) -> Result<Todo, TodoError> {
        self.repository
            .mark_done(id, owner)
            .await?
            .ok_or(TodoError::NotFound(id))
    }
}
