use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoTitle;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_todo(row: PgRow) -> Result<Todo, TodoError> {
        let title: String = row.try_get("title").map_err(database_error)?;

        Ok(Todo {
            id: TodoId(row.try_get("id").map_err(database_error)?),
            user_id: UserId(row.try_get("user_id").map_err(database_error)?),
            title: TodoTitle::new(title)?,
            body: row.try_get("body").map_err(database_error)?,
            done: row.try_get("done").map_err(database_error)?,
            created_at: row.try_get("created_at").map_err(database_error)?,
        })
    }
}

fn database_error(e: sqlx::Error) -> TodoError {
    TodoError::DatabaseError(e.to_string())
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, user_id, title, body, done, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(todo.id.0)
        .bind(todo.user_id.0)
        .bind(todo.title.as_str())
        .bind(&todo.body)
        .bind(todo.done)
        .bind(todo.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %todo.user_id, "Failed to insert todo");
            database_error(e)
        })?;

        Ok(todo)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, body, done, created_at
            FROM todos
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Self::row_to_todo).collect()
    }

    async fn mark_done(&self, id: TodoId, owner: UserId) -> Result<Option<Todo>, TodoError> {
        let row = sqlx::query(
            r#"
            UPDATE todos
            SET done = TRUE
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, body, done, created_at
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Self::row_to_todo).transpose()
    }
}
