use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use auth::PasswordHasher;
use serde_json::json;
use serde_json::Value;
use todo_service::domain::todo::errors::TodoError;
use todo_service::domain::todo::models::Todo;
use todo_service::domain::todo::models::TodoId;
use todo_service::domain::todo::ports::TodoRepository;
use todo_service::domain::todo::service::TodoService;
use todo_service::domain::user::errors::UserError;
use todo_service::domain::user::models::User;
use todo_service::domain::user::models::UserId;
use todo_service::domain::user::ports::UserRepository;
use todo_service::domain::user::service::UserService;
use todo_service::inbound::http::router::create_router;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Cheap work factor keeps the suite fast
        let password_hasher =
            PasswordHasher::with_cost(1024, 1, 1).expect("Failed to build password hasher");
        let authenticator = Arc::new(
            Authenticator::new(JWT_SECRET)
                .expect("Failed to create authenticator")
                .with_password_hasher(password_hasher),
        );

        let user_service = Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::default()),
            Arc::clone(&authenticator),
        ));
        let todo_service = Arc::new(TodoService::new(Arc::new(
            InMemoryTodoRepository::default(),
        )));

        let router = create_router(user_service, todo_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET).expect("Failed to create JWT handler"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PATCH request
    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.patch(path).bearer_auth(token)
    }

    /// Register a user and return the response
    pub async fn create_user(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/createUser")
            .json(&json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register, log in and return the access token
    pub async fn register_and_login(&self, email: &str) -> String {
        let response = self.create_user(email, "pass_word!").await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self.login(email, "pass_word!").await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Missing token in login response")
            .to_string()
    }

    /// Create a todo as the token's owner and return the resulting list
    pub async fn create_todo(&self, token: &str, title: &str) -> Vec<Value> {
        let response = self
            .post_authenticated("/api/todos", token)
            .json(&json!({ "title": title, "body": "body" }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        response.json().await.expect("Failed to parse response")
    }
}

/// Credential store backed by a vector, enforcing unique emails like the database does
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }
}

/// Todo store backed by a vector
#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: Mutex<Vec<Todo>>,
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError> {
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError> {
        let todos = self.todos.lock().unwrap();
        Ok(todos.iter().filter(|t| t.user_id == owner).cloned().collect())
    }

    async fn mark_done(&self, id: TodoId, owner: UserId) -> Result<Option<Todo>, TodoError> {
        let mut todos = self.todos.lock().unwrap();
        Ok(todos
            .iter_mut()
            .find(|t| t.id == id && t.user_id == owner)
            .map(|t| {
                t.done = true;
                t.clone()
            }))
    }
}
