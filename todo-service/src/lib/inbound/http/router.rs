use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_todo::create_todo;
use super::handlers::create_user::create_user;
use super::handlers::health_check::health_check;
use super::handlers::list_todos::list_todos;
use super::handlers::login::login;
use super::handlers::mark_todo_done::mark_todo_done;
use super::middleware::authenticate as auth_middleware;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::ports::UserServicePort;

/// Shared handler state. Generic over the service ports so the router can run
/// against any storage implementation.
pub struct AppState<US, TS>
where
    US: UserServicePort,
    TS: TodoServicePort,
{
    pub user_service: Arc<US>,
    pub todo_service: Arc<TS>,
    pub authenticator: Arc<Authenticator>,
}

impl<US, TS> Clone for AppState<US, TS>
where
    US: UserServicePort,
    TS: TodoServicePort,
{
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            todo_service: Arc::clone(&self.todo_service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

pub fn create_router<US, TS>(
    user_service: Arc<US>,
    todo_service: Arc<TS>,
    authenticator: Arc<Authenticator>,
) -> Router
where
    US: UserServicePort,
    TS: TodoServicePort,
{
    let state = AppState {
        user_service,
        todo_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/healthCheck", get(health_check))
        .route("/api/createUser", post(create_user::<US, TS>))
        .route("/api/login", post(login::<US, TS>));

    let protected_routes = Router::new()
        .route(
            "/api/todos",
            post(create_todo::<US, TS>).get(list_todos::<US, TS>),
        )
        .route("/api/todos/:id/done", patch(mark_todo_done::<US, TS>))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.authenticator),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
