//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use super::handlers;
use crate::presentation::middleware::{auth_middleware, create_trace_layer};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes(state.clone()))
        .fallback(handlers::status::not_found)
        .layer(create_trace_layer())
        .with_state(state)
}

/// API v1 routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::status::status))
        .route("/logout", post(handlers::auth::logout))
        .nest("/users", user_routes())
        .nest("/messages", message_routes(state))
}

/// User routes (public)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::user::list_users))
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route(
            "/{user_id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
}

/// Message routes (protected)
fn message_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::message::create_message).get(handlers::message::list_messages),
        )
        .route(
            "/{message_id}",
            put(handlers::message::update_message).delete(handlers::message::delete_message),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
