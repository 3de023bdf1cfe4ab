//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::UserStore;
use crate::infra::postgres::PgUserStore;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, authenticate, require_admin};
use crate::token::TokenEngine;

/// Create the Auth router with the PostgreSQL store
pub fn auth_router(store: PgUserStore, tokens: Arc<TokenEngine>) -> Router {
    auth_router_generic(store, tokens)
}

/// Create a generic Auth router for any store implementation
pub fn auth_router_generic<S>(store: S, tokens: Arc<TokenEngine>) -> Router
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        store: Arc::new(store),
        tokens: tokens.clone(),
    };
    let mw_state = AuthMiddlewareState { tokens };

    // Layers run bottom-up: authenticate populates CurrentUser before
    // require_admin inspects it.
    let admin_routes = Router::new()
        .route("/users", get(handlers::list_users::<S>))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(mw_state.clone(), authenticate));

    let protected_routes = Router::new()
        .route("/profile", get(handlers::profile::<S>))
        .route("/logout", post(handlers::logout))
        .layer(middleware::from_fn_with_state(mw_state, authenticate));

    Router::new()
        .route("/register", post(handlers::register::<S>))
        .route("/login", post(handlers::login::<S>))
        .route("/refresh-token", post(handlers::refresh_token::<S>))
        .merge(protected_routes)
        .merge(admin_routes)
        .with_state(state)
}
