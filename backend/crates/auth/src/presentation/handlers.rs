//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, response::IntoResponse};
use std::sync::Arc;

use crate::application::{
    GetProfileUseCase, ListUsersUseCase, LoginInput, LoginUseCase, RefreshUseCase, RegisterInput,
    RegisterUseCase,
};
use crate::domain::repository::UserStore;
use crate::error::AuthResult;
use crate::presentation::dto::{
    ApiResponse, AuthResponse, LoginRequest, ProfileResponse, RefreshRequest, RegisterRequest,
    TokenPairResponse, UserListResponse,
};
use crate::presentation::middleware::CurrentUser;
use crate::token::TokenEngine;

/// Shared state for auth handlers
pub struct AuthAppState<S>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub tokens: Arc<TokenEngine>,
}

// Manual impl so S itself is not required to be Clone by derive bounds.
impl<S> Clone for AuthAppState<S>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<S>(
    State(state): State<AuthAppState<S>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.store.clone(), state.tokens.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    let body = ApiResponse::new(
        "User registered successfully",
        AuthResponse {
            user: output.user.into(),
            access_token: output.access_token,
            refresh_token: output.refresh_token,
        },
    );

    Ok((StatusCode::CREATED, Json(body)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<S>(
    State(state): State<AuthAppState<S>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<ApiResponse<AuthResponse>>>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.store.clone(), state.tokens.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::new(
        "Login successful",
        AuthResponse {
            user: output.user.into(),
            access_token: output.access_token,
            refresh_token: output.refresh_token,
        },
    )))
}

// ============================================================================
// Token Refresh
// ============================================================================

/// POST /api/auth/refresh-token
pub async fn refresh_token<S>(
    State(state): State<AuthAppState<S>>,
    Json(req): Json<RefreshRequest>,
) -> AuthResult<Json<ApiResponse<TokenPairResponse>>>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = RefreshUseCase::new(state.store.clone(), state.tokens.clone());

    let output = use_case.execute(&req.refresh_token).await?;

    Ok(Json(ApiResponse::new(
        "Tokens refreshed successfully",
        TokenPairResponse {
            access_token: output.access_token,
            refresh_token: output.refresh_token,
        },
    )))
}

// ============================================================================
// Profile (requires authentication)
// ============================================================================

/// GET /api/auth/profile
pub async fn profile<S>(
    State(state): State<AuthAppState<S>>,
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<Json<ApiResponse<ProfileResponse>>>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.store.clone());

    let user = use_case.execute(current.0.user_id).await?;

    Ok(Json(ApiResponse::new(
        "Profile retrieved successfully",
        ProfileResponse { user: user.into() },
    )))
}

// ============================================================================
// Logout (requires authentication)
// ============================================================================

/// POST /api/auth/logout
///
/// Tokens are stateless; the server has nothing to revoke. The endpoint
/// exists so clients have a uniform place to discard their pair.
pub async fn logout() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message_only("Logout successful"))
}

// ============================================================================
// User Listing (admin only)
// ============================================================================

/// GET /api/auth/users
pub async fn list_users<S>(
    State(state): State<AuthAppState<S>>,
) -> AuthResult<Json<ApiResponse<UserListResponse>>>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.store.clone());

    let users = use_case.execute().await?;

    Ok(Json(ApiResponse::new(
        "Users retrieved successfully",
        UserListResponse {
            users: users.into_iter().map(Into::into).collect(),
        },
    )))
}
