/// Authentication API routes
use crate::{
    error::{AppError, Result},
    state::AppState,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /api/auth/login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = kazoo_storage::users::get_by_name(app_state.store.pool(), &req.username)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .ok_or_else(|| AppError::Auth("Invalid username or password".to_string()))?;

    let password_hash = app_state
        .store
        .get_password_hash(&user)
        .await?
        .ok_or_else(|| AppError::Auth("Invalid username or password".to_string()))?;

    if !app_state
        .auth_service
        .verify_password(&req.password, &password_hash)?
    {
        return Err(AppError::Auth("Invalid username or password".to_string()));
    }

    let access_token = app_state.auth_service.create_access_token(&user.name)?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
    }))
}
