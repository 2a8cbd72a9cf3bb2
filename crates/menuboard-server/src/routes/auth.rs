//! Restaurant registration and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use menuboard_auth::RegisterRestaurant;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let restaurant = state
        .directory
        .register(RegisterRestaurant {
            name: req.name,
            email: req.email,
            password: req.password,
            slug: req.slug.filter(|s| !s.trim().is_empty()),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Restaurant registered successfully",
            "restaurant": restaurant,
        })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<Value>> {
    let login = state.policy.login_tenant(&req.email, &req.password).await?;

    Ok(Json(json!({
        "message": "Login successful",
        "restaurant": login.restaurant,
        "token": login.access_token,
        "expiresIn": login.expires_in,
    })))
}
