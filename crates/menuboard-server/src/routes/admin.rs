//! Administrator login and tenant oversight.

use axum::extract::State;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::auth::AdminAuth;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/login", post(login))
        .route("/api/admin/restaurants", get(list_restaurants))
        .route("/api/admin/restaurants/{id}", patch(toggle_restaurant))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AdminLoginRequest>,
) -> ApiResult<Json<Value>> {
    let login = state.policy.login_admin(&req.username, &req.password).await?;

    Ok(Json(json!({
        "message": "Admin login successful",
        "admin": {
            "id": login.admin.id,
            "username": login.admin.username,
        },
        "token": login.access_token,
        "expiresIn": login.expires_in,
    })))
}

pub async fn list_restaurants(
    State(state): State<AppState>,
    AdminAuth(_admin): AdminAuth,
) -> ApiResult<Json<Value>> {
    let restaurants = state.directory.list_all().await?;
    Ok(Json(json!({ "restaurants": restaurants })))
}

pub async fn toggle_restaurant(
    State(state): State<AppState>,
    AdminAuth(admin): AdminAuth,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Value>> {
    let restaurant = state.directory.toggle_active(id).await?;
    tracing::info!(
        admin = %admin.username,
        restaurant_id = %id,
        active = restaurant.is_active,
        "Restaurant status changed by admin"
    );

    let verb = if restaurant.is_active {
        "activated"
    } else {
        "deactivated"
    };
    Ok(Json(json!({
        "message": format!("Restaurant {verb} successfully"),
        "restaurant": restaurant,
    })))
}
