//! Public menu page data and the shareable menu link.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use menuboard_core::menu_view::MenuView;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::auth::TenantAuth;
use crate::error::ApiResult;
use crate::extract::{ApiPath, ApiQuery};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/menu/{slug}", get(public_menu))
        .route("/api/qr-code", get(menu_link))
}

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
}

pub async fn public_menu(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
    ApiQuery(query): ApiQuery<MenuQuery>,
) -> ApiResult<Json<MenuView>> {
    let view = state
        .catalog
        .public_menu(&slug, query.category.as_deref())
        .await?;
    Ok(Json(view))
}

/// The URL a QR code for the caller's menu encodes.
pub async fn menu_link(
    State(state): State<AppState>,
    TenantAuth(tenant): TenantAuth,
) -> ApiResult<Json<Value>> {
    let restaurant = state.directory.find_by_id(tenant.restaurant_id).await?;
    Ok(Json(json!({
        "slug": restaurant.slug,
        "menuUrl": state.menu_url(&restaurant.slug),
    })))
}
