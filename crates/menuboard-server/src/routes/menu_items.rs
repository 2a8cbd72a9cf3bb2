//! Menu item listing and owner-only mutations.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use menuboard_auth::NewMenuItem;
use menuboard_core::error::MenuError;
use menuboard_core::models::menu_item::{PriceInput, UpdateMenuItem};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::auth::TenantAuth;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::routes::nullable;
use crate::routes::restaurants::SlugQuery;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/menu-items", get(list_menu_items).post(create_menu_item))
        .route(
            "/api/menu-items/{id}",
            put(update_menu_item).delete(delete_menu_item),
        )
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateMenuItemRequest {
    /// Must match the caller's token when present.
    pub restaurant_slug: Option<String>,
    pub name: String,
    pub description: String,
    pub price: Option<PriceInput>,
    pub category: String,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateMenuItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<PriceInput>,
    pub category: Option<String>,
    /// `null` removes the image.
    #[serde(deserialize_with = "nullable")]
    pub image: Option<Option<String>>,
}

pub async fn list_menu_items(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SlugQuery>,
) -> ApiResult<Json<Value>> {
    let slug = query.require()?;
    let items = state.catalog.list_by_restaurant(&slug).await?;
    Ok(Json(json!({ "menuItems": items })))
}

pub async fn create_menu_item(
    State(state): State<AppState>,
    TenantAuth(tenant): TenantAuth,
    ApiJson(req): ApiJson<CreateMenuItemRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    tenant.ensure_slug(req.restaurant_slug.as_deref())?;

    let price = req
        .price
        .ok_or_else(|| MenuError::validation("price is required"))?
        .parse()?;

    let item = state
        .catalog
        .create(
            &tenant,
            NewMenuItem {
                name: req.name,
                description: req.description,
                price,
                category: req.category,
                image: req.image,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Menu item created successfully",
            "menuItem": item,
        })),
    ))
}

pub async fn update_menu_item(
    State(state): State<AppState>,
    TenantAuth(tenant): TenantAuth,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateMenuItemRequest>,
) -> ApiResult<Json<Value>> {
    let price = req.price.as_ref().map(PriceInput::parse).transpose()?;

    let item = state
        .catalog
        .update(
            &tenant,
            id,
            UpdateMenuItem {
                name: req.name,
                description: req.description,
                price,
                category: req.category,
                image: req.image,
            },
        )
        .await?;

    Ok(Json(json!({
        "message": "Menu item updated successfully",
        "menuItem": item,
    })))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    TenantAuth(tenant): TenantAuth,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Value>> {
    state.catalog.delete(&tenant, id).await?;
    Ok(Json(json!({ "message": "Menu item deleted successfully" })))
}
