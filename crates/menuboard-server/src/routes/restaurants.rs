//! Restaurant profile read and update.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use menuboard_auth::ProfileUpdate;
use menuboard_core::error::MenuError;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::auth::TenantAuth;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::routes::nullable;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/restaurants", get(get_restaurant).patch(update_restaurant))
}

#[derive(Debug, Deserialize)]
pub struct SlugQuery {
    pub slug: Option<String>,
}

impl SlugQuery {
    pub fn require(self) -> Result<String, MenuError> {
        self.slug
            .filter(|s| !s.is_empty())
            .ok_or_else(|| MenuError::validation("Restaurant slug is required"))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateRestaurantRequest {
    /// Must match the caller's token when present.
    pub slug: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub address: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub website: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub logo: Option<Option<String>>,
    pub currency: Option<String>,
    pub categories: Option<Vec<String>>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

pub async fn get_restaurant(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SlugQuery>,
) -> ApiResult<Json<Value>> {
    let slug = query.require()?;
    let restaurant = state.directory.find_by_slug(&slug).await?;
    Ok(Json(json!({ "restaurant": restaurant })))
}

pub async fn update_restaurant(
    State(state): State<AppState>,
    TenantAuth(tenant): TenantAuth,
    ApiJson(req): ApiJson<UpdateRestaurantRequest>,
) -> ApiResult<Json<Value>> {
    tenant.ensure_slug(req.slug.as_deref())?;

    let restaurant = state
        .directory
        .update_profile(
            &tenant.slug,
            ProfileUpdate {
                name: req.name,
                email: req.email,
                phone: req.phone,
                address: req.address,
                description: req.description,
                website: req.website,
                logo: req.logo,
                currency: req.currency,
                categories: req.categories,
                current_password: req.current_password.filter(|p| !p.is_empty()),
                new_password: req.new_password.filter(|p| !p.is_empty()),
            },
        )
        .await?;

    Ok(Json(json!({
        "message": "Restaurant updated successfully",
        "restaurant": restaurant,
    })))
}
