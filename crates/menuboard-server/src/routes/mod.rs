//! HTTP route handlers, one module per resource.

pub mod admin;
pub mod auth;
pub mod health;
pub mod menu;
pub mod menu_items;
pub mod restaurants;

use serde::{Deserialize, Deserializer};

/// Tell an explicit `null` (`Some(None)`) apart from an absent field
/// (`None`, via `#[serde(default)]`).
pub(crate) fn nullable<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
