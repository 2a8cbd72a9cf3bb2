//! Menu item domain model and price parsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{MenuError, MenuResult};

/// A single dish or drink on a restaurant's menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Uuid,
    /// Owning restaurant; fixed at creation.
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Free-form; usually one of the owner's configured categories.
    pub category: String,
    /// Image URL.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateMenuItem {
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
}

/// Fields that can be overwritten on an existing item.
///
/// There is no `restaurant_id` here: ownership never moves.
#[derive(Debug, Clone, Default)]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    /// `Some(None)` removes the image.
    pub image: Option<Option<String>>,
}

/// A price as submitted by a client: either a JSON number or a numeric
/// string such as `"12.50"`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Resolve to a finite, non-negative amount.
    pub fn parse(&self) -> MenuResult<f64> {
        let value = match self {
            PriceInput::Number(n) => *n,
            PriceInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| MenuError::validation(format!("invalid price: {s:?}")))?,
        };
        validate_price(value)
    }
}

pub fn validate_price(value: f64) -> MenuResult<f64> {
    if !value.is_finite() {
        return Err(MenuError::validation("price must be a finite number"));
    }
    if value < 0.0 {
        return Err(MenuError::validation("price must not be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_string_parses() {
        let price: PriceInput = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(price.parse().unwrap(), 12.5);
    }

    #[test]
    fn json_number_parses() {
        let price: PriceInput = serde_json::from_str("9").unwrap();
        assert_eq!(price.parse().unwrap(), 9.0);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(PriceInput::Number(-1.0).parse().is_err());
        assert!(PriceInput::Text("twelve".into()).parse().is_err());
        assert!(PriceInput::Text("NaN".into()).parse().is_err());
        assert!(PriceInput::Text("inf".into()).parse().is_err());
    }

    #[test]
    fn zero_is_a_valid_price() {
        assert_eq!(PriceInput::Text(" 0 ".into()).parse().unwrap(), 0.0);
    }
}
