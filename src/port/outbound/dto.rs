//! Records exchanged with the food backend.
//!
//! Prices deserialize from JSON numbers or strings and always serialize as
//! JSON numbers. Unknown fields are skipped on decode.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

use crate::domain::{
    DomainError, ExtraDefinition, ExtraId, FoodId, MenuItem, OrderDraft, Price,
};

/// A menu item as returned by `GET /foods/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Price,
    #[serde(default)]
    pub category: u64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub extras: Vec<ExtraRecord>,
}

impl FoodRecord {
    /// Convert into the catalog model. Any server-side extra quantity is
    /// dropped here; selections always start from zero.
    pub fn into_menu_item(self) -> Result<MenuItem, DomainError> {
        let extras = self
            .extras
            .into_iter()
            .map(|e| ExtraDefinition::new(e.id, e.name, e.value))
            .collect();

        MenuItem::try_new(
            self.id,
            self.name,
            self.description,
            self.price,
            self.category,
            self.image_url,
            extras,
        )
    }
}

/// An extra nested in a [`FoodRecord`].
///
/// Some backends also send a `quantity` here. It is not modeled: selections
/// always start from zero, whatever its type or value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraRecord {
    pub id: ExtraId,
    pub name: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub value: Price,
}

/// Base item metadata kept in the favorites store. Never carries extras.
///
/// Only `id` matters when reading the store back; a malformed value in any
/// other field decodes to its default instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: FoodId,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub price: Price,
    #[serde(default, deserialize_with = "lenient")]
    pub category: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: String,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl From<&MenuItem> for FavoriteRecord {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_string(),
            description: item.description().to_string(),
            price: item.price(),
            category: item.category(),
            image_url: item.image_url().to_string(),
        }
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub product_id: FoodId,
    pub name: String,
    pub description: String,
    /// Raw order total, not a display string.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Price,
    pub category: u64,
    pub thumbnail_url: String,
    pub extras: Vec<OrderExtra>,
}

impl OrderPayload {
    /// Snapshot a draft. Every extra is included in catalog order, zero
    /// quantities too.
    #[must_use]
    pub fn from_draft(draft: &OrderDraft) -> Self {
        let item = draft.item();
        let extras = draft
            .lines()
            .map(|line| OrderExtra {
                id: line.definition.id(),
                name: line.definition.name().to_string(),
                value: line.definition.value(),
                quantity: line.quantity,
            })
            .collect();

        Self {
            product_id: item.id(),
            name: item.name().to_string(),
            description: item.description().to_string(),
            price: draft.total(),
            category: item.category(),
            thumbnail_url: item.image_url().to_string(),
            extras,
        }
    }
}

/// One extra line in an [`OrderPayload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderExtra {
    pub id: ExtraId,
    pub name: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub value: Price,
    pub quantity: u32,
}
