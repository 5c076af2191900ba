//! Food backend port.
//!
//! The one integration point with the outside world: item lookup, the
//! favorites collection, and order placement.

use async_trait::async_trait;

use super::dto::{FavoriteRecord, FoodRecord, OrderPayload};
use crate::domain::FoodId;
use crate::error::BackendError;

/// REST-like backend serving foods, favorites and orders.
#[async_trait]
pub trait FoodBackend: Send + Sync {
    /// `GET /foods/{id}`. `Ok(None)` when the backend has no such item.
    async fn fetch_food(&self, id: FoodId) -> Result<Option<FoodRecord>, BackendError>;

    /// `GET /favorites`.
    async fn fetch_favorites(&self) -> Result<Vec<FavoriteRecord>, BackendError>;

    /// `POST /favorites`.
    async fn add_favorite(&self, favorite: &FavoriteRecord) -> Result<(), BackendError>;

    /// `DELETE /favorites/{id}`.
    async fn remove_favorite(&self, id: FoodId) -> Result<(), BackendError>;

    /// `POST /orders`.
    async fn create_order(&self, order: &OrderPayload) -> Result<(), BackendError>;

    /// Backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;
}
