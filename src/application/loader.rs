//! Menu item loading.
//!
//! Turns a menu item id into a fresh [`OrderDraft`] plus the item's initial
//! [`FavoriteStatus`]. Two backend reads, no writes.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::{FavoriteStatus, FoodId, OrderDraft};
use crate::error::{Error, Result};
use crate::port::outbound::FoodBackend;

/// Everything a configuration session starts from.
#[derive(Debug, Clone)]
pub struct LoadedFood {
    pub draft: OrderDraft,
    pub favorite: FavoriteStatus,
}

/// Fetches a menu item and seeds a draft for it.
#[derive(Clone)]
pub struct MenuItemLoader {
    backend: Arc<dyn FoodBackend>,
}

impl MenuItemLoader {
    #[must_use]
    pub fn new(backend: Arc<dyn FoodBackend>) -> Self {
        Self { backend }
    }

    /// Load `food_id`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the backend has no such item.
    /// - [`Error::BackendUnavailable`] if either read fails.
    /// - [`Error::Domain`] if the item's extras repeat an id.
    ///
    /// No partial result is produced on any error.
    #[instrument(skip(self), fields(backend = self.backend.backend_name()))]
    pub async fn load(&self, food_id: FoodId) -> Result<LoadedFood> {
        let record = self
            .backend
            .fetch_food(food_id)
            .await?
            .ok_or(Error::NotFound { food_id })?;

        let item = record.into_menu_item()?;
        debug!(extras = item.extras().len(), price = %item.price(), "Food fetched");
        let draft = OrderDraft::new(item);

        let favorites = self.backend.fetch_favorites().await?;
        let favorite = FavoriteStatus::from_favorites(food_id, favorites.iter().map(|f| f.id));

        info!(
            total = %draft.total(),
            favorite = %favorite.state(),
            "Food loaded"
        );

        Ok(LoadedFood { draft, favorite })
    }
}
