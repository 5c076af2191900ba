//! Screen-facing configuration session.
//!
//! One [`FoodDetailsSession`] per screen activation. It owns the draft, the
//! favorite state and the favorite writer; nothing is shared between
//! sessions. Every command mutates local state synchronously, so the next
//! [`view`](FoodDetailsSession::view) or [`submit`](FoodDetailsSession::submit)
//! already sees it.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::favorite::FavoriteSync;
use super::loader::{LoadedFood, MenuItemLoader};
use super::submission::{OrderSubmission, SubmissionOutcome};
use super::view::FoodDetailsView;
use crate::domain::{
    CurrencyFormatter, ExtraId, FavoriteState, FavoriteStatus, FoodId, OrderDraft,
};
use crate::error::{Result, SubmissionError};
use crate::port::outbound::FoodBackend;

pub struct FoodDetailsSession {
    draft: OrderDraft,
    favorite: FavoriteStatus,
    favorites: FavoriteSync,
    submission: OrderSubmission,
    backend: Arc<dyn FoodBackend>,
    formatter: Arc<dyn CurrencyFormatter>,
}

impl FoodDetailsSession {
    /// Load `food_id` and start a session for it.
    ///
    /// Load errors are terminal: no session is created.
    pub async fn open(
        backend: Arc<dyn FoodBackend>,
        formatter: Arc<dyn CurrencyFormatter>,
        food_id: FoodId,
    ) -> Result<Self> {
        let LoadedFood { draft, favorite } =
            MenuItemLoader::new(Arc::clone(&backend)).load(food_id).await?;

        Ok(Self {
            draft,
            favorite,
            favorites: FavoriteSync::spawn(Arc::clone(&backend)),
            submission: OrderSubmission::new(Arc::clone(&backend)),
            backend,
            formatter,
        })
    }

    #[must_use]
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    #[must_use]
    pub fn favorite(&self) -> &FavoriteStatus {
        &self.favorite
    }

    #[must_use]
    pub fn view(&self) -> FoodDetailsView {
        FoodDetailsView::build(
            &self.draft,
            &self.favorite,
            self.favorites.health().needs_reconcile(),
            self.formatter.as_ref(),
        )
    }

    pub fn increment_base(&mut self) {
        self.draft.increment_base();
    }

    pub fn decrement_base(&mut self) {
        self.draft.decrement_base();
    }

    pub fn increment_extra(&mut self, id: ExtraId) {
        if !self.draft.increment_extra(id) {
            debug!(extra_id = %id, "Extra increment ignored");
        }
    }

    pub fn decrement_extra(&mut self, id: ExtraId) {
        self.draft.decrement_extra(id);
    }

    /// Flip the favorite flag now and queue the backend write.
    pub fn toggle_favorite(&mut self) -> FavoriteState {
        let write = self.favorite.toggle();
        self.favorites.dispatch(write, self.draft.item());
        info!(food_id = %self.favorite.food_id(), state = %self.favorite.state(), "Favorite toggled");
        self.favorite.state()
    }

    /// Place the order. On failure the session stays usable and `submit`
    /// may be called again.
    pub async fn submit(&self) -> std::result::Result<SubmissionOutcome, SubmissionError> {
        self.submission.submit(&self.draft).await
    }

    /// Wait for queued favorite writes to be attempted.
    pub async fn flush_favorite_writes(&self) {
        self.favorites.flush().await;
    }

    /// Re-read the favorites store and adopt its answer for this item.
    ///
    /// Returns whether local state changed. The drift flag is cleared only
    /// if the read succeeds.
    #[instrument(skip(self), fields(food_id = %self.favorite.food_id()))]
    pub async fn reconcile_favorite(&mut self) -> Result<bool> {
        self.favorites.flush().await;

        let favorites = self.backend.fetch_favorites().await?;
        let food_id = self.favorite.food_id();
        let remote = FavoriteStatus::from_favorites(food_id, favorites.iter().map(|f| f.id));
        let changed = self.favorite.adopt(remote.state());
        self.favorites.mark_reconciled();

        info!(state = %self.favorite.state(), changed, "Favorite reconciled");
        Ok(changed)
    }

    /// Drain pending favorite writes and end the session.
    pub async fn close(self) {
        self.favorites.close().await;
    }
}
