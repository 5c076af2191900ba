//! Favorite flag state machine.
//!
//! Two states, no pending state. [`FavoriteStatus::toggle`] commits the new
//! state immediately and hands back the backend write the caller should
//! issue; whether that write succeeds never changes the local state.

use std::fmt;

use super::id::FoodId;

/// Whether the menu item is in the user's favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    NotFavorite,
    Favorite,
}

impl FavoriteState {
    #[must_use]
    pub const fn from_flag(is_favorite: bool) -> Self {
        if is_favorite {
            Self::Favorite
        } else {
            Self::NotFavorite
        }
    }

    #[must_use]
    pub const fn is_favorite(self) -> bool {
        matches!(self, Self::Favorite)
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::NotFavorite => Self::Favorite,
            Self::Favorite => Self::NotFavorite,
        }
    }
}

impl fmt::Display for FavoriteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFavorite => write!(f, "not_favorite"),
            Self::Favorite => write!(f, "favorite"),
        }
    }
}

/// Backend write implied by a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteWrite {
    /// Add the item's metadata to the favorites store.
    Add(FoodId),
    /// Remove the item from the favorites store.
    Remove(FoodId),
}

impl FavoriteWrite {
    #[must_use]
    pub const fn food_id(&self) -> FoodId {
        match self {
            Self::Add(id) | Self::Remove(id) => *id,
        }
    }
}

/// Favorite state for exactly one menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteStatus {
    food_id: FoodId,
    state: FavoriteState,
}

impl FavoriteStatus {
    #[must_use]
    pub const fn new(food_id: FoodId, state: FavoriteState) -> Self {
        Self { food_id, state }
    }

    /// Derive the status from the ids present in the favorites store.
    #[must_use]
    pub fn from_favorites<I>(food_id: FoodId, favorite_ids: I) -> Self
    where
        I: IntoIterator<Item = FoodId>,
    {
        let present = favorite_ids.into_iter().any(|id| id == food_id);
        Self::new(food_id, FavoriteState::from_flag(present))
    }

    #[must_use]
    pub const fn food_id(&self) -> FoodId {
        self.food_id
    }

    #[must_use]
    pub const fn state(&self) -> FavoriteState {
        self.state
    }

    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        self.state.is_favorite()
    }

    /// Flip the state unconditionally and return the write to issue.
    pub fn toggle(&mut self) -> FavoriteWrite {
        let write = match self.state {
            FavoriteState::NotFavorite => FavoriteWrite::Add(self.food_id),
            FavoriteState::Favorite => FavoriteWrite::Remove(self.food_id),
        };
        self.state = self.state.flipped();
        write
    }

    /// Replace the local state with the backend's answer.
    ///
    /// Returns whether the local state changed.
    pub fn adopt(&mut self, state: FavoriteState) -> bool {
        let changed = self.state != state;
        self.state = state;
        changed
    }
}
