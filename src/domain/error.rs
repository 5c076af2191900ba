//! Domain validation errors for core domain types.
//!
//! These errors are returned when a record handed to the domain breaks an
//! invariant the rest of the crate relies on.

use thiserror::Error;

use super::id::{ExtraId, FoodId};

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Extra ids must be unique within one menu item.
    #[error("menu item {food_id} lists extra {extra_id} more than once")]
    DuplicateExtra {
        /// The menu item carrying the duplicate.
        food_id: FoodId,
        /// The repeated extra id.
        extra_id: ExtraId,
    },
}
