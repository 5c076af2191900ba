//! Outbound ports: services this crate calls out to.

mod backend;
mod dto;

pub use backend::FoodBackend;
pub use dto::{ExtraRecord, FavoriteRecord, FoodRecord, OrderExtra, OrderPayload};
