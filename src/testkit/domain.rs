//! Builders for backend records used across tests.

use crate::domain::{ExtraId, FoodId, Price};
use crate::port::outbound::{ExtraRecord, FavoriteRecord, FoodRecord};

/// A food record with no extras, named `food-{id}`.
pub fn food_record(id: u64, price: Price) -> FoodRecord {
    FoodRecord {
        id: FoodId::new(id),
        name: format!("food-{id}"),
        description: format!("description of food-{id}"),
        price,
        category: 1,
        image_url: format!("https://img.test/{id}.png"),
        extras: Vec::new(),
    }
}

/// An extra record for `id`.
pub fn extra_record(id: u64, name: &str, value: Price) -> ExtraRecord {
    ExtraRecord {
        id: ExtraId::new(id),
        name: name.to_string(),
        value,
    }
}

/// A favorites-store entry for `id`.
pub fn favorite_record(id: u64) -> FavoriteRecord {
    FavoriteRecord {
        id: FoodId::new(id),
        name: format!("food-{id}"),
        description: String::new(),
        price: Price::ZERO,
        category: 1,
        image_url: String::new(),
    }
}
