//! Display snapshot of a configuration session.

use crate::domain::{CurrencyFormatter, ExtraId, FavoriteStatus, FoodId, OrderDraft, Price};

/// One extra as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraView {
    pub id: ExtraId,
    pub name: String,
    pub formatted_value: String,
    pub quantity: u32,
}

/// Everything the screen renders, captured at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodDetailsView {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub formatted_price: String,
    pub quantity: u32,
    pub extras: Vec<ExtraView>,
    pub total: Price,
    pub formatted_total: String,
    pub is_favorite: bool,
    pub favorite_needs_sync: bool,
}

impl FoodDetailsView {
    pub(crate) fn build(
        draft: &OrderDraft,
        favorite: &FavoriteStatus,
        favorite_needs_sync: bool,
        formatter: &dyn CurrencyFormatter,
    ) -> Self {
        let item = draft.item();
        let total = draft.total();
        let extras = draft
            .lines()
            .map(|line| ExtraView {
                id: line.definition.id(),
                name: line.definition.name().to_string(),
                formatted_value: formatter.format(line.definition.value()),
                quantity: line.quantity,
            })
            .collect();

        Self {
            id: item.id(),
            name: item.name().to_string(),
            description: item.description().to_string(),
            image_url: item.image_url().to_string(),
            formatted_price: formatter.format(item.price()),
            quantity: draft.base_quantity(),
            extras,
            total,
            formatted_total: formatter.format(total),
            is_favorite: favorite.is_favorite(),
            favorite_needs_sync,
        }
    }
}
