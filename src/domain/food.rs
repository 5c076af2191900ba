//! Menu item catalog types.
//!
//! A [`MenuItem`] and its [`ExtraDefinition`]s are the immutable catalog side
//! of a configuration session. Per-session quantities live in
//! [`OrderDraft`](super::draft::OrderDraft), joined to these by id.

use std::collections::HashSet;

use super::error::DomainError;
use super::id::{ExtraId, FoodId};
use super::money::Price;

/// An optional add-on offered with a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraDefinition {
    id: ExtraId,
    name: String,
    value: Price,
}

impl ExtraDefinition {
    /// Create a new extra definition.
    #[must_use]
    pub fn new(id: ExtraId, name: impl Into<String>, value: Price) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }

    #[must_use]
    pub fn id(&self) -> ExtraId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit value charged per selected unit.
    #[must_use]
    pub fn value(&self) -> Price {
        self.value
    }
}

/// A menu item as loaded for one configuration session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    id: FoodId,
    name: String,
    description: String,
    price: Price,
    category: u64,
    image_url: String,
    extras: Vec<ExtraDefinition>,
}

impl MenuItem {
    /// Create a menu item, rejecting extras collections with repeated ids.
    ///
    /// Extras keep the order they were given in.
    pub fn try_new(
        id: FoodId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        category: u64,
        image_url: impl Into<String>,
        extras: Vec<ExtraDefinition>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(extras.len());
        for extra in &extras {
            if !seen.insert(extra.id) {
                return Err(DomainError::DuplicateExtra {
                    food_id: id,
                    extra_id: extra.id,
                });
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category,
            image_url: image_url.into(),
            extras,
        })
    }

    #[must_use]
    pub fn id(&self) -> FoodId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unit price of the base item.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub fn category(&self) -> u64 {
        self.category
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Extras in catalog order.
    #[must_use]
    pub fn extras(&self) -> &[ExtraDefinition] {
        &self.extras
    }

    /// Look up an extra by id.
    #[must_use]
    pub fn extra(&self, id: ExtraId) -> Option<&ExtraDefinition> {
        self.extras.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn extra(id: u64, name: &str) -> ExtraDefinition {
        ExtraDefinition::new(ExtraId::new(id), name, dec!(1.50))
    }

    #[test]
    fn try_new_keeps_extras_in_given_order() {
        let item = MenuItem::try_new(
            FoodId::new(1),
            "Ao molho",
            "Macarrão ao molho branco",
            dec!(19.90),
            1,
            "https://img/ao-molho.png",
            vec![extra(3, "Bacon"), extra(1, "Cheese"), extra(2, "Egg")],
        )
        .unwrap();

        let ids: Vec<u64> = item.extras().iter().map(|e| e.id().value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(item.extra(ExtraId::new(1)).map(ExtraDefinition::name), Some("Cheese"));
        assert!(item.extra(ExtraId::new(9)).is_none());
    }

    #[test]
    fn try_new_rejects_duplicate_extra_ids() {
        let result = MenuItem::try_new(
            FoodId::new(4),
            "Veggie",
            "",
            dec!(10),
            2,
            "",
            vec![extra(1, "Cheese"), extra(1, "More cheese")],
        );

        assert_eq!(
            result,
            Err(DomainError::DuplicateExtra {
                food_id: FoodId::new(4),
                extra_id: ExtraId::new(1),
            })
        );
    }
}
