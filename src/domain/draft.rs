//! In-progress order configuration for one menu item.

use tracing::{trace, warn};

use super::food::{ExtraDefinition, MenuItem};
use super::id::ExtraId;
use super::money::Price;
use super::pricing::compute_total;
use super::quantity::Quantity;

/// Session-local selection of one extra, joined to its catalog entry by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraSelection {
    extra_id: ExtraId,
    quantity: Quantity,
}

impl ExtraSelection {
    #[must_use]
    pub const fn extra_id(&self) -> ExtraId {
        self.extra_id
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.value()
    }
}

/// An extra's catalog entry paired with its selected quantity.
#[derive(Debug, Clone, Copy)]
pub struct ExtraLine<'a> {
    pub definition: &'a ExtraDefinition,
    pub quantity: u32,
}

impl ExtraLine<'_> {
    /// Quantity times unit value, or `None` if it does not fit in a
    /// [`Price`].
    #[must_use]
    pub fn subtotal(&self) -> Option<Price> {
        Price::from(self.quantity).checked_mul(self.definition.value())
    }
}

/// The full configuration being built: item, base quantity and extra
/// quantities.
///
/// The set of extras is fixed at construction; only quantities change. The
/// total is never stored, [`total`](Self::total) derives it on every read.
/// An increment that would push the total past what a [`Price`] can hold is
/// refused, so the total is always representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    item: MenuItem,
    base: Quantity,
    selections: Vec<ExtraSelection>,
}

impl OrderDraft {
    /// Seed a draft with one base unit and every extra at zero.
    #[must_use]
    pub fn new(item: MenuItem) -> Self {
        let selections = item
            .extras()
            .iter()
            .map(|extra| ExtraSelection {
                extra_id: extra.id(),
                quantity: Quantity::extra(),
            })
            .collect();

        Self {
            item,
            base: Quantity::base(),
            selections,
        }
    }

    #[must_use]
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    #[must_use]
    pub fn base_quantity(&self) -> u32 {
        self.base.value()
    }

    #[must_use]
    pub fn selections(&self) -> &[ExtraSelection] {
        &self.selections
    }

    /// Selected quantity of an extra, or `None` if the item has no such extra.
    #[must_use]
    pub fn extra_quantity(&self, id: ExtraId) -> Option<u32> {
        self.selections
            .iter()
            .find(|s| s.extra_id == id)
            .map(ExtraSelection::quantity)
    }

    /// Extras in catalog order with their selected quantities.
    pub fn lines(&self) -> impl Iterator<Item = ExtraLine<'_>> + '_ {
        self.selections.iter().filter_map(move |selection| {
            self.item.extra(selection.extra_id).map(|definition| ExtraLine {
                definition,
                quantity: selection.quantity(),
            })
        })
    }

    /// Current total, derived from the base and every extra line.
    #[must_use]
    pub fn total(&self) -> Price {
        // Increments never leave the draft with an unrepresentable total.
        self.checked_total().unwrap_or(Price::MAX)
    }

    fn checked_total(&self) -> Option<Price> {
        compute_total(
            self.base.value(),
            self.item.price(),
            self.lines().map(|line| (line.quantity, line.definition.value())),
        )
    }

    /// Returns `false` and leaves the quantity alone if the new total would
    /// overflow.
    pub fn increment_base(&mut self) -> bool {
        let previous = self.base;
        self.base.increment();
        if self.base == previous || self.checked_total().is_none() {
            self.base = previous;
            warn!(quantity = self.base.value(), "Base increment refused, total out of range");
            return false;
        }
        trace!(quantity = self.base.value(), "Base quantity incremented");
        true
    }

    /// Returns whether the quantity changed; it stays put at 1.
    pub fn decrement_base(&mut self) -> bool {
        let changed = self.base.decrement();
        trace!(quantity = self.base.value(), changed, "Base quantity decremented");
        changed
    }

    /// Returns `false` without touching anything if the extra is unknown or
    /// the new total would overflow.
    pub fn increment_extra(&mut self, id: ExtraId) -> bool {
        let Some(index) = self.selections.iter().position(|s| s.extra_id == id) else {
            return false;
        };

        let previous = self.selections[index].quantity;
        self.selections[index].quantity.increment();
        if self.selections[index].quantity == previous || self.checked_total().is_none() {
            self.selections[index].quantity = previous;
            warn!(extra_id = %id, quantity = previous.value(), "Extra increment refused, total out of range");
            return false;
        }
        trace!(extra_id = %id, quantity = self.selections[index].quantity(), "Extra incremented");
        true
    }

    /// Returns whether the quantity changed; unknown extras and extras at
    /// zero are left alone.
    pub fn decrement_extra(&mut self, id: ExtraId) -> bool {
        match self.selection_mut(id) {
            Some(selection) => {
                let changed = selection.quantity.decrement();
                trace!(extra_id = %id, quantity = selection.quantity(), changed, "Extra decremented");
                changed
            }
            None => false,
        }
    }

    fn selection_mut(&mut self, id: ExtraId) -> Option<&mut ExtraSelection> {
        self.selections.iter_mut().find(|s| s.extra_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FoodId, MenuItem};
    use rust_decimal_macros::dec;

    fn burger() -> MenuItem {
        MenuItem::try_new(
            FoodId::new(1),
            "Burger",
            "Double patty",
            dec!(10.00),
            1,
            "https://img/burger.png",
            vec![
                ExtraDefinition::new(ExtraId::new(1), "Cheese", dec!(2.00)),
                ExtraDefinition::new(ExtraId::new(2), "Bacon", dec!(3.50)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn new_draft_has_one_unit_and_no_extras_selected() {
        let draft = OrderDraft::new(burger());

        assert_eq!(draft.base_quantity(), 1);
        assert_eq!(draft.extra_quantity(ExtraId::new(1)), Some(0));
        assert_eq!(draft.extra_quantity(ExtraId::new(2)), Some(0));
        assert_eq!(draft.total(), dec!(10.00));
    }

    #[test]
    fn total_follows_every_mutation() {
        let mut draft = OrderDraft::new(burger());

        draft.increment_extra(ExtraId::new(1));
        assert_eq!(draft.total(), dec!(12.00));
        draft.increment_extra(ExtraId::new(1));
        assert_eq!(draft.total(), dec!(14.00));
        draft.increment_base();
        assert_eq!(draft.total(), dec!(24.00));
        draft.increment_extra(ExtraId::new(2));
        assert_eq!(draft.total(), dec!(27.50));
        draft.decrement_extra(ExtraId::new(1));
        assert_eq!(draft.total(), dec!(25.50));
    }

    #[test]
    fn decrements_hold_their_floors() {
        let mut draft = OrderDraft::new(burger());

        assert!(!draft.decrement_base());
        assert!(!draft.decrement_extra(ExtraId::new(2)));
        assert_eq!(draft.base_quantity(), 1);
        assert_eq!(draft.extra_quantity(ExtraId::new(2)), Some(0));
    }

    #[test]
    fn unknown_extra_leaves_draft_unchanged() {
        let mut draft = OrderDraft::new(burger());
        draft.increment_extra(ExtraId::new(2));
        let before = draft.clone();

        assert!(!draft.increment_extra(ExtraId::new(99)));
        assert!(!draft.decrement_extra(ExtraId::new(99)));
        assert_eq!(draft, before);
    }

    #[test]
    fn extra_mutations_commute() {
        let mut a = OrderDraft::new(burger());
        a.increment_extra(ExtraId::new(1));
        a.increment_extra(ExtraId::new(2));
        a.decrement_extra(ExtraId::new(1));

        let mut b = OrderDraft::new(burger());
        b.increment_extra(ExtraId::new(2));
        b.decrement_extra(ExtraId::new(1));
        b.increment_extra(ExtraId::new(1));
        b.decrement_extra(ExtraId::new(1));

        assert_eq!(a.selections(), b.selections());
        assert_eq!(a.total(), b.total());
    }

    #[test]
    fn increments_that_would_overflow_the_total_are_refused() {
        let item = MenuItem::try_new(
            FoodId::new(2),
            "Gold plate",
            "",
            dec!(50000000000000000000000000000),
            1,
            "",
            vec![ExtraDefinition::new(
                ExtraId::new(1),
                "Leaf",
                dec!(20000000000000000000000000000),
            )],
        )
        .unwrap();
        let mut draft = OrderDraft::new(item);

        assert!(!draft.increment_base());
        assert_eq!(draft.base_quantity(), 1);
        assert!(draft.increment_extra(ExtraId::new(1)));
        assert!(!draft.increment_extra(ExtraId::new(1)));
        assert_eq!(draft.extra_quantity(ExtraId::new(1)), Some(1));
        assert_eq!(draft.total(), dec!(70000000000000000000000000000));
    }

    #[test]
    fn lines_keep_catalog_order() {
        let draft = OrderDraft::new(burger());
        let names: Vec<&str> = draft.lines().map(|l| l.definition.name()).collect();
        assert_eq!(names, vec!["Cheese", "Bacon"]);
    }
}
