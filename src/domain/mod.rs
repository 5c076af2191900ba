//! Backend-agnostic domain logic.

mod draft;
mod favorite;
mod food;
mod id;
mod money;
mod quantity;

pub mod error;
pub mod pricing;

pub use draft::{ExtraLine, ExtraSelection, OrderDraft};
pub use error::DomainError;
pub use favorite::{FavoriteState, FavoriteStatus, FavoriteWrite};
pub use food::{ExtraDefinition, MenuItem};
pub use id::{ExtraId, FoodId};
pub use money::Price;
pub use pricing::{compute_total, CurrencyFormatter, LocaleFormatter};
pub use quantity::{Quantity, QuantityPolicy};
