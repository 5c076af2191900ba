//! Application services (use cases).
//!
//! These services orchestrate domain logic and the food backend port to
//! implement one menu item's configuration session.

pub mod favorite;
pub mod loader;
pub mod session;
pub mod submission;
pub mod view;

pub use favorite::{FavoriteSync, SyncHealth};
pub use loader::{LoadedFood, MenuItemLoader};
pub use session::FoodDetailsSession;
pub use submission::{OrderSubmission, SubmissionOutcome};
pub use view::{ExtraView, FoodDetailsView};
