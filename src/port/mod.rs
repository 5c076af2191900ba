//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points adapters implement to reach external
//! systems.
//!
//! ```text
//!     ┌─────────────────────────┐
//!     │      Application        │
//!     │   Domain + Port         │
//!     └────────────┬────────────┘
//!                  │
//!                  ▼
//!          ┌───────────────┐
//!          │ Food backend  │
//!          │   adapter     │
//!          └───────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::FoodBackend`] - Foods, favorites and orders

pub mod outbound;

pub use outbound::{
    ExtraRecord, FavoriteRecord, FoodBackend, FoodRecord, OrderExtra, OrderPayload,
};
