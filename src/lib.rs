//! Foodorder - order configuration for a single menu item.
//!
//! Tracks the base item's quantity and each extra's quantity, derives the
//! order total, keeps the item's favorite flag in step with a remote
//! favorites store, and submits the finished configuration as an order.
//!
//! # Architecture
//!
//! - **`domain`** - Pure types and rules: ids, money, catalog, quantity
//!   floors, pricing, favorite state machine, order draft
//! - **`port`** - The `FoodBackend` trait and the records it exchanges
//! - **`adapter`** - `HttpBackend`, a `reqwest` implementation of the port
//! - **`application`** - Loader, favorite writer, submission and the
//!   screen-facing `FoodDetailsSession`
//!
//! # Modules
//!
//! - [`config`] - TOML configuration with environment overrides and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use foodorder::adapter::outbound::http::HttpBackend;
//! use foodorder::application::FoodDetailsSession;
//! use foodorder::config::Config;
//! use foodorder::domain::{ExtraId, FoodId};
//!
//! # async fn run() -> foodorder::error::Result<()> {
//! let config = Config::load("foodorder.toml")?;
//! config.init_logging();
//!
//! let backend = Arc::new(HttpBackend::from_config(&config.backend)?);
//! let formatter = Arc::new(config.currency.formatter());
//! let mut session = FoodDetailsSession::open(backend, formatter, FoodId::new(1)).await?;
//!
//! session.increment_extra(ExtraId::new(1));
//! println!("{}", session.view().formatted_total);
//! session.submit().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
