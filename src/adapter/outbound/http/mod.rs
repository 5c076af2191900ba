//! REST adapter for the food backend.

mod client;

pub use client::HttpBackend;
