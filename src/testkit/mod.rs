//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`backend`] — [`RecordingBackend`](backend::RecordingBackend), an
//!   in-memory [`FoodBackend`](crate::port::FoodBackend) that records calls
//!   and injects failures.
//! - [`domain`] — Builders for backend records.

pub mod backend;
pub mod domain;
