//! Outbound adapters (driven side).

pub mod http;
