//! Adapters for the ports in [`crate::port`].

pub mod outbound;
