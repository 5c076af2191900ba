//! Bounded quantity policies for the base item and its extras.
//!
//! The base item never drops below one unit; an extra never drops below
//! zero. Both are unbounded above.

use std::fmt;

/// Which floor a counter enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityPolicy {
    /// Base item: floor of 1.
    Base,
    /// Extra: floor of 0.
    Extra,
}

impl QuantityPolicy {
    /// Lowest quantity this policy allows.
    #[must_use]
    pub const fn floor(self) -> u32 {
        match self {
            Self::Base => 1,
            Self::Extra => 0,
        }
    }
}

/// A quantity that can only move within its policy's bounds.
///
/// The inner value is private so every change goes through
/// [`increment`](Self::increment) and [`decrement`](Self::decrement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    value: u32,
    policy: QuantityPolicy,
}

impl Quantity {
    /// Start a counter at its policy's floor.
    #[must_use]
    pub const fn at_floor(policy: QuantityPolicy) -> Self {
        Self {
            value: policy.floor(),
            policy,
        }
    }

    /// Base item quantity, starting at 1.
    #[must_use]
    pub const fn base() -> Self {
        Self::at_floor(QuantityPolicy::Base)
    }

    /// Extra quantity, starting at 0.
    #[must_use]
    pub const fn extra() -> Self {
        Self::at_floor(QuantityPolicy::Extra)
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub const fn policy(&self) -> QuantityPolicy {
        self.policy
    }

    /// Add one unit. Always succeeds.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// Remove one unit unless already at the floor.
    ///
    /// Returns whether the value changed.
    pub fn decrement(&mut self) -> bool {
        if self.value <= self.policy.floor() {
            return false;
        }
        self.value -= 1;
        true
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
