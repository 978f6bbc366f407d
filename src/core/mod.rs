//! Core types and logic for bpdex.
//!
//! This module contains the blueprint catalog types, the per-item status
//! state machine, the pure view derivation, and the tracker that ties
//! mutations to persistence.

pub mod item;
pub mod status;
pub mod tracker;
pub mod view;

pub use item::{Dataset, Item};
pub use status::{Status, StatusMap};
pub use tracker::Tracker;
pub use view::{derive_view, DerivedView, ViewQuery};
