//! Layout module for tracking UI component regions
//!
//! This module provides region tracking for position-aware mouse interactions.
//! The `LayoutRegions` struct tracks where UI components are rendered,
//! `region_at()` determines which component is at a given screen position, and
//! `Viewport` converts between screen cells and chart coordinates.

mod layout_regions;
mod viewport;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
pub use viewport::Viewport;
