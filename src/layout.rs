//! Screen regions of rendered document nodes
//!
//! Rendering records where each field and suggestion row landed on screen,
//! and `region_at()` maps a mouse position back to the document node under
//! it, so a terminal click can be dispatched like a click on that element.

mod layout_hit_test;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::LayoutRegions;
