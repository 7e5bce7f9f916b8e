//! Drawing functions for the demo tiles.
//!
//! This module is organized into focused submodules:
//! - `common`: Shared utilities (unit-space mapping, strokes, fills, borders)
//! - `stack_bars`: Animated bar-stacking demo
//! - `rejection`: Rejection sampling scatter
//! - `band_graph`: Band-density graph

mod band_graph;
mod common;
mod rejection;
mod stack_bars;

// Re-export public drawing functions
pub use band_graph::draw_band_graph;
pub use common::{draw_caption, draw_tile_border, fill_polygon, stroke_polyline, unit_to_world};
pub use rejection::draw_rejection;
pub use stack_bars::{bar_slice_transform, draw_stack_bars};
