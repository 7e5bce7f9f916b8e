use crate::core::BarAnimation;
use bevy::prelude::*;
use bevy_camera::Viewport;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Component, Clone, Copy, Hash, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct DemoId(pub u64);

impl Default for DemoId {
    fn default() -> Self {
        static CTR: AtomicU32 = AtomicU32::new(1);
        Self(CTR.fetch_add(1, Ordering::Relaxed).into())
    }
}

impl DemoId {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Component)]
pub struct DemoTile {
    pub id: DemoId,
    pub index: usize,
    pub kind: DemoKind,
}

#[derive(Component, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    StackBars,
    Rejection,
    BandGraph,
}

#[derive(Component)]
pub struct TileRect {
    pub world_center: Vec2,
    pub world_size: Vec2,
    /// Square plot area in world space, the normalized [0,1] x [0,1] content
    /// box maps onto this.
    pub plot: Rect,
    pub viewport: Viewport,
}

#[derive(Component)]
pub struct TileRenderRoot;

#[derive(Component)]
pub struct TileCamera;

/// One animated slice of a stack-bars demo. Carries its own keyframe table
/// and the plot rect so the animation system can pose it without walking back
/// to the tile.
#[derive(Component)]
pub struct BarSlice {
    pub anim: BarAnimation,
    pub plot: Rect,
}
