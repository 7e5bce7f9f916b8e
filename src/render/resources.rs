use super::components::DemoId;
use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;
use std::collections::{HashMap, VecDeque};

#[derive(Resource, Clone)]
pub struct ArticleRes(pub crate::core::Article);

impl ArticleRes {
    pub fn new(article: crate::core::Article) -> Self {
        Self(article)
    }
}

#[derive(Resource, Default)]
pub struct TileRegistry {
    pub by_demo: HashMap<DemoId, Entity>,
    pub camera_of: HashMap<DemoId, Entity>,
    pub dirty: VecDeque<DemoId>,
}

#[derive(Resource, Default)]
pub struct HoveredTile(pub Option<usize>);

/// Stack-bars demo currently grabbed by the mouse, if any.
#[derive(Resource, Default)]
pub struct SliderDrag(pub Option<DemoId>);

/// Cooperative pause flag for the keyframe animations.
#[derive(Resource)]
pub struct AnimationControl {
    pub running: bool,
}

impl Default for AnimationControl {
    fn default() -> Self {
        Self { running: true }
    }
}

#[derive(Resource)]
pub struct UnitMeshes {
    pub quad: Handle<Mesh>,
}

pub fn setup_global_scene(mut commands: Commands) {
    // Background camera: clears the window to the article color before the
    // tile cameras (order 10+) draw their viewports. Renders no layers.
    commands.spawn((
        Camera2d::default(),
        Camera {
            order: 0,
            ..default()
        },
        RenderLayers::none(),
    ));
}

pub fn setup_unit_meshes(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let quad = meshes.add(Mesh::from(Rectangle::new(1.0, 1.0)));
    commands.insert_resource(UnitMeshes { quad });
}
