pub mod components;
pub mod draw;
pub mod path;
pub mod resources;
pub mod systems;

use components::*;
use draw::*;
pub use resources::*;
use systems::*;

use bevy::prelude::*;

#[derive(Default)]
pub struct ArticleRenderPlugin;

impl Plugin for ArticleRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileRegistry>()
            .init_resource::<HoveredTile>()
            .init_resource::<SliderDrag>()
            .init_resource::<AnimationControl>()
            .add_systems(Startup, (setup_global_scene, setup_unit_meshes))
            .add_systems(
                Update,
                (
                    sync_demos_to_tiles,
                    update_tile_layout,
                    sync_tile_cameras,
                    update_hovered_tile,
                    handle_slider_input,
                    toggle_animation,
                    draw_dirty_tiles,
                    animate_stack_bars.run_if(animation_running),
                ),
            );
    }
}
