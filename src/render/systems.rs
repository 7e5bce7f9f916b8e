use super::*;
use crate::core::{BarAnimation, Demo};
use crate::render::DemoId;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_camera::visibility::RenderLayers;
use bevy_camera::{OrthographicProjection, Projection, ScalingMode, Viewport};
use bevy_math::UVec2;
use std::collections::HashSet;

/// Height reserved under the plot square for the figure caption.
const CAPTION_STRIP: f32 = 28.0;

/// Core system: sync article demos to tile entities
pub fn sync_demos_to_tiles(
    mut commands: Commands,
    article: Res<ArticleRes>,
    mut registry: ResMut<TileRegistry>,
    existing: Query<(Entity, &DemoTile)>,
) {
    let demo_ids: Vec<DemoId> = article.0.demos.iter().map(|d| d.id()).collect();

    // Remove tiles for demos that no longer exist
    for (entity, tile) in existing.iter() {
        if !demo_ids.contains(&tile.id) {
            cleanup_tile(&mut commands, &mut registry, entity, tile.id);
        }
    }

    // Create missing tiles
    for (i, demo) in article.0.demos.iter().enumerate() {
        let id = demo.id();

        if !registry.by_demo.contains_key(&id) {
            let tile = spawn_tile(&mut commands, id, i, demo);
            registry.by_demo.insert(id, tile);
            registry.dirty.push_back(id);
        }
    }
}

fn spawn_tile(commands: &mut Commands, id: DemoId, index: usize, demo: &Demo) -> Entity {
    let kind = match demo {
        Demo::StackBars(_) => DemoKind::StackBars,
        Demo::Rejection(_) => DemoKind::Rejection,
        Demo::BandGraph(_) => DemoKind::BandGraph,
    };

    let tile = commands
        .spawn((
            DemoTile { id, index, kind },
            kind, // Add DemoKind as separate component for queries
            TileRect {
                world_center: Vec2::ZERO,
                world_size: Vec2::new(100.0, 100.0),
                plot: Rect::from_center_size(Vec2::ZERO, Vec2::splat(70.0)),
                viewport: Viewport {
                    physical_position: UVec2::ZERO,
                    physical_size: UVec2::new(100, 100),
                    depth: 0.0..1.0,
                },
            },
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    // Create render root child with visibility
    let root = commands
        .spawn((TileRenderRoot, Transform::default(), Visibility::default()))
        .id();
    commands.entity(tile).add_child(root);

    tile
}

/// Update tile layout when window resizes
pub fn update_tile_layout(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut registry: ResMut<TileRegistry>,
    mut tiles: Query<(&DemoTile, &mut TileRect)>,
    article: Res<ArticleRes>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let n = article.0.demos.len();
    if n == 0 {
        return;
    }

    let (cols, rows) = grid_dims(n, window.width() / window.height());

    let margin = 20.0;
    let gap = 10.0;

    let avail_w = window.width() - 2.0 * margin;
    let avail_h = window.height() - 2.0 * margin;

    let tile_w = (avail_w - (cols - 1) as f32 * gap) / cols as f32;
    let tile_h = (avail_h - (rows - 1) as f32 * gap) / rows as f32;

    for (tile, mut rect) in tiles.iter_mut() {
        let col = tile.index % cols;
        let row = tile.index / cols;

        // Viewport in physical pixels
        let vp_x = margin + col as f32 * (tile_w + gap);
        let vp_y = margin + row as f32 * (tile_h + gap);

        let scale = window.resolution.scale_factor() as f32;
        let phys_pos = UVec2::new((vp_x * scale).round() as u32, (vp_y * scale).round() as u32);
        let phys_size = UVec2::new(
            (tile_w * scale).round() as u32,
            (tile_h * scale).round() as u32,
        );

        // World coordinates (centered origin)
        let world_center = Vec2::new(
            vp_x + tile_w * 0.5 - window.width() * 0.5,
            window.height() * 0.5 - vp_y - tile_h * 0.5,
        );

        let new_size = Vec2::new(tile_w, tile_h);

        // Only mark dirty if layout actually changed
        let changed = rect.world_center != world_center
            || rect.world_size != new_size
            || rect.viewport.physical_position != phys_pos
            || rect.viewport.physical_size != phys_size;

        if changed {
            rect.world_center = world_center;
            rect.world_size = new_size;
            rect.plot = plot_rect(world_center, new_size);
            rect.viewport = Viewport {
                physical_position: phys_pos,
                physical_size: phys_size,
                depth: 0.0..1.0,
            };

            registry.dirty.push_back(tile.id);
        }
    }
}

/// Largest square that fits the tile with a 15px frame, leaving the caption
/// strip free along the bottom. The normalized demo space maps onto this.
fn plot_rect(center: Vec2, size: Vec2) -> Rect {
    let inner_w = size.x - 30.0;
    let inner_h = size.y - 30.0 - CAPTION_STRIP;
    let side = inner_w.min(inner_h).max(1.0);

    let bottom = center.y - size.y * 0.5 + 15.0 + CAPTION_STRIP;
    let top = center.y + size.y * 0.5 - 15.0;

    Rect::from_center_size(
        Vec2::new(center.x, (bottom + top) * 0.5),
        Vec2::splat(side),
    )
}

/// Create/update cameras for each tile
pub fn sync_tile_cameras(
    mut commands: Commands,
    mut registry: ResMut<TileRegistry>,
    tiles: Query<(&DemoTile, &TileRect)>,
    existing: Query<Entity, With<TileCamera>>,
) {
    let mut used = HashSet::new();

    for (tile, rect) in tiles.iter() {
        // One layer per tile index (0..31). This is a hard RenderLayers limitation.
        let layer = (tile.index % 32) as u8;
        let layers = RenderLayers::layer(layer.into());

        let cam_entity = if let Some(&cam) = registry.camera_of.get(&tile.id) {
            cam
        } else {
            let cam = commands.spawn((TileCamera, Transform::default())).id();
            registry.camera_of.insert(tile.id, cam);
            cam
        };

        used.insert(cam_entity);

        let mut ortho = OrthographicProjection::default_2d();
        ortho.scaling_mode = ScalingMode::FixedVertical {
            viewport_height: rect.world_size.y,
        };

        commands.entity(cam_entity).insert((
            Camera2d::default(),
            Camera {
                viewport: Some(rect.viewport.clone()),
                order: 10 + tile.index as isize,
                ..default()
            },
            Projection::from(ortho),
            Transform::from_translation(rect.world_center.extend(1000.0)),
            layers,
        ));
    }

    // Despawn cameras no longer used
    for cam_entity in existing.iter() {
        if !used.contains(&cam_entity) {
            commands.entity(cam_entity).despawn();
        }
    }
}

/// Handle hover detection
pub fn update_hovered_tile(
    windows: Query<&Window>,
    tiles: Query<(&DemoTile, &TileRect)>,
    mut hovered: ResMut<HoveredTile>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    hovered.0 = tiles
        .iter()
        .find(|(_, rect)| {
            let half = rect.world_size * 0.5;
            let min = rect.world_center - half;
            let max = rect.world_center + half;

            let world_x = cursor.x - window.width() * 0.5;
            let world_y = window.height() * 0.5 - cursor.y;

            world_x >= min.x && world_x <= max.x && world_y >= min.y && world_y <= max.y
        })
        .map(|(tile, _)| tile.index);
}

/// Drag the sample line of a stack-bars tile. Pressing over the tile grabs
/// its slider; the vertical cursor position maps back through the plot rect
/// to the normalized threshold.
pub fn handle_slider_input(
    windows: Query<&Window, With<PrimaryWindow>>,
    tiles: Query<(&DemoTile, &TileRect)>,
    hovered: Res<HoveredTile>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut drag: ResMut<SliderDrag>,
    mut article: ResMut<ArticleRes>,
    mut registry: ResMut<TileRegistry>,
) {
    if mouse.just_released(MouseButton::Left) {
        drag.0 = None;
    }

    if mouse.just_pressed(MouseButton::Left) {
        if let Some(index) = hovered.0 {
            for (tile, _) in tiles.iter() {
                if tile.index == index && tile.kind == DemoKind::StackBars {
                    drag.0 = Some(tile.id);
                }
            }
        }
    }

    let Some(id) = drag.0 else { return };
    if !mouse.pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let world_y = window.height() * 0.5 - cursor.y;

    for (tile, rect) in tiles.iter() {
        if tile.id != id {
            continue;
        }

        let y = ((world_y - rect.plot.min.y) / rect.plot.height()).clamp(0.0, 1.0);
        if article.0.set_sample_y(id, y as f64) {
            registry.dirty.push_back(id);
        }
    }
}

pub fn toggle_animation(keys: Res<ButtonInput<KeyCode>>, mut control: ResMut<AnimationControl>) {
    if keys.just_pressed(KeyCode::Space) {
        control.running = !control.running;
    }
}

/// Run condition for [`animate_stack_bars`].
pub fn animation_running(control: Res<AnimationControl>) -> bool {
    control.running
}

/// Pose every bar slice from the shared clock. Each slice owns its material,
/// so the selected-color blend writes straight through.
pub fn animate_stack_bars(
    time: Res<Time>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut slices: Query<(&BarSlice, &mut Transform, &MeshMaterial2d<ColorMaterial>)>,
) {
    let cycle_t = time.elapsed_secs_f64() * BarAnimation::PLAYBACK_RATE;

    for (slice, mut transform, material) in slices.iter_mut() {
        let bar = slice.anim.frame_at(cycle_t);
        *transform = bar_slice_transform(&bar, slice.plot);
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.color = bar.color.into();
        }
    }
}

/// Draw only dirty tiles
pub fn draw_dirty_tiles(
    mut commands: Commands,
    mut registry: ResMut<TileRegistry>,
    tiles: Query<(Entity, &DemoTile, &TileRect)>,
    children_q: Query<&Children>,
    is_root_q: Query<(), With<TileRenderRoot>>,
    article: Res<ArticleRes>,
    unit: Res<UnitMeshes>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    while let Some(id) = registry.dirty.pop_front() {
        // DemoId -> tile entity
        let Some(&tile_entity) = registry.by_demo.get(&id) else {
            continue;
        };

        // Pull current tile state
        let Ok((_e, tile, rect)) = tiles.get(tile_entity) else {
            continue;
        };

        // 1) Remove previous render root(s) under this tile (but keep the tile!)
        if let Ok(children) = children_q.get(tile_entity) {
            for child in children.iter() {
                if is_root_q.get(child).is_ok() {
                    // Despawning an entity removes its descendants via relationships.
                    // Use try_despawn to avoid errors if entity was already despawned.
                    commands.entity(child).try_despawn();
                }
            }
        }

        // 2) Create a fresh render root under the tile
        let root = commands
            .spawn((TileRenderRoot, Transform::default(), Visibility::default()))
            .id();
        commands.entity(tile_entity).add_child(root);

        // 3) Draw based on demo type
        let Some(demo) = article.0.demos.iter().find(|d| d.id() == id) else {
            continue;
        };
        let layers = RenderLayers::layer(tile.index % 32);

        draw_tile_border(
            &mut commands,
            root,
            rect,
            &unit,
            &mut materials,
            layers.clone(),
            Color::srgb(0.23, 0.21, 0.19),
            0.1,
        );

        match demo {
            Demo::StackBars(bars) => {
                draw_stack_bars(
                    &mut commands,
                    root,
                    bars,
                    rect,
                    &unit,
                    &mut materials,
                    layers.clone(),
                );
            }
            Demo::Rejection(rejection) => {
                draw_rejection(
                    &mut commands,
                    root,
                    rejection,
                    rect,
                    &unit,
                    &mut materials,
                    layers.clone(),
                );
            }
            Demo::BandGraph(band) => {
                draw_band_graph(
                    &mut commands,
                    root,
                    band,
                    rect,
                    &unit,
                    &mut meshes,
                    &mut materials,
                    layers.clone(),
                );
            }
        }

        if let Some(caption) = &demo.meta().caption {
            draw_caption(&mut commands, root, caption, rect, layers);
        }
    }
}

// Utility functions for grid layout
fn grid_dims(n: usize, aspect: f32) -> (usize, usize) {
    match n {
        0 => (0, 0),
        1 => (1, 1),
        2 => {
            if aspect > 1.35 {
                (2, 1)
            } else {
                (1, 2)
            }
        }
        3 => {
            if aspect > 1.35 {
                (3, 1)
            } else {
                (2, 2)
            }
        }
        _ => {
            let cols = (n as f32).sqrt().ceil() as usize;
            let rows = (n + cols - 1) / cols;
            (cols, rows)
        }
    }
}

fn cleanup_tile(commands: &mut Commands, registry: &mut TileRegistry, entity: Entity, id: DemoId) {
    commands.entity(entity).despawn();
    registry.by_demo.remove(&id);
    registry.camera_of.remove(&id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_prefers_rows_in_wide_windows() {
        assert_eq!(grid_dims(1, 1.0), (1, 1));
        assert_eq!(grid_dims(2, 1.8), (2, 1));
        assert_eq!(grid_dims(2, 1.0), (1, 2));
        assert_eq!(grid_dims(4, 1.5), (2, 2));
    }

    #[test]
    fn plot_square_leaves_the_caption_strip() {
        let center = Vec2::new(50.0, -30.0);
        let size = Vec2::new(400.0, 300.0);
        let plot = plot_rect(center, size);

        assert_eq!(plot.width(), plot.height());
        let tile_bottom = center.y - size.y * 0.5;
        assert!(plot.min.y - tile_bottom >= CAPTION_STRIP);
        assert!(plot.max.y <= center.y + size.y * 0.5);
        assert!(plot.width() <= size.x - 30.0);
    }
}
