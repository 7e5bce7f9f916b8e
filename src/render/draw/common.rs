//! Shared drawing utilities for the demo tiles.

#![allow(clippy::too_many_arguments)]

use crate::render::{TileRect, UnitMeshes};
use crate::vector::Vector;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_camera::visibility::RenderLayers;
use bevy_mesh::{Indices, PrimitiveTopology};
use lyon_tessellation::math::point;
use lyon_tessellation::path::Path;
use lyon_tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};

/// Map a point in normalized [0,1] x [0,1] space (y up) onto the plot rect.
pub fn unit_to_world(p: Vector, plot: Rect) -> Vec2 {
    Vec2::new(
        plot.min.x + p.x as f32 * plot.width(),
        plot.min.y + p.y as f32 * plot.height(),
    )
}

/// Stroke a polyline as one rotated quad per segment.
pub fn stroke_polyline(
    commands: &mut Commands,
    root: Entity,
    points: &[Vector],
    plot: Rect,
    width: f32,
    z: f32,
    unit: &UnitMeshes,
    mat: &Handle<ColorMaterial>,
    layers: &RenderLayers,
) {
    if points.len() < 2 {
        return;
    }

    for pair in points.windows(2) {
        let a = unit_to_world(pair[0], plot);
        let b = unit_to_world(pair[1], plot);

        let length = a.distance(b);
        let angle = (b.y - a.y).atan2(b.x - a.x);

        commands.entity(root).with_children(|parent| {
            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(mat.clone()),
                Transform {
                    translation: ((a + b) * 0.5).extend(z),
                    rotation: Quat::from_rotation_z(angle),
                    scale: Vec3::new(length, width, 1.0),
                },
                layers.clone(),
            ));
        });
    }
}

/// Tessellate a closed polygon into a fill mesh. Returns None for degenerate
/// input or when tessellation fails, in which case nothing is drawn.
pub fn fill_polygon(
    meshes: &mut Assets<Mesh>,
    points: &[Vector],
    plot: Rect,
) -> Option<Handle<Mesh>> {
    if points.len() < 3 {
        return None;
    }

    let mut builder = Path::builder();
    let first = unit_to_world(points[0], plot);
    builder.begin(point(first.x, first.y));
    for p in &points[1..] {
        let w = unit_to_world(*p, plot);
        builder.line_to(point(w.x, w.y));
    }
    builder.close();
    let path = builder.build();

    let mut buffers: VertexBuffers<[f32; 3], u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();
    tessellator
        .tessellate_path(
            &path,
            &FillOptions::default(),
            &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| {
                let p = v.position();
                [p.x, p.y, 0.0]
            }),
        )
        .ok()?;

    let normals: Vec<[f32; 3]> = buffers.vertices.iter().map(|_| [0.0, 0.0, 1.0]).collect();
    let uvs: Vec<[f32; 2]> = buffers.vertices.iter().map(|_| [0.0, 0.0]).collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, buffers.vertices);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(buffers.indices));
    Some(meshes.add(mesh))
}

/// Draw a border around a tile rect.
pub fn draw_tile_border(
    commands: &mut Commands,
    root: Entity,
    rect: &TileRect,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    layers: RenderLayers,
    color: Color,
    z: f32,
) {
    let border_mat = materials.add(ColorMaterial::from(color));
    let border_thickness = 2.0;

    commands.entity(root).with_children(|parent| {
        for (dx, dy) in [(0.0, 0.5), (0.0, -0.5), (-0.5, 0.0), (0.5, 0.0)] {
            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(border_mat.clone()),
                Transform {
                    translation: Vec3::new(
                        rect.world_center.x + dx * rect.world_size.x,
                        rect.world_center.y + dy * rect.world_size.y,
                        z,
                    ),
                    scale: if dx == 0.0 {
                        Vec3::new(rect.world_size.x, border_thickness, 1.0)
                    } else {
                        Vec3::new(border_thickness, rect.world_size.y, 1.0)
                    },
                    ..default()
                },
                layers.clone(),
            ));
        }
    });
}

/// Draw the figure caption in the strip under the plot area.
pub fn draw_caption(
    commands: &mut Commands,
    root: Entity,
    caption: &str,
    rect: &TileRect,
    layers: RenderLayers,
) {
    let caption_y = rect.world_center.y - rect.world_size.y * 0.5 + 16.0;

    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Text2d::new(caption.to_owned()),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(crate::color::Color::rgb(0xd6, 0xcf, 0xbd).srgba(0.9)),
            Transform::from_translation(Vec3::new(rect.world_center.x, caption_y, 3.0)),
            layers,
        ));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn unit_space_maps_onto_plot_rect() {
        let plot = Rect::from_center_size(Vec2::new(10.0, -20.0), Vec2::splat(200.0));
        let origin = unit_to_world(Vector::ZERO, plot);
        let top_right = unit_to_world(Vector::ONE, plot);

        assert_eq!(origin, plot.min);
        assert_eq!(top_right, plot.max);
        // unit y grows upward in world space
        assert!(top_right.y > origin.y);

        let mid = unit_to_world(Vector::new(0.5, 0.5), plot);
        assert!(approx_eq(mid.x as f64, 10.0));
        assert!(approx_eq(mid.y as f64, -20.0));
    }
}
