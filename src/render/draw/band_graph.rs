//! Band-density graph: guide paths from the curve to both axes, with the
//! band between two adjacent samples filled in.

#![allow(clippy::too_many_arguments)]

use super::common::{fill_polygon, stroke_polyline, unit_to_world};
use crate::core::BandGraph;
use crate::render::path::{function_path, make_path};
use crate::render::{TileRect, UnitMeshes};
use crate::vector::Vector;
use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;

const FILL_Z: f32 = 0.0;
const GUIDE_Z: f32 = 0.5;
const CURVE_Z: f32 = 1.0;
const LABEL_Z: f32 = 2.0;
const CURVE_SAMPLES: usize = 100;

pub fn draw_band_graph(
    commands: &mut Commands,
    root: Entity,
    demo: &BandGraph,
    rect: &TileRect,
    unit: &UnitMeshes,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    layers: RenderLayers,
) {
    let plot = rect.plot;

    // Highlighted band between samples `band` and `band + 1`: the region
    // bounded by their two guide paths, swept back to both axes.
    if demo.band + 1 < demo.samples {
        let s0 = demo.sample(demo.band);
        let s1 = demo.sample(demo.band + 1);

        let outline = [
            Vector::new(s0.x, 0.0),
            s0,
            Vector::new(0.0, s0.y),
            Vector::new(0.0, s1.y),
            s1,
            Vector::new(s1.x, 0.0),
        ];
        if let Some(mesh) = fill_polygon(meshes, &outline, plot) {
            let mat = materials.add(ColorMaterial::from(Color::from(demo.band_color)));
            commands.entity(root).with_children(|parent| {
                parent.spawn((
                    Mesh2d(mesh),
                    MeshMaterial2d(mat),
                    Transform::from_translation(Vec3::new(0.0, 0.0, FILL_Z)),
                    layers.clone(),
                ));
            });
        }

        let mid_y = (s0.y + s1.y) * 0.5;
        let mid_x = (s0.x + s1.x) * 0.5;
        let dh_pos = unit_to_world(Vector::new(-0.04, mid_y), plot);
        let dw_pos = unit_to_world(Vector::new(mid_x, -0.04), plot);

        commands.entity(root).with_children(|parent| {
            for (label, pos) in [("dh", dh_pos), ("dw", dw_pos)] {
                parent.spawn((
                    Text2d::new(label),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextColor(Color::srgba(1.0, 1.0, 1.0, 0.95)),
                    Transform::from_translation(pos.extend(LABEL_Z)),
                    layers.clone(),
                ));
            }
        });
    }

    // One guide path per sample: down to the x axis and across to the y axis.
    let guide_mat = materials.add(ColorMaterial::from(Color::from(demo.guide_color)));
    for i in 0..demo.samples {
        let s = demo.sample(i);
        stroke_polyline(
            commands,
            root,
            &make_path(&[s.x, 0.0, s.x, s.y, 0.0, s.y]),
            plot,
            1.0,
            GUIDE_Z,
            unit,
            &guide_mat,
            &layers,
        );
    }

    let curve_mat = materials.add(ColorMaterial::from(Color::from(demo.curve_color)));
    let curve = function_path(|x| demo.density.eval(x), CURVE_SAMPLES, 0.0, 1.0);
    stroke_polyline(
        commands,
        root,
        &curve,
        plot,
        2.0,
        CURVE_Z,
        unit,
        &curve_mat,
        &layers,
    );
}
