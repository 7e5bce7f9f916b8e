//! Rejection sampling scatter: uniform points over the unit square,
//! classified against the density curve.

#![allow(clippy::too_many_arguments)]

use super::common::{stroke_polyline, unit_to_world};
use crate::core::RejectionSampling;
use crate::render::path::function_path;
use crate::render::{TileRect, UnitMeshes};
use crate::vector::Vector;
use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const POINT_Z: f32 = 0.5;
const CURVE_Z: f32 = 1.0;
const POINT_SIZE: f32 = 5.0;
const CURVE_SAMPLES: usize = 100;

pub fn draw_rejection(
    commands: &mut Commands,
    root: Entity,
    demo: &RejectionSampling,
    rect: &TileRect,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    layers: RenderLayers,
) {
    let plot = rect.plot;

    let hit_mat = materials.add(ColorMaterial::from(Color::from(demo.hit_color)));
    let miss_mat = materials.add(ColorMaterial::from(Color::from(demo.miss_color)));

    // Seeded so a relayout redraws the identical scatter.
    let mut rng = SmallRng::seed_from_u64(demo.seed);
    for _ in 0..demo.samples {
        let x = rng.random::<f64>();
        let y = rng.random::<f64>();
        let accepted = y < demo.density.eval(x);

        let mat = if accepted { &hit_mat } else { &miss_mat };
        let pos = unit_to_world(Vector::new(x, y), plot);

        commands.entity(root).with_children(|parent| {
            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(mat.clone()),
                Transform {
                    translation: pos.extend(POINT_Z),
                    scale: Vec3::splat(POINT_SIZE),
                    ..default()
                },
                layers.clone(),
            ));
        });
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
