//! Animated bar-stacking demo: density slices, the sample line and its
//! drag handle.

#![allow(clippy::too_many_arguments)]

use super::common::{stroke_polyline, unit_to_world};
use crate::core::{Bar, StackBars};
use crate::render::path::line_path;
use crate::render::{BarSlice, TileRect, UnitMeshes};
use crate::vector::Vector;
use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;

const BAR_Z: f32 = 1.0;
const LINE_Z: f32 = 2.0;
const HANDLE_Z: f32 = 2.5;

/// Pose a slice quad for one interpolated bar. Bars are anchored at their
/// bottom-left corner in unit space; a one pixel inset keeps neighboring
/// slices visually separate, as squashed slices tile the x axis exactly.
pub fn bar_slice_transform(bar: &Bar, plot: Rect) -> Transform {
    let center = unit_to_world(bar.position + Vector::new(bar.width, bar.height).half(), plot);
    let w = (bar.width as f32 * plot.width() - 1.0).max(0.0);
    let h = (bar.height as f32 * plot.height() - 1.0).max(0.0);

    Transform {
        translation: center.extend(BAR_Z),
        scale: Vec3::new(w, h, 1.0),
        ..default()
    }
}

pub fn draw_stack_bars(
    commands: &mut Commands,
    root: Entity,
    bars: &StackBars,
    rect: &TileRect,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    layers: RenderLayers,
) {
    let plot = rect.plot;

    // One entity per slice; the animation system owns its transform and
    // material color from here on.
    for anim in bars.animations() {
        let start = anim.frames[0];
        let mat = materials.add(ColorMaterial::from(Color::from(start.color)));

        commands.entity(root).with_children(|parent| {
            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(mat),
                bar_slice_transform(&start, plot),
                BarSlice { anim, plot },
                layers.clone(),
            ));
        });
    }

    // Sample threshold line across the full width, with a grab handle near
    // the right edge.
    let line_mat = materials.add(ColorMaterial::from(Color::from(bars.line_color)));
    let y = bars.sample_y;
    stroke_polyline(
        commands,
        root,
        &line_path(0.0, y, 1.0, y),
        plot,
        2.0,
        LINE_Z,
        unit,
        &line_mat,
        &layers,
    );

    let handle = unit_to_world(Vector::new(0.98, y), plot);
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh2d(unit.quad.clone()),
            MeshMaterial2d(line_mat.clone()),
            Transform {
                translation: handle.extend(HANDLE_Z),
                scale: Vec3::splat(8.0),
                ..default()
            },
            layers.clone(),
        ));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::math::approx_eq;

    #[test]
    fn slice_quads_sit_on_their_unit_rect() {
        let plot = Rect::from_center_size(Vec2::ZERO, Vec2::splat(400.0));
        let bar = Bar {
            width: 0.25,
            height: 0.5,
            color: Color::WHITE,
            position: Vector::ZERO,
        };

        let tf = bar_slice_transform(&bar, plot);
        assert!(approx_eq(tf.translation.x as f64, -150.0));
        assert!(approx_eq(tf.translation.y as f64, -100.0));
        assert!(approx_eq(tf.scale.x as f64, 99.0));
        assert!(approx_eq(tf.scale.y as f64, 199.0));
    }

    #[test]
    fn degenerate_slices_never_flip() {
        let plot = Rect::from_center_size(Vec2::ZERO, Vec2::splat(400.0));
        let bar = Bar {
            width: 0.25,
            height: 0.001,
            color: Color::WHITE,
            position: Vector::ZERO,
        };

        let tf = bar_slice_transform(&bar, plot);
        assert!(tf.scale.y >= 0.0);
    }
}
