use crate::color::Color;
use crate::math::{lerp, smoothstep};
use crate::render::components::DemoId;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// Common metadata for all demo types
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DemoMeta {
    /// Plain-text figure caption displayed under the canvas
    pub caption: Option<String>,
}

/// Density functions available to the demos. None of them are validated or
/// normalized here; the demos feed them straight into the drawing and
/// animation code.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Density {
    /// `vscale / (std_dev * sqrt(2pi)) * exp(-((x - mean) / std_dev)^2 / 2)`
    Gaussian {
        mean: f64,
        std_dev: f64,
        vscale: f64,
    },
    /// Constant `level` everywhere.
    Uniform { level: f64 },
    /// `x^2`
    Quadratic,
    /// `ln(steepness * x + 1) * vscale`
    LogRamp { steepness: f64, vscale: f64 },
}

impl Density {
    pub fn gaussian(mean: f64, std_dev: f64) -> Self {
        Self::Gaussian {
            mean,
            std_dev,
            vscale: 1.0,
        }
    }

    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            Density::Gaussian {
                mean,
                std_dev,
                vscale,
            } => {
                let c = vscale / (std_dev * (2.0 * std::f64::consts::PI).sqrt());
                let z = (x - mean) / std_dev;
                c * (-0.5 * z * z).exp()
            }
            Density::Uniform { level } => level,
            Density::Quadratic => x * x,
            Density::LogRamp { steepness, vscale } => (steepness * x + 1.0).ln() * vscale,
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Density::gaussian(0.5, 0.25)
    }
}

/// One discretized slice of the density at a single keyframe. Width and
/// position are in normalized [0,1] x [0,1] space, bottom-left anchored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub position: Vector,
}

impl Bar {
    pub fn lerp(&self, other: &Bar, t: f64) -> Bar {
        Bar {
            width: lerp(self.width, other.width, t),
            height: lerp(self.height, other.height, t),
            color: self.color.lerp(other.color, t),
            position: self.position.lerp(other.position, t),
        }
    }
}

/// The full keyframe cycle for one slice: tall unstacked, squashed, slid into
/// its place in the cumulative stack, recolored there if selected, slid back,
/// and tall again carrying the final color.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarAnimation {
    pub frames: [Bar; BarAnimation::FRAME_COUNT],
    pub selected: bool,
}

impl BarAnimation {
    pub const FRAME_COUNT: usize = 6;

    /// Cycle fraction advanced per second of wall-clock time.
    pub const PLAYBACK_RATE: f64 = 0.125;

    /// Interpolated bar at `cycle_t` (in cycles; callers multiply elapsed
    /// seconds by [`Self::PLAYBACK_RATE`]). The fractional frame position is
    /// eased with `smoothstep(0.2, 0.8, _)` so each keyframe holds briefly
    /// before blending into the next.
    pub fn frame_at(&self, cycle_t: f64) -> Bar {
        let f = cycle_t.rem_euclid(1.0) * Self::FRAME_COUNT as f64;
        let i = f.floor() as usize;
        let alpha = smoothstep(0.2, 0.8, f - i as f64);
        let frame0 = &self.frames[i % Self::FRAME_COUNT];
        let frame1 = &self.frames[(i + 1) % Self::FRAME_COUNT];
        frame0.lerp(frame1, alpha)
    }
}

/// Slider quantum for the sample threshold.
pub const SAMPLE_STEP: f64 = 0.001;

/// Animated bar-stacking demo: the density is cut into `bar_count` slices
/// which repeatedly squash, stack into the CDF, mark the slice crossing
/// `sample_y`, and unstack.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StackBars {
    pub id: DemoId,
    pub meta: DemoMeta,
    pub density: Density,
    pub bar_count: usize,
    /// Sample threshold in [0, 1], slider-driven.
    pub sample_y: f64,
    /// Height multiplier for the tall unstacked keyframes.
    pub start_vscale: f64,
    pub bar_color: Color,
    pub selected_color: Color,
    pub line_color: Color,
}

impl StackBars {
    pub fn new() -> Self {
        Self {
            id: DemoId::new(),
            meta: DemoMeta::default(),
            density: Density::default(),
            bar_count: 21,
            sample_y: 0.6,
            start_vscale: 0.5,
            bar_color: Color::rgb(0xb5, 0xc5, 0xc9),
            selected_color: Color::rgb(0x40, 0x3e, 0x39),
            line_color: Color::rgb(0xe3, 0xdd, 0xcc),
        }
    }

    /// Clamp to [0, 1] and quantize to the slider step.
    pub fn set_sample_y(&mut self, y: f64) {
        self.sample_y = (y.clamp(0.0, 1.0) / SAMPLE_STEP).round() * SAMPLE_STEP;
    }

    /// First slice whose inclusive cumulative mass times `dx` reaches
    /// `sample_y`. Linear scan with early termination; at most one slice is
    /// ever selected, and none if the threshold exceeds the total mass.
    pub fn selected_bar(&self) -> Option<usize> {
        let dx = 1.0 / self.bar_count as f64;
        let mut cumulative = 0.0;
        for i in 0..self.bar_count {
            cumulative += self.density.eval((i as f64 + 0.5) * dx);
            if cumulative * dx >= self.sample_y {
                return Some(i);
            }
        }
        None
    }

    /// Build the keyframe table for every slice. Heights come from the
    /// midpoint rule; the stacked keyframes rest at the cumulative height of
    /// the slices before them, which is exactly the discretized CDF.
    pub fn animations(&self) -> Vec<BarAnimation> {
        let dx = 1.0 / self.bar_count as f64;
        let mut anims = Vec::with_capacity(self.bar_count);
        let mut cumulative = 0.0;
        let mut already_selected = false;

        for i in 0..self.bar_count {
            let x = i as f64 * dx;
            // Same midpoint expression as selected_bar, so both scans agree
            // even on knife-edge thresholds.
            let height = self.density.eval((i as f64 + 0.5) * dx);
            let resting = cumulative;
            cumulative += height;

            let selected = !already_selected && cumulative * dx >= self.sample_y;
            already_selected |= selected;
            let end_color = if selected {
                self.selected_color
            } else {
                self.bar_color
            };

            let bar = |height: f64, color: Color, y: f64| Bar {
                width: dx,
                height,
                color,
                position: Vector::new(x, y),
            };

            anims.push(BarAnimation {
                frames: [
                    bar(height * self.start_vscale, self.bar_color, 0.0),
                    bar(height * dx, self.bar_color, 0.0),
                    bar(height * dx, self.bar_color, resting * dx),
                    bar(height * dx, end_color, resting * dx),
                    bar(height * dx, end_color, 0.0),
                    bar(height * self.start_vscale, end_color, 0.0),
                ],
                selected,
            });
        }

        anims
    }
}

impl Default for StackBars {
    fn default() -> Self {
        Self::new()
    }
}

/// Scatter of uniform 2D samples classified against the density curve.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RejectionSampling {
    pub id: DemoId,
    pub meta: DemoMeta,
    pub density: Density,
    pub samples: usize,
    /// RNG seed, so redraws reproduce the same scatter.
    pub seed: u64,
    pub hit_color: Color,
    pub miss_color: Color,
    pub curve_color: Color,
}

impl RejectionSampling {
    pub fn new() -> Self {
        Self {
            id: DemoId::new(),
            meta: DemoMeta::default(),
            density: Density::Gaussian {
                mean: 0.5,
                std_dev: 0.25,
                vscale: 0.5,
            },
            samples: 500,
            seed: 0,
            hit_color: Color::rgb(0xa6, 0xe0, 0xb0),
            miss_color: Color::rgb(0xd6, 0x90, 0xab),
            curve_color: Color::rgb(0xb5, 0xae, 0x9e),
        }
    }
}

impl Default for RejectionSampling {
    fn default() -> Self {
        Self::new()
    }
}

/// Static graph highlighting the band between two adjacent guide paths of a
/// function, used to illustrate the change-of-variables picture.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BandGraph {
    pub id: DemoId,
    pub meta: DemoMeta,
    pub density: Density,
    pub samples: usize,
    /// Index of the highlighted band; the fill spans samples `band` and
    /// `band + 1`.
    pub band: usize,
    pub band_color: Color,
    pub guide_color: Color,
    pub curve_color: Color,
}

impl BandGraph {
    pub fn new() -> Self {
        Self {
            id: DemoId::new(),
            meta: DemoMeta::default(),
            density: Density::Quadratic,
            samples: 20,
            band: 15,
            band_color: Color::rgb(0xb5, 0xc5, 0xc9),
            guide_color: Color::rgb(0xd6, 0xcf, 0xbd),
            curve_color: Color::rgb(0xb5, 0xae, 0x9e),
        }
    }

    /// `((i + 0.5) * dx, f((i + 0.5) * dx))`
    pub fn sample(&self, i: usize) -> Vector {
        let dx = 1.0 / self.samples as f64;
        let x = (i as f64 + 0.5) * dx;
        Vector::new(x, self.density.eval(x))
    }
}

impl Default for BandGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Demo {
    StackBars(StackBars),
    Rejection(RejectionSampling),
    BandGraph(BandGraph),
}

impl Demo {
    pub fn id(&self) -> DemoId {
        match self {
            Demo::StackBars(d) => d.id,
            Demo::Rejection(d) => d.id,
            Demo::BandGraph(d) => d.id,
        }
    }

    pub fn meta(&self) -> &DemoMeta {
        match self {
            Demo::StackBars(d) => &d.meta,
            Demo::Rejection(d) => &d.meta,
            Demo::BandGraph(d) => &d.meta,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Article {
    pub background: Color,
    pub demos: Vec<Demo>,
}

impl Default for Article {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x26, 0x24, 0x21),
            demos: vec![],
        }
    }
}

impl Article {
    /// Update the sample threshold of the stack-bars demo with this id.
    /// Returns true when the demo exists and the quantized value changed,
    /// so callers know whether a redraw is due.
    pub fn set_sample_y(&mut self, id: DemoId, y: f64) -> bool {
        for demo in self.demos.iter_mut() {
            if let Demo::StackBars(bars) = demo {
                if bars.id == id {
                    let before = bars.sample_y;
                    bars.set_sample_y(y);
                    return bars.sample_y != before;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    fn uniform_stack(bar_count: usize, sample_y: f64) -> StackBars {
        let mut bars = StackBars::new();
        bars.density = Density::Uniform { level: 1.0 };
        bars.bar_count = bar_count;
        bars.sample_y = sample_y;
        bars
    }

    #[test]
    fn selection_crosses_at_index_ten_for_uniform_half() {
        // cumulative mass first reaches 0.5 at slice 10: 11/21 > 0.5 > 10/21
        let bars = uniform_stack(21, 0.5);
        assert_eq!(bars.selected_bar(), Some(10));
    }

    #[test]
    fn selection_at_zero_threshold_is_first_bar() {
        let bars = uniform_stack(21, 0.0);
        assert_eq!(bars.selected_bar(), Some(0));
    }

    #[test]
    fn selection_above_total_mass_is_none() {
        let bars = uniform_stack(21, 1.5);
        assert_eq!(bars.selected_bar(), None);
    }

    #[test]
    fn at_most_one_animation_is_selected() {
        for sample_y in [0.0, 0.3, 0.5, 0.99, 1.0, 1.5] {
            let bars = uniform_stack(21, sample_y);
            let selected = bars
                .animations()
                .iter()
                .filter(|a| a.selected)
                .count();
            assert!(selected <= 1, "sample_y={sample_y} selected {selected}");
            assert_eq!(selected == 1, bars.selected_bar().is_some());
        }
    }

    #[test]
    fn selection_matches_animation_flag() {
        let bars = uniform_stack(21, 0.5);
        let anims = bars.animations();
        let flagged = anims.iter().position(|a| a.selected);
        assert_eq!(flagged, bars.selected_bar());
    }

    #[test]
    fn keyframes_follow_the_cycle_shape() {
        let bars = uniform_stack(4, 2.0);
        let dx = 0.25;
        let anims = bars.animations();
        assert_eq!(anims.len(), 4);

        for (i, anim) in anims.iter().enumerate() {
            let x = i as f64 * dx;
            let resting = i as f64; // uniform: cumulative before = i * 1.0
            let f = &anim.frames;

            assert!(approx_eq(f[0].height, bars.start_vscale));
            assert!(approx_eq(f[1].height, dx));
            assert_eq!(f[0].position, Vector::new(x, 0.0));
            assert_eq!(f[1].position, Vector::new(x, 0.0));
            assert!(approx_eq(f[2].position.y, resting * dx));
            assert!(approx_eq(f[3].position.y, resting * dx));
            assert_eq!(f[4].position, Vector::new(x, 0.0));
            assert!(approx_eq(f[5].height, bars.start_vscale));
            for frame in f {
                assert!(approx_eq(frame.width, dx));
            }
        }
    }

    #[test]
    fn selected_slice_recolors_only_late_frames() {
        let bars = uniform_stack(21, 0.5);
        let anims = bars.animations();
        let hit = &anims[10];
        assert!(hit.selected);
        for frame in &hit.frames[..3] {
            assert_eq!(frame.color, bars.bar_color);
        }
        for frame in &hit.frames[3..] {
            assert_eq!(frame.color, bars.selected_color);
        }

        let miss = &anims[0];
        assert!(!miss.selected);
        for frame in &miss.frames {
            assert_eq!(frame.color, bars.bar_color);
        }
    }

    #[test]
    fn frame_at_integer_phase_is_the_keyframe() {
        let bars = uniform_stack(5, 0.4);
        let anim = &bars.animations()[2];
        for i in 0..BarAnimation::FRAME_COUNT {
            let t = i as f64 / BarAnimation::FRAME_COUNT as f64;
            assert_eq!(anim.frame_at(t), anim.frames[i]);
        }
    }

    #[test]
    fn frame_at_midphase_blends_halfway() {
        let bars = uniform_stack(5, 2.0);
        let anim = &bars.animations()[0];
        // halfway between frame 0 (tall) and frame 1 (squashed)
        let t = 0.5 / BarAnimation::FRAME_COUNT as f64;
        let bar = anim.frame_at(t);
        let expected = (anim.frames[0].height + anim.frames[1].height) * 0.5;
        assert!(approx_eq(bar.height, expected));
    }

    #[test]
    fn frame_at_wraps_from_last_to_first() {
        let bars = uniform_stack(5, 2.0);
        let anim = &bars.animations()[3];
        let t = (BarAnimation::FRAME_COUNT as f64 - 0.5) / BarAnimation::FRAME_COUNT as f64;
        let bar = anim.frame_at(t);
        let expected = (anim.frames[5].height + anim.frames[0].height) * 0.5;
        assert!(approx_eq(bar.height, expected));
        // a full cycle later is the same pose
        let next = anim.frame_at(t + 1.0);
        assert!(approx_eq(next.height, bar.height));
        assert!(next.position.equivalent(bar.position));
    }

    #[test]
    fn gaussian_peaks_at_mean_and_integrates_near_one() {
        let g = Density::gaussian(0.5, 0.25);
        assert!(g.eval(0.5) > g.eval(0.3));
        assert!(approx_eq(g.eval(0.3), g.eval(0.7)));

        let n = 1000;
        let dx = 1.0 / n as f64;
        let mass: f64 = (0..n).map(|i| g.eval((i as f64 + 0.5) * dx) * dx).sum();
        // 2 sigma on each side of the mean fits in [0, 1]
        assert!(mass > 0.94 && mass < 1.0, "mass={mass}");
    }

    #[test]
    fn set_sample_y_clamps_and_quantizes() {
        let mut bars = StackBars::new();
        bars.set_sample_y(0.12345);
        assert!(approx_eq(bars.sample_y, 0.123));
        bars.set_sample_y(-3.0);
        assert!(approx_eq(bars.sample_y, 0.0));
        bars.set_sample_y(7.0);
        assert!(approx_eq(bars.sample_y, 1.0));
    }

    #[test]
    fn article_routes_sample_updates_by_id() {
        let mut article = Article::default();
        let bars = StackBars::new();
        let id = bars.id;
        article.demos.push(Demo::StackBars(bars));
        article.demos.push(Demo::BandGraph(BandGraph::new()));

        assert!(article.set_sample_y(id, 0.25));
        let Demo::StackBars(bars) = &article.demos[0] else {
            unreachable!()
        };
        assert!(approx_eq(bars.sample_y, 0.25));
        // same value again is not a change
        assert!(!article.set_sample_y(id, 0.25));
        assert!(!article.set_sample_y(DemoId(9999), 0.5));
    }

    #[test]
    fn band_graph_samples_at_slice_midpoints() {
        let band = BandGraph::new();
        let s = band.sample(15);
        assert!(approx_eq(s.x, 15.5 / 20.0));
        assert!(approx_eq(s.y, s.x * s.x));
    }

    #[test]
    fn article_json_round_trips() {
        let mut article = Article::default();
        article.demos.push(Demo::Rejection(RejectionSampling::new()));
        article.demos.push(Demo::StackBars(StackBars::new()));

        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();

        assert_eq!(back.background, article.background);
        assert_eq!(back.demos.len(), 2);
        let Demo::StackBars(bars) = &back.demos[1] else {
            unreachable!()
        };
        assert!(approx_eq(bars.sample_y, 0.6));
        assert_eq!(bars.bar_color, Color::rgb(0xb5, 0xc5, 0xc9));
    }
}
