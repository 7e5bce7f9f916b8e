use crate::color::Color;
use crate::core::{Article, BandGraph, Demo, Density, RejectionSampling, StackBars};

pub fn article() -> ArticleBuilder {
    ArticleBuilder {
        article: Article::default(),
    }
}

pub struct ArticleBuilder {
    article: Article,
}

impl ArticleBuilder {
    pub fn background_color(mut self, c: Color) -> Self {
        self.article.background = c;
        self
    }

    pub fn add_stack_bars<F>(mut self, f: F) -> Self
    where
        F: FnOnce(StackBarsBuilder) -> StackBarsBuilder,
    {
        let b = f(StackBarsBuilder::new());
        self.article.demos.push(Demo::StackBars(b.bars));
        self
    }

    pub fn add_rejection<F>(mut self, f: F) -> Self
    where
        F: FnOnce(RejectionBuilder) -> RejectionBuilder,
    {
        let b = f(RejectionBuilder::new());
        self.article.demos.push(Demo::Rejection(b.demo));
        self
    }

    pub fn add_band_graph<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BandGraphBuilder) -> BandGraphBuilder,
    {
        let b = f(BandGraphBuilder::new());
        self.article.demos.push(Demo::BandGraph(b.graph));
        self
    }

    /// Get the built Article without running it
    pub fn build(self) -> Article {
        self.article
    }

    /// Run the article locally using Bevy (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_local(self) {
        crate::runtime::run_article(self.article);
    }
}

/* -------------------- STACK BARS BUILDER -------------------- */

pub struct StackBarsBuilder {
    bars: StackBars,
}

impl StackBarsBuilder {
    fn new() -> Self {
        Self {
            bars: StackBars::new(),
        }
    }

    pub fn density(mut self, density: Density) -> Self {
        self.bars.density = density;
        self
    }

    pub fn bar_count(mut self, count: usize) -> Self {
        self.bars.bar_count = count.max(1);
        self
    }

    /// Initial sample threshold; clamped to [0, 1] and quantized.
    pub fn sample_y(mut self, y: f64) -> Self {
        self.bars.set_sample_y(y);
        self
    }

    /// Height multiplier for the tall unstacked keyframes
    pub fn start_vscale(mut self, vscale: f64) -> Self {
        self.bars.start_vscale = vscale;
        self
    }

    pub fn bar_color(mut self, c: Color) -> Self {
        self.bars.bar_color = c;
        self
    }

    pub fn selected_color(mut self, c: Color) -> Self {
        self.bars.selected_color = c;
        self
    }

    pub fn line_color(mut self, c: Color) -> Self {
        self.bars.line_color = c;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.bars.meta.caption = Some(caption.into());
        self
    }
}

/* -------------------- REJECTION BUILDER -------------------- */

pub struct RejectionBuilder {
    demo: RejectionSampling,
}

impl RejectionBuilder {
    fn new() -> Self {
        Self {
            demo: RejectionSampling::new(),
        }
    }

    pub fn density(mut self, density: Density) -> Self {
        self.demo.density = density;
        self
    }

    pub fn samples(mut self, samples: usize) -> Self {
        self.demo.samples = samples;
        self
    }

    /// Seed for the scatter; redraws reproduce the same points.
    pub fn seed(mut self, seed: u64) -> Self {
        self.demo.seed = seed;
        self
    }

    pub fn hit_color(mut self, c: Color) -> Self {
        self.demo.hit_color = c;
        self
    }

    pub fn miss_color(mut self, c: Color) -> Self {
        self.demo.miss_color = c;
        self
    }

    pub fn curve_color(mut self, c: Color) -> Self {
        self.demo.curve_color = c;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.demo.meta.caption = Some(caption.into());
        self
    }
}

/* -------------------- BAND GRAPH BUILDER -------------------- */

pub struct BandGraphBuilder {
    graph: BandGraph,
}

impl BandGraphBuilder {
    fn new() -> Self {
        Self {
            graph: BandGraph::new(),
        }
    }

    pub fn density(mut self, density: Density) -> Self {
        self.graph.density = density;
        self
    }

    pub fn samples(mut self, samples: usize) -> Self {
        self.graph.samples = samples.max(2);
        self
    }

    /// Which band to highlight; the fill spans samples `band` and `band + 1`.
    pub fn band(mut self, band: usize) -> Self {
        self.graph.band = band;
        self
    }

    pub fn band_color(mut self, c: Color) -> Self {
        self.graph.band_color = c;
        self
    }

    pub fn guide_color(mut self, c: Color) -> Self {
        self.graph.guide_color = c;
        self
    }

    pub fn curve_color(mut self, c: Color) -> Self {
        self.graph.curve_color = c;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.graph.meta.caption = Some(caption.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn builder_composes_demos_in_order() {
        let built = article()
            .background_color(Color::rgb(0x26, 0x24, 0x21))
            .add_rejection(|r| r.samples(500))
            .add_stack_bars(|b| b.bar_count(21).sample_y(0.6).caption("stacking the slices"))
            .add_band_graph(|g| g.samples(20).band(15))
            .add_band_graph(|g| {
                g.density(Density::LogRamp {
                    steepness: 10.0,
                    vscale: 0.4,
                })
                .band(10)
            })
            .build();

        assert_eq!(built.demos.len(), 4);
        assert!(matches!(built.demos[0], Demo::Rejection(_)));
        assert!(matches!(built.demos[1], Demo::StackBars(_)));
        assert!(matches!(built.demos[2], Demo::BandGraph(_)));

        let Demo::StackBars(bars) = &built.demos[1] else {
            unreachable!()
        };
        assert_eq!(bars.meta.caption.as_deref(), Some("stacking the slices"));
        assert!(approx_eq(bars.sample_y, 0.6));
    }

    #[test]
    fn demo_ids_are_unique() {
        let built = article()
            .add_stack_bars(|b| b)
            .add_stack_bars(|b| b)
            .add_rejection(|r| r)
            .build();

        let ids: Vec<_> = built.demos.iter().map(|d| d.id()).collect();
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
    }

    #[test]
    fn sample_y_is_quantized_by_the_builder() {
        let built = article().add_stack_bars(|b| b.sample_y(0.73449)).build();
        let Demo::StackBars(bars) = &built.demos[0] else {
            unreachable!()
        };
        assert!(approx_eq(bars.sample_y, 0.734));
    }
}
