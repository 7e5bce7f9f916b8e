use itsample::prelude::*;

fn main() {
    article()
        .background_color(Color::rgb(0x26, 0x24, 0x21))
        // Figure 1: why naive rejection sampling wastes samples
        .add_rejection(|r| {
            r.density(Density::Gaussian {
                mean: 0.5,
                std_dev: 0.25,
                vscale: 0.5,
            })
            .samples(500)
            .seed(7)
            .caption("Uniform samples: kept under the curve, rejected above it")
        })
        // Figure 2: the bar-stacking view of the CDF
        .add_stack_bars(|b| {
            b.density(Density::gaussian(0.5, 0.25))
                .bar_count(21)
                .sample_y(0.6)
                .caption("Density slices stack into the CDF; drag the line")
        })
        // Figures 3 and 4: band densities for two transforms
        .add_band_graph(|g| {
            g.density(Density::Quadratic)
                .samples(20)
                .band(15)
                .caption("f(x) = x^2: equal dw, growing dh")
        })
        .add_band_graph(|g| {
            g.density(Density::LogRamp {
                steepness: 10.0,
                vscale: 0.4,
            })
            .samples(20)
            .band(10)
            .caption("f(x) = 0.4 ln(10x + 1): the bands flatten out")
        })
        .run_local();
}
