use itsample::prelude::*;

fn main() {
    article()
        .add_stack_bars(|b| {
            b.density(Density::gaussian(0.4, 0.2))
                .bar_count(31)
                .sample_y(0.5)
                .bar_color(Color::hsl(0.55, 0.35, 0.75))
                .selected_color(Color::hsl(0.11, 0.06, 0.24))
                .caption("Drag the sample line; space pauses the cycle")
        })
        .run_local();
}
