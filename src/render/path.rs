use crate::vector::Vector;

/// Sample `f` into a polyline of `samples + 1` points over `[min, max]`.
/// Both endpoints are hit exactly so curves meet the plot edges.
pub fn function_path(f: impl Fn(f64) -> f64, samples: usize, min: f64, max: f64) -> Vec<Vector> {
    let span = max - min;
    (0..=samples)
        .map(|i| {
            let x = if i == samples {
                max
            } else {
                min + span * (i as f64 / samples as f64)
            };
            Vector::new(x, f(x))
        })
        .collect()
}

/// Polyline from a flat `[x0, y0, x1, y1, ..]` list, in argument order.
/// A trailing odd coordinate is ignored.
pub fn make_path(coords: &[f64]) -> Vec<Vector> {
    coords
        .chunks_exact(2)
        .map(|pair| Vector::new(pair[0], pair[1]))
        .collect()
}

/// Single two-point segment.
pub fn line_path(x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<Vector> {
    vec![Vector::new(x1, y1), Vector::new(x2, y2)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn endpoints_are_exact() {
        let path = function_path(|x| x, 7, 0.1, 0.9);
        assert_eq!(path.len(), 8);
        assert_eq!(path[0].x, 0.1);
        assert_eq!(path[7].x, 0.9);
    }

    #[test]
    fn points_follow_the_function() {
        let path = function_path(|x| x * x, 4, 0.0, 1.0);
        for p in &path {
            assert!(approx_eq(p.y, p.x * p.x));
        }
        assert!(approx_eq(path[2].x, 0.5));
    }

    #[test]
    fn spacing_is_even() {
        let path = function_path(|_| 0.0, 10, 0.0, 1.0);
        for pair in path.windows(2) {
            assert!(approx_eq(pair[1].x - pair[0].x, 0.1));
        }
    }

    #[test]
    fn make_path_pairs_in_argument_order() {
        let path = make_path(&[0.2, 0.0, 0.2, 0.8, 0.0, 0.8]);
        assert_eq!(
            path,
            vec![
                Vector::new(0.2, 0.0),
                Vector::new(0.2, 0.8),
                Vector::new(0.0, 0.8),
            ]
        );
        // trailing odd coordinate is dropped
        assert_eq!(make_path(&[1.0, 2.0, 3.0]).len(), 1);
    }

    #[test]
    fn line_path_is_one_segment() {
        let path = line_path(0.0, 0.6, 1.0, 0.6);
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], Vector::new(0.0, 0.6));
        assert_eq!(path[1], Vector::new(1.0, 0.6));
    }
}
