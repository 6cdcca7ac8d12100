//! Uniform parameter sampling and coordinate-series utilities.

use crate::Point2;

/// `n` evenly spaced values over `[start, stop]`, inclusive of both ends.
///
/// `n == 1` yields `[start]`, `n == 0` an empty vector.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // exact endpoint
            values[n - 1] = stop;
            values
        }
    }
}

/// Split a point series into parallel x/y coordinate arrays.
pub fn split_xy(points: &[Point2]) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::with_capacity(points.len());
    let mut ys = Vec::with_capacity(points.len());
    for p in points {
        xs.push(p.x);
        ys.push(p.y);
    }
    (xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints_and_count() {
        let values = linspace(0.0, 10.0, 5);
        assert_eq!(values, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn test_linspace_endpoint_is_exact() {
        let values = linspace(0.0, std::f64::consts::TAU, 7);
        assert_eq!(*values.last().unwrap(), std::f64::consts::TAU);
        assert_eq!(values.len(), 7);
    }

    #[test]
    fn test_linspace_uniform_spacing() {
        let values = linspace(-1.0, 1.0, 101);
        for w in values.windows(2) {
            assert_relative_eq!(w[1] - w[0], 0.02, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 1.0, 1), vec![3.0]);
    }

    #[test]
    fn test_split_xy() {
        let points = vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
        let (xs, ys) = split_xy(&points);
        assert_eq!(xs, vec![1.0, 3.0]);
        assert_eq!(ys, vec![2.0, 4.0]);
    }
}
