use serde::{Deserialize, Serialize};

/// Ordinary least-squares line `y ≈ slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination. `None` when every `y` is identical.
    pub r_squared: Option<f64>,
    pub n_points: usize,
}

impl LinearFit {
    /// Value of the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a straight line through `(x, y)` pairs by ordinary least squares.
///
/// Uses the centred closed form `slope = Sxy / Sxx`, which stays accurate for
/// day offsets in the thousands. Returns `None` when fewer than two points are
/// given, when the slices differ in length, or when `x` has zero variance.
pub fn fit_line(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    let n = x.len();
    if n < 2 || n != y.len() {
        return None;
    }

    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    // Repeated x values are fine; all-identical x is not.
    if sxx.is_nan() || sxx <= 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    if !slope.is_finite() {
        return None;
    }
    let intercept = mean_y - slope * mean_x;

    let r_squared = if syy > 0.0 {
        let ss_res: f64 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| {
                let residual = yi - (slope * xi + intercept);
                residual * residual
            })
            .sum();
        Some(1.0 - ss_res / syy)
    } else {
        None
    };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
        n_points: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() {
        let fit = fit_line(&[0.0, 10.0, 20.0], &[100.0, 110.0, 120.0]).unwrap();

        assert!((fit.slope - 1.0).abs() < 1e-12);
        assert!((fit.intercept - 100.0).abs() < 1e-9);
        assert!((fit.r_squared.unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(fit.n_points, 3);
        assert!((fit.predict(30.0) - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_noisy_points_smoothed() {
        // Endpoints alone would give (121 - 99) / 20 = 1.1
        let fit = fit_line(&[0.0, 10.0, 20.0], &[99.0, 112.0, 121.0]).unwrap();
        assert!((fit.slope - 1.1).abs() < 1e-12);

        let fit = fit_line(&[0.0, 5.0, 10.0, 15.0], &[100.0, 106.0, 109.0, 115.0]).unwrap();
        assert!((fit.slope - 0.96).abs() < 1e-12);
        assert!(fit.r_squared.unwrap() < 1.0);
    }

    #[test]
    fn test_repeated_x_values() {
        let fit = fit_line(&[0.0, 0.0, 10.0, 10.0], &[98.0, 102.0, 108.0, 112.0]).unwrap();
        assert!((fit.slope - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_x_variance() {
        assert!(fit_line(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_flat_y_has_no_r_squared() {
        let fit = fit_line(&[0.0, 1.0, 2.0], &[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r_squared, None);
    }

    #[test]
    fn test_insufficient_or_mismatched() {
        assert!(fit_line(&[], &[]).is_none());
        assert!(fit_line(&[1.0], &[1.0]).is_none());
        assert!(fit_line(&[1.0, 2.0], &[1.0]).is_none());
    }
}
