//! Small numeric helpers over plain `f64` slices.

/// Linear-interpolated quantile of an ascending, non-empty slice.
///
/// `q` is clamped to `[0, 1]`. Returns NaN for an empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Pearson correlation coefficient of two equally long series.
///
/// Returns NaN when any entry is missing, when fewer than two observations exist,
/// or when either series has zero variance. The result is clamped to `[-1, 1]`.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return f64::NAN;
    }
    let pairs: Option<Vec<(f64, f64)>> = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    let Some(pairs) = pairs else {
        return f64::NAN;
    };

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}

/// Whether the series has at least two complete observations and non-zero variance.
pub fn has_variance(values: &[Option<f64>]) -> bool {
    let mut present = values.iter().flatten();
    match present.next() {
        Some(first) => present.any(|v| v != first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_quantiles_interpolate() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
        assert_eq!(quantile_sorted(&sorted, 0.5), 2.5);
        assert_eq!(quantile_sorted(&sorted, 0.25), 1.75);
        assert_eq!(quantile_sorted(&[7.0], 0.75), 7.0);
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let xs = some(&[1.0, 2.0, 3.0, 4.0]);
        let ys = some(&[2.0, 4.0, 6.0, 8.0]);
        let inverse = some(&[8.0, 6.0, 4.0, 2.0]);
        assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-12);
        assert!((pearson(&xs, &inverse) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_degenerate_inputs() {
        assert!(pearson(&some(&[1.0]), &some(&[2.0])).is_nan());
        assert!(pearson(&some(&[1.0, 1.0, 1.0]), &some(&[1.0, 2.0, 3.0])).is_nan());
        assert!(pearson(&[Some(1.0), None, Some(3.0)], &some(&[1.0, 2.0, 3.0])).is_nan());
    }

    #[test]
    fn test_has_variance() {
        assert!(has_variance(&some(&[1.0, 2.0])));
        assert!(!has_variance(&some(&[3.0, 3.0])));
        assert!(!has_variance(&[None, None]));
    }
}
