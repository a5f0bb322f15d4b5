//! Reductions over flattened `f64` values.
//!
//! Two families are provided:
//!
//! - **NaN-aware** (`nan_*`): NaN elements are ignored, infinities participate.
//!   These mirror numpy's `nanmin`/`nanmax`/`nanmean`/`nanstd` (population std).
//! - **Finite-only** ([`finite_std_mean`]): NaN and ±inf are both dropped and the
//!   unbiased (n − 1) estimator is used, mirroring a tensor library's `std_mean`
//!   applied to the finite elements.
//!
//! Reductions over an empty selection return `NaN` rather than failing.

/// Minimum, propagating NaN if any element is NaN.
///
/// # Examples
///
/// ```
/// use tenpeek_core::reductions::min;
///
/// assert_eq!(min(&[3.0, 1.0, 2.0]), 1.0);
/// assert!(min(&[3.0, f64::NAN]).is_nan());
/// assert!(min(&[]).is_nan());
/// ```
pub fn min(values: &[f64]) -> f64 {
    propagate(values, f64::min)
}

/// Maximum, propagating NaN if any element is NaN.
pub fn max(values: &[f64]) -> f64 {
    propagate(values, f64::max)
}

fn propagate(values: &[f64], pick: fn(f64, f64) -> f64) -> f64 {
    match values.first() {
        Some(&first) if !has_nan(values) => values.iter().copied().fold(first, pick),
        _ => f64::NAN,
    }
}

/// Minimum ignoring NaN; NaN when every element is NaN.
///
/// # Examples
///
/// ```
/// use tenpeek_core::reductions::nan_min;
///
/// assert_eq!(nan_min(&[f64::NAN, 4.0, -2.0]), -2.0);
/// assert_eq!(nan_min(&[f64::NEG_INFINITY, 0.0]), f64::NEG_INFINITY);
/// assert!(nan_min(&[f64::NAN]).is_nan());
/// ```
pub fn nan_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NAN, f64::min)
}

/// Maximum ignoring NaN; NaN when every element is NaN.
pub fn nan_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NAN, f64::max)
}

/// Mean ignoring NaN.
///
/// # Examples
///
/// ```
/// use tenpeek_core::reductions::nan_mean;
///
/// assert_eq!(nan_mean(&[1.0, f64::NAN, 3.0]), 2.0);
/// ```
pub fn nan_mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|x| !x.is_nan())
        .fold((0.0, 0usize), |(sum, count), x| (sum + x, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Population standard deviation ignoring NaN.
///
/// # Examples
///
/// ```
/// use tenpeek_core::reductions::nan_std;
///
/// let std = nan_std(&[1.0, 2.0, 3.0, 4.0, 5.0, f64::NAN]);
/// assert!((std - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn nan_std(values: &[f64]) -> f64 {
    let mean = nan_mean(values);
    if mean.is_nan() {
        return f64::NAN;
    }
    let (squared, count) = values
        .iter()
        .filter(|x| !x.is_nan())
        .fold((0.0, 0usize), |(acc, count), x| {
            let diff = x - mean;
            (acc + diff * diff, count + 1)
        });
    (squared / count as f64).sqrt()
}

/// Standard deviation and mean over finite elements, unbiased estimator.
///
/// Returns `(std, mean)`. With fewer than two finite elements the standard
/// deviation is NaN; with none, both are.
///
/// # Examples
///
/// ```
/// use tenpeek_core::reductions::finite_std_mean;
///
/// let (std, mean) = finite_std_mean(&[1.0, 2.0, 3.0, f64::INFINITY, f64::NAN]);
/// assert_eq!(mean, 2.0);
/// assert_eq!(std, 1.0);
/// ```
pub fn finite_std_mean(values: &[f64]) -> (f64, f64) {
    let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let n = finite.len() as f64;
    let mean = finite.iter().sum::<f64>() / n;
    if finite.len() < 2 {
        return (f64::NAN, mean);
    }
    let squared: f64 = finite.iter().map(|x| (x - mean) * (x - mean)).sum();
    ((squared / (n - 1.0)).sqrt(), mean)
}

/// True if any element is NaN.
pub fn has_nan(values: &[f64]) -> bool {
    values.iter().any(|x| x.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_propagating_extrema() {
        assert_eq!(max(&[1.0, 5.0, -3.0]), 5.0);
        assert_eq!(min(&[1.0, 5.0, -3.0]), -3.0);
        assert!(max(&[1.0, f64::NAN, 7.0]).is_nan());
        assert!(max(&[f64::NAN]).is_nan());
    }

    #[test]
    fn test_nan_aware_extrema_keep_infinities() {
        let values = [f64::NAN, 1.0, f64::INFINITY, -2.0];
        assert_eq!(nan_min(&values), -2.0);
        assert_eq!(nan_max(&values), f64::INFINITY);
        assert!(nan_max(&[]).is_nan());
    }

    #[test]
    fn test_nan_mean_and_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0, f64::NAN];
        assert_eq!(nan_mean(&values), 5.0);
        assert_eq!(nan_std(&values), 2.0);
        assert!(nan_mean(&[f64::NAN, f64::NAN]).is_nan());
        assert!(nan_std(&[]).is_nan());
    }

    #[test]
    fn test_nan_mean_with_infinity_is_infinite() {
        assert_eq!(nan_mean(&[1.0, f64::INFINITY]), f64::INFINITY);
        assert!(nan_std(&[1.0, f64::INFINITY]).is_nan());
    }

    #[test]
    fn test_finite_std_mean() {
        let (std, mean) = finite_std_mean(&[2.0, 4.0, 6.0, f64::NEG_INFINITY]);
        assert_eq!(mean, 4.0);
        assert_eq!(std, 2.0);

        let (std, mean) = finite_std_mean(&[3.0]);
        assert_eq!(mean, 3.0);
        assert!(std.is_nan());

        let (std, mean) = finite_std_mean(&[f64::NAN, f64::INFINITY]);
        assert!(std.is_nan());
        assert!(mean.is_nan());
    }

    #[test]
    fn test_has_nan() {
        assert!(has_nan(&[1.0, f64::NAN]));
        assert!(!has_nan(&[1.0, f64::INFINITY]));
        assert!(!has_nan(&[]));
    }
}
