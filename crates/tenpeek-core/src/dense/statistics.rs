//! Statistical reductions on dense arrays
//!
//! All reductions convert to `f64` first and delegate to [`crate::reductions`].

use super::types::DenseND;
use crate::dtype::Element;
use crate::reductions;

impl<T: Element> DenseND<T> {
    /// True if any element is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::DenseND;
    ///
    /// let array = DenseND::from_vec(vec![1.0, f64::NAN], &[2]).unwrap();
    /// assert!(array.has_nan());
    /// assert!(!DenseND::from_vec(vec![1i32, 2], &[2]).unwrap().has_nan());
    /// ```
    pub fn has_nan(&self) -> bool {
        self.iter().any(|x| x.to_f64().is_nan())
    }

    /// Minimum ignoring NaN.
    ///
    /// # Complexity
    ///
    /// O(n) where n is the number of elements
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::DenseND;
    ///
    /// let array = DenseND::from_vec(vec![3.0, f64::NAN, 1.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(array.nan_min(), 1.0);
    /// ```
    pub fn nan_min(&self) -> f64 {
        reductions::nan_min(&self.to_f64_vec())
    }

    /// Maximum ignoring NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::DenseND;
    ///
    /// let array = DenseND::from_vec(vec![3.0, f64::NAN, 1.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(array.nan_max(), 4.0);
    /// ```
    pub fn nan_max(&self) -> f64 {
        reductions::nan_max(&self.to_f64_vec())
    }

    /// Mean ignoring NaN.
    pub fn nan_mean(&self) -> f64 {
        reductions::nan_mean(&self.to_f64_vec())
    }

    /// Population standard deviation ignoring NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::DenseND;
    ///
    /// let array = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0], &[5]).unwrap();
    /// assert!((array.nan_std() - 2.0_f64.sqrt()).abs() < 1e-10);
    /// ```
    pub fn nan_std(&self) -> f64 {
        reductions::nan_std(&self.to_f64_vec())
    }

    /// Standard deviation and mean over the finite elements (unbiased).
    pub fn finite_std_mean(&self) -> (f64, f64) {
        reductions::finite_std_mean(&self.to_f64_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::DenseND;

    #[test]
    fn test_integer_statistics() {
        let array = DenseND::from_vec(vec![4i64, -2, 9, 1], &[2, 2]).unwrap();
        assert_eq!(array.nan_min(), -2.0);
        assert_eq!(array.nan_max(), 9.0);
        assert_eq!(array.nan_mean(), 3.0);
        assert!(!array.has_nan());
    }

    #[test]
    fn test_all_nan_gives_nan() {
        let array = DenseND::from_elem(&[3], f32::NAN);
        assert!(array.nan_min().is_nan());
        assert!(array.nan_max().is_nan());
        assert!(array.nan_mean().is_nan());
        assert!(array.nan_std().is_nan());
    }

    #[test]
    fn test_finite_std_mean_skips_infinities() {
        let array = DenseND::from_vec(vec![1.0, 3.0, f64::INFINITY, f64::NAN], &[4]).unwrap();
        let (std, mean) = array.finite_std_mean();
        assert_eq!(mean, 2.0);
        assert!((std - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
