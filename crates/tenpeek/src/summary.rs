//! Statistical one-line summaries of arrays and tensors.
//!
//! A summary is only produced when a value holds more elements than the
//! threshold; smaller values are printed in full by the caller.
//!
//! Arrays and tensors reduce NaN differently:
//!
//! | statistic | array                 | float tensor                    |
//! |-----------|-----------------------|---------------------------------|
//! | min/max   | ignore NaN            | ignore NaN                      |
//! | mean      | ignore NaN            | finite elements only            |
//! | std       | ignore NaN, n         | finite elements only, n − 1     |

use crate::format::{format_g, format_shape, strip_dtype_prefix};
use std::fmt;
use tenpeek_core::reductions;
use tenpeek_core::{NumericArray, NumericTensor};

/// Significant digits of every number in a summary.
pub const SIGNIFICANT_DIGITS: usize = 4;

/// The statistics printed for one array or tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Leading word: `array`, `tensor`, `list` or `tuple`
    pub kind: String,
    pub shape: Vec<usize>,
    pub dtype: String,
    pub min: f64,
    pub max: f64,
    /// `(std, mean)`, only for floating point dtypes
    pub std_mean: Option<(f64, f64)>,
    /// First `threshold` flattened elements
    pub sample: Vec<f64>,
    pub has_nan: bool,
    /// Device identifier, only for tensors
    pub device: Option<String>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = |x: f64| format_g(x, SIGNIFICANT_DIGITS);

        write!(
            f,
            "{}(shape={}, dtype={}, min={}, max={}",
            self.kind,
            format_shape(&self.shape),
            self.dtype,
            g(self.min),
            g(self.max)
        )?;
        if let Some((std, mean)) = self.std_mean {
            write!(f, ", std={}, mean={}", g(std), g(mean))?;
        }

        let sample: Vec<String> = self.sample.iter().map(|&x| g(x)).collect();
        write!(f, ", data=[{}, ... ]", sample.join(", "))?;

        if self.has_nan {
            f.write_str(", hasnan=True")?;
        }
        if let Some(device) = &self.device {
            write!(f, ", device=\"{}\"", device)?;
        }
        f.write_str(")")
    }
}

fn is_float_dtype(dtype: &str) -> bool {
    dtype.contains("float")
}

/// Summarize an array, or `None` if it has at most `threshold` elements.
///
/// # Examples
///
/// ```
/// use tenpeek::summary::summarize_array;
/// use tenpeek_core::DenseND;
///
/// let array = DenseND::from_vec(vec![1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
/// let summary = summarize_array(&array, "array", 4).unwrap();
/// assert_eq!(
///     summary.to_string(),
///     "array(shape=(2, 3), dtype=float64, min=1, max=6, std=1.855, mean=3.6, \
///      data=[1, 2, nan, 4, ... ], hasnan=True)"
/// );
///
/// assert!(summarize_array(&array, "array", 6).is_none());
/// ```
pub fn summarize_array(array: &dyn NumericArray, kind: &str, threshold: usize) -> Option<Summary> {
    if array.element_count() <= threshold {
        return None;
    }

    let values = array.flat_values();
    let dtype = array.dtype_name();
    let std_mean = is_float_dtype(&dtype)
        .then(|| (reductions::nan_std(&values), reductions::nan_mean(&values)));

    Some(Summary {
        kind: kind.to_string(),
        shape: array.dims(),
        min: reductions::nan_min(&values),
        max: reductions::nan_max(&values),
        std_mean,
        sample: values.iter().copied().take(threshold).collect(),
        has_nan: reductions::has_nan(&values),
        dtype,
        device: None,
    })
}

/// Summarize a tensor, or `None` if it has at most `threshold` elements.
///
/// # Examples
///
/// ```
/// use tenpeek::summary::summarize_tensor;
/// use tenpeek_core::{Device, Tensor};
///
/// let tensor = Tensor::from_vec(vec![1i64, 5, 3, 4, 2], &[5]).unwrap().to(Device::Cuda(0));
/// assert_eq!(
///     summarize_tensor(&tensor, 4).unwrap().to_string(),
///     "tensor(shape=(5,), dtype=int64, min=1, max=5, data=[1, 5, 3, 4, ... ], device=\"cuda:0\")"
/// );
/// ```
pub fn summarize_tensor(tensor: &dyn NumericTensor, threshold: usize) -> Option<Summary> {
    if tensor.element_count() <= threshold {
        return None;
    }

    let values = tensor.flat_values();
    let dtype = strip_dtype_prefix(&tensor.dtype_name()).to_string();

    let (min, max, std_mean) = if is_float_dtype(&dtype) {
        (
            reductions::nan_min(&values),
            reductions::nan_max(&values),
            Some(reductions::finite_std_mean(&values)),
        )
    } else {
        (reductions::min(&values), reductions::max(&values), None)
    };

    Some(Summary {
        kind: "tensor".to_string(),
        shape: tensor.dims(),
        min,
        max,
        std_mean,
        sample: values.iter().copied().take(threshold).collect(),
        has_nan: reductions::has_nan(&values),
        dtype,
        device: Some(tensor.device_name()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenpeek_core::{DenseND, PrintOptions, Tensor};

    #[derive(Debug)]
    struct TorchNamed(Tensor<f32>);

    impl NumericArray for TorchNamed {
        fn dims(&self) -> Vec<usize> {
            self.0.dims()
        }

        fn dtype_name(&self) -> String {
            format!("torch.{}", self.0.dtype_name())
        }

        fn flat_values(&self) -> Vec<f64> {
            self.0.flat_values()
        }

        fn render(&self, options: &PrintOptions) -> String {
            self.0.render(options)
        }
    }

    impl NumericTensor for TorchNamed {
        fn device_name(&self) -> String {
            self.0.device_name()
        }
    }

    #[test]
    fn test_integer_array_has_no_spread() {
        let array = DenseND::<i32>::arange(10);
        let summary = summarize_array(&array, "array", 4).unwrap();
        assert!(summary.std_mean.is_none());
        assert!(!summary.has_nan);
        assert_eq!(
            summary.to_string(),
            "array(shape=(10,), dtype=int32, min=0, max=9, data=[0, 1, 2, 3, ... ])"
        );
    }

    #[test]
    fn test_float_array_uses_population_std() {
        let array = DenseND::from_vec(vec![2.0f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], &[8]).unwrap();
        let summary = summarize_array(&array, "array", 4).unwrap();
        assert_eq!(summary.std_mean, Some((2.0, 5.0)));
        assert_eq!(summary.dtype, "float32");
    }

    #[test]
    fn test_threshold_boundary() {
        let array = DenseND::<f64>::zeros(&[4]);
        assert!(summarize_array(&array, "array", 4).is_none());
        assert!(summarize_array(&array, "array", 3).is_some());
    }

    #[test]
    fn test_sample_length_follows_threshold() {
        let array = DenseND::<i64>::arange(20);
        let summary = summarize_array(&array, "list", 7).unwrap();
        assert_eq!(summary.sample.len(), 7);
        assert!(summary.to_string().starts_with("list(shape=(20,)"));
    }

    #[test]
    fn test_all_nan_array_prints_nan() {
        let array = DenseND::from_elem(&[5], f64::NAN);
        let text = summarize_array(&array, "array", 4).unwrap().to_string();
        assert!(text.contains("min=nan, max=nan, std=nan, mean=nan"));
        assert!(text.ends_with(", hasnan=True)"));
    }

    #[test]
    fn test_float_tensor_statistics_split() {
        let tensor = Tensor::from_vec(
            vec![1.0f64, f64::NAN, 3.0, f64::INFINITY, 5.0, -2.0],
            &[2, 3],
        )
        .unwrap();
        let summary = summarize_tensor(&tensor, 4).unwrap();

        assert_eq!(summary.min, -2.0);
        assert_eq!(summary.max, f64::INFINITY);
        let (std, mean) = summary.std_mean.unwrap();
        assert_eq!(mean, 1.75);
        assert!((std - (26.75f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!(summary.has_nan);

        let text = summary.to_string();
        assert!(text.starts_with("tensor(shape=(2, 3), dtype=float64, min=-2, max=inf, std=2.986, mean=1.75"));
        assert!(text.ends_with("data=[1, nan, 3, inf, ... ], hasnan=True, device=\"cpu\")"));
    }

    #[test]
    fn test_tensor_dtype_prefix_is_stripped() {
        let tensor = TorchNamed(Tensor::from_vec(vec![0.5f32; 6], &[6]).unwrap());
        let summary = summarize_tensor(&tensor, 4).unwrap();
        assert_eq!(summary.dtype, "float32");
        assert_eq!(summary.std_mean, Some((0.0, 0.5)));
    }

    #[test]
    fn test_bool_tensor() {
        let tensor = Tensor::from_vec(vec![true, false, true, true, false], &[5]).unwrap();
        let text = summarize_tensor(&tensor, 2).unwrap().to_string();
        assert_eq!(
            text,
            "tensor(shape=(5,), dtype=bool, min=0, max=1, data=[1, 0, ... ], device=\"cpu\")"
        );
    }
}
