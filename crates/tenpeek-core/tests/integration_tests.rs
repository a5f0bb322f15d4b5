//! Integration tests for tenpeek-core
//!
//! These tests exercise the public surface the inspector builds on.

use tenpeek_core::{
    reductions, DType, DenseND, Device, DisplayOverrides, NumericArray, NumericTensor,
    PrintOptions, Tensor,
};

#[test]
fn test_float_array_statistics_end_to_end() {
    let array = DenseND::from_vec(vec![1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0], &[2, 3]).unwrap();

    assert_eq!(array.dtype(), DType::Float64);
    assert!(array.has_nan());
    assert_eq!(array.nan_min(), 1.0);
    assert_eq!(array.nan_max(), 6.0);
    assert_eq!(array.nan_mean(), 3.6);
}

#[test]
fn test_tensor_keeps_nan_in_flat_values() {
    let tensor = Tensor::from_vec(vec![f32::NAN, 1.0, 2.0, f32::INFINITY], &[2, 2])
        .unwrap()
        .to(Device::Cuda(0));

    let values = tensor.flat_values();
    assert!(reductions::has_nan(&values));
    assert_eq!(reductions::nan_max(&values), f64::INFINITY);

    let (std, mean) = reductions::finite_std_mean(&values);
    assert_eq!(mean, 1.5);
    assert!((std - 0.5_f64.sqrt()).abs() < 1e-12);
    assert_eq!(tensor.device_name(), "cuda:0");
}

#[test]
fn test_overrides_drive_rendering() {
    let mut options = PrintOptions::default();
    options.apply(&DisplayOverrides::new().precision(1).threshold(100));

    let array = DenseND::from_vec(vec![0.24, 1.76], &[2]).unwrap();
    assert_eq!(array.render(&options), "[0.2 1.8]");

    let tensor = Tensor::new(array);
    assert_eq!(tensor.render(&options), "tensor([0.2, 1.8])");
}

#[test]
fn test_custom_numeric_array() {
    #[derive(Debug)]
    struct Ramp(usize);

    impl NumericArray for Ramp {
        fn dims(&self) -> Vec<usize> {
            vec![self.0]
        }

        fn dtype_name(&self) -> String {
            "float16".to_string()
        }

        fn flat_values(&self) -> Vec<f64> {
            (0..self.0).map(|i| i as f64).collect()
        }

        fn render(&self, _options: &PrintOptions) -> String {
            format!("Ramp({})", self.0)
        }
    }

    let ramp = Ramp(5);
    assert_eq!(ramp.element_count(), 5);
    assert_eq!(reductions::nan_mean(&ramp.flat_values()), 2.0);
}
