//! Capability traits for anything the inspector can summarize as an array or tensor.
//!
//! [`DenseND`] and [`Tensor`] implement them; foreign array types (for example a
//! wrapper around another tensor library) can implement them too and will then be
//! summarized exactly like the built-in containers.

use crate::dense::DenseND;
use crate::dtype::Element;
use crate::print_options::PrintOptions;
use crate::tensor::Tensor;
use std::fmt;

/// A numeric array the inspector can summarize.
pub trait NumericArray: fmt::Debug + Send + Sync {
    /// Extent of each axis.
    fn dims(&self) -> Vec<usize>;

    /// dtype name, e.g. `float32`.
    fn dtype_name(&self) -> String;

    /// Total number of elements.
    fn element_count(&self) -> usize {
        self.dims().iter().product()
    }

    /// All elements converted to `f64`, row-major.
    fn flat_values(&self) -> Vec<f64>;

    /// Full textual rendering under `options`.
    fn render(&self, options: &PrintOptions) -> String;
}

/// A numeric array that lives on a device.
pub trait NumericTensor: NumericArray {
    /// Device identifier, e.g. `cpu` or `cuda:0`.
    fn device_name(&self) -> String;
}

impl<T: Element> NumericArray for DenseND<T> {
    fn dims(&self) -> Vec<usize> {
        self.shape().to_vec()
    }

    fn dtype_name(&self) -> String {
        self.dtype().name().to_string()
    }

    fn element_count(&self) -> usize {
        self.len()
    }

    fn flat_values(&self) -> Vec<f64> {
        self.to_f64_vec()
    }

    fn render(&self, options: &PrintOptions) -> String {
        DenseND::render(self, options)
    }
}

impl<T: Element> NumericArray for Tensor<T> {
    fn dims(&self) -> Vec<usize> {
        self.dense().shape().to_vec()
    }

    fn dtype_name(&self) -> String {
        self.dtype().name().to_string()
    }

    fn element_count(&self) -> usize {
        self.numel()
    }

    fn flat_values(&self) -> Vec<f64> {
        self.dense().to_f64_vec()
    }

    fn render(&self, options: &PrintOptions) -> String {
        Tensor::render(self, options)
    }
}

impl<T: Element> NumericTensor for Tensor<T> {
    fn device_name(&self) -> String {
        self.device().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::Device;

    #[test]
    fn test_dense_as_trait_object() {
        let array = DenseND::from_vec(vec![1i32, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        let erased: &dyn NumericArray = &array;
        assert_eq!(erased.dims(), vec![2, 3]);
        assert_eq!(erased.dtype_name(), "int32");
        assert_eq!(erased.element_count(), 6);
        assert_eq!(erased.flat_values()[5], 6.0);
    }

    #[test]
    fn test_tensor_as_trait_object() {
        let tensor = Tensor::from_vec(vec![1.0f32; 4], &[4]).unwrap().to(Device::Mps);
        let erased: &dyn NumericTensor = &tensor;
        assert_eq!(erased.device_name(), "mps");
        assert_eq!(erased.dtype_name(), "float32");
        assert!(erased.render(&PrintOptions::default()).starts_with("tensor(["));
    }
}
