//! Tensors: dense storage plus the device it lives on.
//!
//! # Examples
//!
//! ```
//! use tenpeek_core::{DenseND, Device, Tensor};
//!
//! let dense = DenseND::<f32>::ones(&[2, 3]);
//! let tensor = Tensor::new(dense).to(Device::Cuda(1));
//!
//! assert_eq!(tensor.shape().as_slice(), &[2, 3]);
//! assert_eq!(tensor.device().to_string(), "cuda:1");
//! ```

use crate::dense::{render_nested, DenseND, Layout};
use crate::dtype::{DType, Element};
use crate::print_options::PrintOptions;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for tensors with up to 6 dimensions (covers most use cases).
pub type Shape = SmallVec<[usize; 6]>;

/// Where a tensor's storage lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Device {
    /// Host memory
    #[default]
    Cpu,
    /// CUDA device with ordinal
    Cuda(usize),
    /// Apple Metal
    Mps,
    /// Any other backend, identified by name
    Other(String),
}

impl Device {
    pub fn is_cpu(&self) -> bool {
        matches!(self, Device::Cpu)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => f.write_str("cpu"),
            Device::Cuda(ordinal) => write!(f, "cuda:{}", ordinal),
            Device::Mps => f.write_str("mps"),
            Device::Other(name) => f.write_str(name),
        }
    }
}

impl FromStr for Device {
    type Err = std::convert::Infallible;

    /// Parse `cpu`, `cuda`, `cuda:N`, `mps`; anything else becomes [`Device::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let device = match s {
            "cpu" => Device::Cpu,
            "cuda" => Device::Cuda(0),
            "mps" => Device::Mps,
            other => match other.strip_prefix("cuda:").map(str::parse::<usize>) {
                Some(Ok(ordinal)) => Device::Cuda(ordinal),
                _ => Device::Other(other.to_string()),
            },
        };
        Ok(device)
    }
}

/// A dense array tagged with the device holding it.
///
/// The device is metadata only; storage is always host memory here.
#[derive(Clone)]
pub struct Tensor<T> {
    data: DenseND<T>,
    device: Device,
}

impl<T: Element> Tensor<T> {
    /// Wrap a dense array as a CPU tensor.
    pub fn new(data: DenseND<T>) -> Self {
        Self {
            data,
            device: Device::Cpu,
        }
    }

    /// Create a CPU tensor from row-major data.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1i64, 2, 3, 4, 5, 6], &[3, 2]).unwrap();
    /// assert_eq!(tensor.numel(), 6);
    /// assert!(Tensor::from_vec(vec![1i64, 2], &[3]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        Ok(Self::new(DenseND::from_vec(vec, shape)?))
    }

    /// Move the tensor to `device`.
    pub fn to(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn dense(&self) -> &DenseND<T> {
        &self.data
    }

    pub fn into_dense(self) -> DenseND<T> {
        self.data
    }

    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Get the shape of this tensor.
    pub fn shape(&self) -> Shape {
        self.data.shape().iter().copied().collect()
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Render the tensor torch style.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::{PrintOptions, Tensor};
    ///
    /// let tensor = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
    /// assert_eq!(
    ///     tensor.render(&PrintOptions::default()),
    ///     "tensor([[1, 2],\n        [3, 4]])"
    /// );
    /// ```
    pub fn render(&self, options: &PrintOptions) -> String {
        const PREFIX: &str = "tensor(";
        let body = render_nested(
            self.data.shape(),
            &self.data.cells(options),
            options,
            Layout::TORCH,
            PREFIX.len(),
        );
        if self.device.is_cpu() {
            format!("{}{})", PREFIX, body)
        } else {
            format!("{}{}, device='{}')", PREFIX, body, self.device)
        }
    }
}

impl<T: Element> From<DenseND<T>> for Tensor<T> {
    fn from(data: DenseND<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.data.shape())
            .field("dtype", &self.dtype())
            .field("device", &self.device)
            .finish()
    }
}

impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&PrintOptions::default()))
    }
}
