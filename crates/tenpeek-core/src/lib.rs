//! # tenpeek-core
//!
//! Numeric containers, dtypes, NaN-aware statistics and print options for tenpeek.
//!
//! This crate provides the numeric building blocks the inspector summarizes:
//!
//! - **Dense arrays** ([`DenseND`]) backed by scirs2-core's dynamic-dimension arrays
//! - **Tensors** ([`Tensor`]) which pair a dense array with a [`Device`]
//! - **Element types** ([`Element`], [`DType`]) with numpy/torch style dtype names
//! - **Reductions** ([`reductions`]) that skip NaN or non-finite values
//! - **Print options** ([`PrintOptions`], [`DisplayOverrides`]) and the plain
//!   numpy/torch-like rendering used for small values
//! - **Capability traits** ([`NumericArray`], [`NumericTensor`]) so foreign array
//!   types can be summarized as well
//!
//! ## SciRS2 Integration
//!
//! All array storage goes through `scirs2-core`; `ndarray` is never used directly.
//!
//! ## Quick Start
//!
//! ```
//! use tenpeek_core::{DenseND, PrintOptions};
//!
//! let array = DenseND::from_vec(vec![1.0, f64::NAN, 3.0], &[3]).unwrap();
//! assert_eq!(array.shape(), &[3]);
//! assert!(array.has_nan());
//! assert_eq!(array.nan_max(), 3.0);
//!
//! let text = array.render(&PrintOptions::default());
//! assert_eq!(text, "[1.00  nan 3.00]");
//! ```
//!
//! ## Tensors
//!
//! ```
//! use tenpeek_core::{Device, Tensor};
//!
//! let tensor = Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap().to(Device::Cuda(0));
//! assert_eq!(tensor.device().to_string(), "cuda:0");
//! assert_eq!(tensor.to_string(), "tensor([1.00, 2.00], device='cuda:0')");
//! ```
//!
//! ## Error Handling
//!
//! Constructors return `anyhow::Result`; configuration parsing returns [`ConfigError`].
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for dtypes, devices and print options

pub mod dense;
pub mod dtype;
pub mod error;
pub mod numeric;
pub mod print_options;
pub mod reductions;
pub mod tensor;


pub use dense::DenseND;
pub use dtype::{DType, Element};
pub use error::ConfigError;
pub use numeric::{NumericArray, NumericTensor};
pub use print_options::{DisplayOverrides, PrintOptions};
pub use tensor::{Device, Shape, Tensor};
