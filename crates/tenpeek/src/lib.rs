//! # tenpeek
//!
//! Concise debug summaries of arrays, tensors and arbitrarily nested values.
//!
//! Printing a large array while debugging floods the terminal. `tenpeek` prints
//! one line per array or tensor instead: shape, dtype, extrema, spread, the first
//! few elements and whether anything is NaN. Lists, tuples, mappings and
//! namespaces are walked recursively and every leaf is labelled with its path.
//!
//! ```text
//! state['weights']: array(shape=(64, 32), dtype=float32, min=-0.2499, max=0.25, std=0.1443, mean=0.001, data=[0.1, -0.2, 0.03, 0.2, ... ])
//! state['config'].lr: 0.001
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tenpeek::{BufferSink, Inspector, Namespace, Value};
//! use tenpeek_core::{DenseND, Device, Tensor};
//!
//! let buffer = BufferSink::new();
//! let mut inspector = Inspector::new().with_sink(buffer.clone());
//!
//! let logits = Tensor::from_vec(vec![0.5f32, -1.0, 2.0, f32::NAN, 1.0, 0.0], &[2, 3])
//!     .unwrap()
//!     .to(Device::Cuda(0));
//! let step = Namespace::new()
//!     .with("epoch", 3)
//!     .with("logits", logits)
//!     .with("labels", DenseND::from_vec(vec![1i64, 0], &[2]).unwrap());
//! inspector.inspect(&Value::from(step), "step");
//!
//! assert_eq!(
//!     buffer.lines(),
//!     vec![
//!         "step.epoch: 3",
//!         "step.logits: tensor(shape=(2, 3), dtype=float32, min=-1, max=2, std=1.118, mean=0.5, \
//!          data=[0.5, -1, 2, nan, ... ], hasnan=True, device=\"cuda:0\")",
//!         "step.labels: [1 0]",
//!     ]
//! );
//! ```
//!
//! ## Process-wide session
//!
//! The free functions and the [`inspect!`] macro share one session guarded by a
//! mutex. Its print options are configured lazily on first use (defaults plus
//! the `TENPEEK_*` environment variables) and every explicit override persists.
//!
//! ```no_run
//! use tenpeek::inspect;
//!
//! let losses = vec![0.93, 0.71, 0.52, 0.44, 0.40, 0.38];
//! inspect!(losses);            // losses: list(shape=(6,), dtype=float64, ...)
//! inspect!(losses, "history"); // history: list(shape=(6,), ...)
//! ```
//!
//! ## Progress bars
//!
//! [`ProgressSink`] and [`MultiProgressSink`] suspend `indicatif` bars while a
//! line is written.
//!
//! ## Features
//!
//! - `subscriber` (default): [`tracing_support::init_tracing`] installs a
//!   `tracing-subscriber` for the crate's log events
//! - `serde`: serde support for the core option and dtype types

pub mod format;
pub mod global;
pub mod inspector;
pub mod sink;
pub mod summary;
pub mod tracing_support;
pub mod value;


pub use format::format_size;
pub use global::{configure_numeric_display, inspect, inspect_with, print_options, set_prefix, set_sink, with_global};
pub use inspector::Inspector;
pub use sink::{BufferSink, MultiProgressSink, ProgressSink, Sink, StderrSink, StdoutSink, WriterSink};
pub use summary::{summarize_array, summarize_tensor, Summary};
pub use value::{Key, Mapping, Namespace, ToValue, Value};

pub use tenpeek_core;

/// Inspect an expression through the process-wide session.
///
/// With one argument the expression's source text becomes the label; a second
/// argument sets the label explicitly.
///
/// # Examples
///
/// ```
/// use tenpeek::{inspect, set_sink, BufferSink};
///
/// let buffer = BufferSink::new();
/// set_sink(buffer.clone());
///
/// let scores = vec![3, 1, 2];
/// inspect!(scores);
/// inspect!(scores.len(), "count");
///
/// assert_eq!(buffer.lines(), vec!["scores: [3 1 2]", "count: 3"]);
/// ```
#[macro_export]
macro_rules! inspect {
    ($value:expr $(,)?) => {
        $crate::inspect(&$crate::ToValue::to_value(&$value), stringify!($value))
    };
    ($value:expr, $label:expr $(,)?) => {
        $crate::inspect(&$crate::ToValue::to_value(&$value), $label)
    };
}

/// Short alias of [`inspect!`].
///
/// ```
/// use tenpeek::{pt, set_sink, BufferSink};
///
/// let buffer = BufferSink::new();
/// set_sink(buffer.clone());
/// let step = 12;
/// pt!(step);
/// assert_eq!(buffer.lines(), vec!["step: 12"]);
/// ```
#[macro_export]
macro_rules! pt {
    ($($args:tt)*) => {
        $crate::inspect!($($args)*)
    };
}

/// Common imports.
pub mod prelude {
    pub use crate::{
        configure_numeric_display, format_size, inspect, inspect_with, pt, BufferSink, Inspector,
        Mapping, Namespace, Sink, ToValue, Value,
    };
    pub use tenpeek_core::{DenseND, Device, DisplayOverrides, PrintOptions, Tensor};
}
