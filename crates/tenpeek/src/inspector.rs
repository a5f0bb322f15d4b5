//! The inspection session: print options, output sink and the recursive walk.
//!
//! An [`Inspector`] owns everything that affects output. Print options start
//! unconfigured; the first inspection (or an explicit [`Inspector::configure`])
//! applies the defaults plus any startup overrides, and later overrides persist
//! for the rest of the session.
//!
//! # Traversal
//!
//! - number sequences become one array and get one line
//! - other sequences recurse with `[i]`
//! - mappings recurse with `[repr(key)]`, minus skipped entries
//! - namespaces recurse with `.name`
//! - everything else is a terminal and gets one line
//!
//! # Examples
//!
//! ```
//! use tenpeek::{BufferSink, Inspector, Mapping, Value};
//! use tenpeek_core::DenseND;
//!
//! let buffer = BufferSink::new();
//! let mut inspector = Inspector::new().with_sink(buffer.clone());
//!
//! let batch = Mapping::new()
//!     .with("ids", vec![3, 1, 2])
//!     .with("mask", DenseND::from_elem(&[2, 4], true));
//! inspector.inspect(&Value::from(batch), "batch");
//!
//! assert_eq!(
//!     buffer.lines(),
//!     vec![
//!         "batch['ids']: [3 1 2]",
//!         "batch['mask']: array(shape=(2, 4), dtype=bool, min=1, max=1, data=[1, 1, 1, 1, ... ])",
//!     ]
//! );
//! ```

use crate::format::format_size;
use crate::sink::{Sink, StdoutSink};
use crate::summary::{summarize_array, summarize_tensor};
use crate::value::{Key, Value};
use std::fmt;
use tenpeek_core::{DenseND, DisplayOverrides, NumericArray, PrintOptions};
use tracing::{debug, trace, warn};

/// Mapping keys whose values are byte counts.
///
/// `duratioin_peak` is spelled the way existing profilers emit it.
pub const SIZE_KEYS: [&str; 2] = ["duration_change", "duratioin_peak"];

/// Mapping key reserved by interactive shells for their input history.
const SHELL_HISTORY_KEY: &str = "In";

/// A debug printing session.
pub struct Inspector {
    options: PrintOptions,
    configured: bool,
    startup: DisplayOverrides,
    prefix: String,
    sink: Box<dyn Sink>,
}

impl Inspector {
    /// Unconfigured session writing to standard output.
    pub fn new() -> Self {
        Self {
            options: PrintOptions::default(),
            configured: false,
            startup: DisplayOverrides::new(),
            prefix: String::new(),
            sink: Box::new(StdoutSink),
        }
    }

    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Text prepended to every emitted line.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replace the line prefix, returning the previous one.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> String {
        std::mem::replace(&mut self.prefix, prefix.into())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Overrides applied on top of the defaults when the session configures
    /// itself lazily.
    pub fn with_startup_overrides(mut self, overrides: DisplayOverrides) -> Self {
        self.startup = overrides;
        self
    }

    /// Replace the sink, returning the previous one.
    pub fn set_sink(&mut self, sink: Box<dyn Sink>) -> Box<dyn Sink> {
        std::mem::replace(&mut self.sink, sink)
    }

    /// Apply `overrides` to the session's print options.
    ///
    /// Unset fields keep their current value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek::Inspector;
    /// use tenpeek_core::DisplayOverrides;
    ///
    /// let mut inspector = Inspector::new();
    /// inspector.configure(&DisplayOverrides::new().threshold(10));
    /// assert!(inspector.is_configured());
    /// assert_eq!(inspector.options().threshold, 10);
    /// assert_eq!(inspector.options().precision, 2);
    /// ```
    pub fn configure(&mut self, overrides: &DisplayOverrides) {
        self.ensure_configured();
        if !overrides.is_empty() {
            self.options.apply(overrides);
            debug!(options = ?self.options, "display options updated");
        }
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Print `value` under `label`; an empty label prints the bare summary.
    pub fn inspect(&mut self, value: &Value, label: &str) {
        self.inspect_with(value, label, &DisplayOverrides::new());
    }

    /// Like [`Inspector::inspect`], applying `overrides` to the session first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek::{BufferSink, Inspector, Value};
    /// use tenpeek_core::DisplayOverrides;
    ///
    /// let buffer = BufferSink::new();
    /// let mut inspector = Inspector::new().with_sink(buffer.clone());
    /// let ramp = Value::from(vec![1, 2, 3, 4, 5, 6]);
    ///
    /// inspector.inspect_with(&ramp, "ramp", &DisplayOverrides::new().threshold(8));
    /// inspector.inspect(&ramp, "again");
    ///
    /// assert_eq!(buffer.lines(), vec!["ramp: [1 2 3 4 5 6]", "again: [1 2 3 4 5 6]"]);
    /// ```
    pub fn inspect_with(&mut self, value: &Value, label: &str, overrides: &DisplayOverrides) {
        self.configure(overrides);
        self.visit(value, label.to_string());
    }

    fn ensure_configured(&mut self) {
        if self.configured {
            return;
        }
        self.options = PrintOptions::default();
        self.options.apply(&self.startup);
        self.configured = true;
        debug!(options = ?self.options, "display options initialized");
    }

    fn visit(&mut self, value: &Value, label: String) {
        match value {
            Value::List(items) | Value::Tuple(items) if items.iter().all(Value::is_number) => {
                let array = number_sequence(items);
                let body = self.describe_array(array.as_ref(), value.type_name());
                self.emit(&label, &body);
            }
            Value::List(items) | Value::Tuple(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.visit(item, format!("{}[{}]", label, i));
                }
            }
            Value::Map(mapping) => {
                for (key, item) in mapping.iter() {
                    if let Some(reason) = skip_reason(key, item) {
                        debug!(key = %key, reason, "skipping mapping entry");
                        continue;
                    }
                    let child = format!("{}[{}]", label, key.repr());
                    if key.as_str().is_some_and(|k| SIZE_KEYS.contains(&k)) {
                        self.visit(&as_byte_size(item), child);
                    } else {
                        self.visit(item, child);
                    }
                }
            }
            Value::Namespace(ns) => {
                for (name, item) in ns.iter() {
                    self.visit(item, format!("{}.{}", label, name));
                }
            }
            Value::Array(array) => {
                let body = self.describe_array(array.as_ref(), "array");
                self.emit(&label, &body);
            }
            Value::Tensor(tensor) => {
                let body = summarize_tensor(tensor.as_ref(), self.options.threshold)
                    .map(|summary| summary.to_string())
                    .unwrap_or_else(|| tensor.render(&self.options));
                self.emit(&label, &body);
            }
            Value::Module { class_name } => {
                let body = format!("{}(...)", class_name);
                self.emit(&label, &body);
            }
            other => {
                let body = other.text(&self.options);
                self.emit(&label, &body);
            }
        }
    }

    fn describe_array(&self, array: &dyn NumericArray, kind: &str) -> String {
        summarize_array(array, kind, self.options.threshold)
            .map(|summary| summary.to_string())
            .unwrap_or_else(|| array.render(&self.options))
    }

    fn emit(&mut self, label: &str, body: &str) {
        let mut line = String::with_capacity(self.prefix.len() + label.len() + body.len() + 3);
        line.push_str(&self.prefix);
        line.push_str(label);
        if !label.is_empty() && !label.ends_with(": ") {
            line.push_str(": ");
        }
        line.push_str(body);
        line.push('\n');

        trace!(label, bytes = line.len(), "emitting line");
        if let Err(err) = self.sink.write_str(&line) {
            warn!(label, error = %err, "failed to write inspection line");
        }
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Inspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspector")
            .field("options", &self.options)
            .field("configured", &self.configured)
            .field("startup", &self.startup)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

/// Why a mapping entry is left out of the walk, if it is.
pub fn skip_reason(key: &Key, value: &Value) -> Option<&'static str> {
    if key.as_str() == Some(SHELL_HISTORY_KEY) {
        return Some("shell history");
    }
    if matches!(value, Value::Function { .. } | Value::Package { .. }) {
        return Some("function or module");
    }
    if key.as_str().is_some_and(|k| k.starts_with('_'))
        && !matches!(value, Value::Array(_) | Value::Tensor(_) | Value::Float(_))
    {
        return Some("private name");
    }
    if value.type_name().to_lowercase().contains("ipython") {
        return Some("shell object");
    }
    None
}

/// Collapse a sequence of plain numbers into one array.
///
/// The element type is the narrowest of `bool`, `int64` and `float64` that
/// holds every item.
fn number_sequence(items: &[Value]) -> Box<dyn NumericArray> {
    let all_bool = !items.is_empty() && items.iter().all(|v| matches!(v, Value::Bool(_)));
    let all_int = items.iter().all(|v| matches!(v, Value::Bool(_) | Value::Int(_)));

    if all_bool {
        let elems = items.iter().map(|v| matches!(v, Value::Bool(true))).collect();
        Box::new(DenseND::<bool>::from_elems(elems))
    } else if all_int && !items.is_empty() {
        let elems = items
            .iter()
            .map(|v| match v {
                Value::Int(i) => *i,
                Value::Bool(b) => i64::from(*b),
                _ => 0,
            })
            .collect();
        Box::new(DenseND::<i64>::from_elems(elems))
    } else {
        let elems = items
            .iter()
            .map(|v| match v {
                Value::Float(x) => *x,
                Value::Int(i) => *i as f64,
                Value::Bool(b) => f64::from(u8::from(*b)),
                _ => f64::NAN,
            })
            .collect();
        Box::new(DenseND::<f64>::from_elems(elems))
    }
}

/// Rewrite a numeric byte count as its human readable size.
fn as_byte_size(value: &Value) -> Value {
    match value {
        Value::Int(bytes) => Value::Str(format_size(*bytes)),
        Value::Float(bytes) if bytes.is_finite() => Value::Str(format_size(bytes.round() as i64)),
        Value::Bool(b) => Value::Str(format_size(i64::from(*b))),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;
    use crate::value::Namespace;

    fn buffered() -> (Inspector, BufferSink) {
        let buffer = BufferSink::new();
        (Inspector::new().with_sink(buffer.clone()), buffer)
    }

    #[test]
    fn test_lazy_configuration() {
        let (mut inspector, _) = buffered();
        assert!(!inspector.is_configured());
        inspector.inspect(&Value::None, "");
        assert!(inspector.is_configured());
        assert_eq!(*inspector.options(), PrintOptions::default());
    }

    #[test]
    fn test_startup_overrides_apply_once() {
        let buffer = BufferSink::new();
        let mut inspector = Inspector::new()
            .with_sink(buffer.clone())
            .with_startup_overrides(DisplayOverrides::new().threshold(2));
        inspector.inspect(&Value::from(1), "a");
        assert_eq!(inspector.options().threshold, 2);

        inspector.configure(&DisplayOverrides::new().threshold(9));
        inspector.inspect(&Value::from(1), "b");
        assert_eq!(inspector.options().threshold, 9);
    }

    #[test]
    fn test_label_separator() {
        let (mut inspector, buffer) = buffered();
        inspector.inspect(&Value::from(1), "");
        inspector.inspect(&Value::from(2), "x");
        inspector.inspect(&Value::from(3), "y: ");
        assert_eq!(buffer.contents(), "1\nx: 2\ny: 3\n");
    }

    #[test]
    fn test_prefix() {
        let buffer = BufferSink::new();
        let mut inspector = Inspector::new()
            .with_sink(buffer.clone())
            .with_prefix("[rank 0] ");
        inspector.inspect(&Value::from(Namespace::new().with("lr", 0.5)), "cfg");
        assert_eq!(buffer.lines(), vec!["[rank 0] cfg.lr: 0.5"]);
    }

    #[test]
    fn test_set_prefix_in_place() {
        let (mut inspector, buffer) = buffered();
        assert_eq!(inspector.set_prefix("[eval] "), "");
        inspector.inspect(&Value::from(7), "step");
        assert_eq!(inspector.set_prefix(""), "[eval] ");
        inspector.inspect(&Value::from(8), "step");
        assert_eq!(buffer.lines(), vec!["[eval] step: 7", "step: 8"]);
    }

    #[test]
    fn test_number_sequence_dtypes() {
        let bools = number_sequence(&[Value::Bool(true), Value::Bool(false)]);
        assert_eq!(bools.dtype_name(), "bool");

        let ints = number_sequence(&[Value::Int(1), Value::Bool(true)]);
        assert_eq!(ints.dtype_name(), "int64");
        assert_eq!(ints.flat_values(), vec![1.0, 1.0]);

        let floats = number_sequence(&[Value::Int(1), Value::Float(2.5)]);
        assert_eq!(floats.dtype_name(), "float64");

        let empty = number_sequence(&[]);
        assert_eq!(empty.dtype_name(), "float64");
        assert_eq!(empty.element_count(), 0);
    }

    #[test]
    fn test_skip_reasons() {
        let key = Key::from("In");
        assert!(skip_reason(&key, &Value::from(1)).is_some());

        let key = Key::from("helper");
        assert!(skip_reason(&key, &Value::function("helper")).is_some());
        assert!(skip_reason(&key, &Value::package("np")).is_some());

        let key = Key::from("_hidden");
        assert!(skip_reason(&key, &Value::from(1)).is_some());
        assert!(skip_reason(&key, &Value::from(1.0)).is_none());
        assert!(skip_reason(&key, &Value::from(DenseND::<f32>::zeros(&[1]))).is_none());

        let key = Key::from("shell");
        let shell = Value::opaque("ipykernel.zmqshell.ZMQInteractiveShell", "<shell>");
        assert!(skip_reason(&key, &shell).is_none());
        let shell = Value::opaque("IPython.core.history.HistoryManager", "<history>");
        assert!(skip_reason(&key, &shell).is_some());

        assert!(skip_reason(&Key::from(0), &Value::from(1)).is_none());
    }

    #[test]
    fn test_byte_size_rewrite() {
        assert!(matches!(as_byte_size(&Value::from(2048)), Value::Str(ref s) if s == "2 KiB"));
        assert!(matches!(as_byte_size(&Value::from(-1.4)), Value::Str(ref s) if s == "-1 byte"));
        assert!(matches!(as_byte_size(&Value::None), Value::None));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        struct Closed;

        impl Sink for Closed {
            fn write_str(&mut self, _text: &str) -> std::io::Result<()> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        let mut inspector = Inspector::new().with_sink(Closed);
        inspector.inspect(&Value::from(vec![1.0, 2.0]), "x");
        assert!(inspector.is_configured());
    }
}
