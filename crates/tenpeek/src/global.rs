//! The process-wide session behind the free functions.
//!
//! It is created on first use with standard output as sink and with the
//! `TENPEEK_*` environment variables as startup overrides.

use crate::inspector::Inspector;
use crate::sink::Sink;
use crate::value::Value;
use parking_lot::{const_mutex, Mutex};
use tenpeek_core::{DisplayOverrides, PrintOptions};
use tracing::warn;

static GLOBAL: Mutex<Option<Inspector>> = const_mutex(None);

fn startup_overrides() -> DisplayOverrides {
    DisplayOverrides::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "ignoring display options from the environment");
        DisplayOverrides::new()
    })
}

/// Run `f` with exclusive access to the process-wide session.
pub fn with_global<R>(f: impl FnOnce(&mut Inspector) -> R) -> R {
    let mut guard = GLOBAL.lock();
    let inspector =
        guard.get_or_insert_with(|| Inspector::new().with_startup_overrides(startup_overrides()));
    f(inspector)
}

/// Print `value` under `label` through the process-wide session.
///
/// Output goes to standard output until [`set_sink`] routes it elsewhere. When
/// `indicatif` bars are running, install a
/// [`ProgressSink`](crate::ProgressSink) or
/// [`MultiProgressSink`](crate::MultiProgressSink) first so lines do not tear
/// the bars.
pub fn inspect(value: &Value, label: &str) {
    with_global(|inspector| inspector.inspect(value, label));
}

/// Print `value`, first applying `overrides` to the process-wide options.
///
/// The overrides persist for later calls.
pub fn inspect_with(value: &Value, label: &str, overrides: &DisplayOverrides) {
    with_global(|inspector| inspector.inspect_with(value, label, overrides));
}

/// Change the process-wide print options.
///
/// `sci_mode(false)` disables scientific notation for arrays and tensors alike.
///
/// # Examples
///
/// ```
/// use tenpeek::{configure_numeric_display, print_options};
/// use tenpeek_core::DisplayOverrides;
///
/// configure_numeric_display(&DisplayOverrides::new().precision(4).line_width(80));
/// assert_eq!(print_options().precision, 4);
/// assert_eq!(print_options().line_width, 80);
/// ```
pub fn configure_numeric_display(overrides: &DisplayOverrides) {
    with_global(|inspector| inspector.configure(overrides));
}

/// Effective process-wide print options, configuring the session if needed.
pub fn print_options() -> PrintOptions {
    with_global(|inspector| {
        inspector.configure(&DisplayOverrides::new());
        *inspector.options()
    })
}

/// Route process-wide output to `sink`, returning the previous sink.
pub fn set_sink(sink: impl Sink + 'static) -> Box<dyn Sink> {
    with_global(|inspector| inspector.set_sink(Box::new(sink)))
}

/// Set the text prepended to every process-wide line, returning the previous
/// prefix.
pub fn set_prefix(prefix: impl Into<String>) -> String {
    with_global(|inspector| inspector.set_prefix(prefix))
}
