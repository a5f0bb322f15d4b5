//! Print options shared by array and tensor rendering.
//!
//! [`PrintOptions`] holds the effective settings; [`DisplayOverrides`] carries the
//! optional, per-call changes that get merged into them. The same settings drive
//! both the numpy-style array rendering and the torch-style tensor rendering, so
//! one override reconfigures both.

use crate::error::ConfigError;
use std::str::FromStr;

/// Environment variable prefix used by [`DisplayOverrides::from_env`].
pub const ENV_PREFIX: &str = "TENPEEK_";

/// Effective display settings.
///
/// # Examples
///
/// ```
/// use tenpeek_core::PrintOptions;
///
/// let options = PrintOptions::default();
/// assert_eq!(options.precision, 2);
/// assert_eq!(options.threshold, 4);
/// assert_eq!(options.line_width, 120);
/// assert!(!options.sci_mode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintOptions {
    /// Number of decimals for floating point elements
    pub precision: usize,
    /// Element count above which values are summarized instead of printed in full
    pub threshold: usize,
    /// Elements kept at each edge of an axis when a rendering is elided
    pub edge_items: usize,
    /// Maximum characters per line before wrapping
    pub line_width: usize,
    /// Use scientific notation for floating point elements
    pub sci_mode: bool,
}

impl PrintOptions {
    /// The defaults applied on the first inspection of a session.
    pub const fn const_default() -> Self {
        Self {
            precision: 2,
            threshold: 4,
            edge_items: 3,
            line_width: 120,
            sci_mode: false,
        }
    }

    /// Merge every field set in `overrides` into these options.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::{DisplayOverrides, PrintOptions};
    ///
    /// let mut options = PrintOptions::default();
    /// options.apply(&DisplayOverrides::new().threshold(10).sci_mode(true));
    /// assert_eq!(options.threshold, 10);
    /// assert!(options.sci_mode);
    /// assert_eq!(options.precision, 2);
    /// ```
    pub fn apply(&mut self, overrides: &DisplayOverrides) {
        if let Some(precision) = overrides.precision {
            self.precision = precision;
        }
        if let Some(threshold) = overrides.threshold {
            self.threshold = threshold;
        }
        if let Some(edge_items) = overrides.edge_items {
            self.edge_items = edge_items;
        }
        if let Some(line_width) = overrides.line_width {
            self.line_width = line_width;
        }
        if let Some(sci_mode) = overrides.sci_mode {
            self.sci_mode = sci_mode;
        }
    }

    /// Format a floating point element for plain rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::PrintOptions;
    ///
    /// let mut options = PrintOptions::default();
    /// assert_eq!(options.format_float(3.14159), "3.14");
    ///
    /// options.sci_mode = true;
    /// assert_eq!(options.format_float(31415.9), "3.14e+04");
    /// ```
    pub fn format_float(&self, value: f64) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }
        if self.sci_mode {
            format_scientific(value, self.precision)
        } else {
            format!("{:.*}", self.precision, value)
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::const_default()
    }
}

/// Format `value` as `d.ddde+XX` with `decimals` mantissa decimals.
pub fn format_scientific(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*e}", decimals, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => raw,
    }
}

/// Optional changes to [`PrintOptions`].
///
/// Unset fields leave the corresponding option untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayOverrides {
    pub precision: Option<usize>,
    pub threshold: Option<usize>,
    pub edge_items: Option<usize>,
    pub line_width: Option<usize>,
    pub sci_mode: Option<bool>,
}

impl DisplayOverrides {
    /// Overrides with no field set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn edge_items(mut self, edge_items: usize) -> Self {
        self.edge_items = Some(edge_items);
        self
    }

    pub fn line_width(mut self, line_width: usize) -> Self {
        self.line_width = Some(line_width);
        self
    }

    pub fn sci_mode(mut self, sci_mode: bool) -> Self {
        self.sci_mode = Some(sci_mode);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.precision.is_none()
            && self.threshold.is_none()
            && self.edge_items.is_none()
            && self.line_width.is_none()
            && self.sci_mode.is_none()
    }

    /// Read overrides from `TENPEEK_PRECISION`, `TENPEEK_THRESHOLD`,
    /// `TENPEEK_EDGE_ITEMS`, `TENPEEK_LINE_WIDTH` and `TENPEEK_SCI_MODE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary key lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::DisplayOverrides;
    ///
    /// let overrides = DisplayOverrides::from_lookup(|key| match key {
    ///     "TENPEEK_THRESHOLD" => Some("8".to_string()),
    ///     "TENPEEK_SCI_MODE" => Some("on".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(overrides.threshold, Some(8));
    /// assert_eq!(overrides.sci_mode, Some(true));
    /// assert_eq!(overrides.precision, None);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            precision: parse_number(&lookup, "PRECISION")?,
            threshold: parse_number(&lookup, "THRESHOLD")?,
            edge_items: parse_number(&lookup, "EDGE_ITEMS")?,
            line_width: parse_number(&lookup, "LINE_WIDTH")?,
            sci_mode: parse_flag(&lookup, "SCI_MODE")?,
        })
    }
}

fn parse_number<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let key = format!("{}{}", ENV_PREFIX, name);
    match lookup(&key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::invalid_value(key, raw, e.to_string())),
    }
}

fn parse_flag<F>(lookup: &F, name: &str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let key = format!("{}{}", ENV_PREFIX, name);
    match lookup(&key) {
        None => Ok(None),
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::invalid_value(
                key,
                raw,
                "expected one of true/false, yes/no, on/off, 1/0",
            )),
        },
    }
}
