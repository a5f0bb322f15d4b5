//! Element types and their dtype names.
//!
//! Names follow the numpy/torch convention (`float32`, `int64`, `uint8`, `bool`) so
//! summaries read the same as they would in an interactive numeric session.

use crate::print_options::PrintOptions;
use std::fmt;

/// Element type of an array or tensor.
///
/// # Examples
///
/// ```
/// use tenpeek_core::DType;
///
/// assert_eq!(DType::Float32.name(), "float32");
/// assert_eq!(DType::UInt8.to_string(), "uint8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl DType {
    /// The numpy/torch style name of this dtype.
    pub fn name(&self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar that can be stored in a [`DenseND`](crate::DenseND) and summarized.
///
/// Statistics are computed in `f64`, so every element type converts losslessly
/// enough for display purposes.
pub trait Element: Copy + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// The dtype reported for arrays of this element.
    const DTYPE: DType;

    /// Convert to `f64` for statistics and sampling.
    fn to_f64(self) -> f64;

    /// Render one element for the plain (non-summarized) array output.
    fn format_cell(self, options: &PrintOptions) -> String;
}

macro_rules! impl_integer_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn format_cell(self, _options: &PrintOptions) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_integer_element!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
);

impl Element for f32 {
    const DTYPE: DType = DType::Float32;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn format_cell(self, options: &PrintOptions) -> String {
        options.format_float(self as f64)
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::Float64;

    fn to_f64(self) -> f64 {
        self
    }

    fn format_cell(self, options: &PrintOptions) -> String {
        options.format_float(self)
    }
}

impl Element for bool {
    const DTYPE: DType = DType::Bool;

    fn to_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }

    fn format_cell(self, _options: &PrintOptions) -> String {
        if self { "True" } else { "False" }.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_names() {
        assert_eq!(<f32 as Element>::DTYPE.name(), "float32");
        assert_eq!(<f64 as Element>::DTYPE.name(), "float64");
        assert_eq!(<i64 as Element>::DTYPE.name(), "int64");
        assert_eq!(<u8 as Element>::DTYPE.name(), "uint8");
        assert_eq!(<bool as Element>::DTYPE.name(), "bool");
    }

    #[test]
    fn test_format_cells() {
        let options = PrintOptions::default();
        assert_eq!(7i32.format_cell(&options), "7");
        assert_eq!(true.format_cell(&options), "True");
        assert_eq!(1.5f64.format_cell(&options), "1.50");
        assert_eq!(f32::NAN.format_cell(&options), "nan");
    }

    #[test]
    fn test_bool_to_f64() {
        assert_eq!(true.to_f64(), 1.0);
        assert_eq!(false.to_f64(), 0.0);
    }
}
