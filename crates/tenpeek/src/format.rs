//! Number, size and repr formatting helpers.
//!
//! These are the pure building blocks of a summary line: `%g`-style numbers,
//! binary byte sizes, Python-like reprs for scalars and strings, and tuple-style
//! shapes.

/// Format `value` like `%.{significant}g`.
///
/// Trailing zeros are removed; exponent notation (`1.235e+05`) is used when the
/// decimal exponent is below -4 or at least `significant`.
///
/// # Examples
///
/// ```
/// use tenpeek::format::format_g;
///
/// assert_eq!(format_g(3.14159, 4), "3.142");
/// assert_eq!(format_g(2.0, 4), "2");
/// assert_eq!(format_g(123456.0, 4), "1.235e+05");
/// assert_eq!(format_g(0.00001234, 4), "1.234e-05");
/// assert_eq!(format_g(f64::NAN, 4), "nan");
/// ```
pub fn format_g(value: f64, significant: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let significant = significant.max(1);
    let scientific = format!("{:.*e}", significant - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= significant as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Drop trailing zeros after the decimal point, and the point itself if bare.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

const SIZE_UNITS: [(u64, &str); 3] = [(1 << 30, "GiB"), (1 << 20, "MiB"), (1 << 10, "KiB")];

/// Format a byte count as a human readable size with binary units.
///
/// Counts below one KiB print as integers with `byte`/`bytes`; larger counts use
/// two decimals. A non-negative count that scales to a whole number drops the
/// `.00`.
///
/// # Examples
///
/// ```
/// use tenpeek::format_size;
///
/// assert_eq!(format_size(0), "0 bytes");
/// assert_eq!(format_size(1), "1 byte");
/// assert_eq!(format_size(5), "5 bytes");
/// assert_eq!(format_size(1024), "1 KiB");
/// assert_eq!(format_size(1536), "1.50 KiB");
/// assert_eq!(format_size(-2048), "-2.00 KiB");
/// ```
pub fn format_size(size: i64) -> String {
    let sign = if size < 0 { "-" } else { "" };
    let magnitude = size.unsigned_abs();

    for (divider, unit) in SIZE_UNITS {
        if magnitude >= divider {
            let scaled = format!("{:.2}", magnitude as f64 / divider as f64);
            let scaled = match scaled.strip_suffix(".00") {
                Some(whole) if size >= 0 => whole,
                _ => scaled.as_str(),
            };
            return format!("{}{} {}", sign, scaled, unit);
        }
    }

    let unit = if magnitude == 1 { "byte" } else { "bytes" };
    format!("{}{} {}", sign, magnitude, unit)
}

/// Format a shape as a tuple: `()`, `(5,)`, `(2, 3)`.
///
/// # Examples
///
/// ```
/// use tenpeek::format::format_shape;
///
/// assert_eq!(format_shape(&[]), "()");
/// assert_eq!(format_shape(&[6]), "(6,)");
/// assert_eq!(format_shape(&[2, 3]), "(2, 3)");
/// ```
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [only] => format!("({},)", only),
        dims => {
            let inner: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", inner.join(", "))
        }
    }
}

/// Strip a `torch.` style namespace from a dtype name.
///
/// # Examples
///
/// ```
/// use tenpeek::format::strip_dtype_prefix;
///
/// assert_eq!(strip_dtype_prefix("torch.float32"), "float32");
/// assert_eq!(strip_dtype_prefix("int64"), "int64");
/// ```
pub fn strip_dtype_prefix(dtype: &str) -> &str {
    dtype.strip_prefix("torch.").unwrap_or(dtype)
}

/// Python-like repr of a float: always shows a decimal point or exponent.
///
/// # Examples
///
/// ```
/// use tenpeek::format::float_repr;
///
/// assert_eq!(float_repr(1.0), "1.0");
/// assert_eq!(float_repr(0.1), "0.1");
/// assert_eq!(float_repr(1e20), "1e+20");
/// assert_eq!(float_repr(1.5e-7), "1.5e-07");
/// assert_eq!(float_repr(f64::NEG_INFINITY), "-inf");
/// ```
pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let plain = format!("{}", value);
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

/// Python-like repr of a string: single quotes unless the text contains a
/// single quote and no double quote.
///
/// # Examples
///
/// ```
/// use tenpeek::format::str_repr;
///
/// assert_eq!(str_repr("key"), "'key'");
/// assert_eq!(str_repr("it's"), "\"it's\"");
/// assert_eq!(str_repr("a\nb"), "'a\\nb'");
/// ```
pub fn str_repr(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// `True` / `False`.
pub fn bool_repr(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_g_fixed_range() {
        assert_eq!(format_g(0.5, 4), "0.5");
        assert_eq!(format_g(-7.25, 4), "-7.25");
        assert_eq!(format_g(1234.0, 4), "1234");
        assert_eq!(format_g(0.0001, 4), "0.0001");
        assert_eq!(format_g(42.0, 4), "42");
    }

    #[test]
    fn test_format_g_exponent_range() {
        assert_eq!(format_g(12346.0, 4), "1.235e+04");
        assert_eq!(format_g(9999.9, 4), "1e+04");
        assert_eq!(format_g(-0.00002, 4), "-2e-05");
        assert_eq!(format_g(1e100, 4), "1e+100");
    }

    #[test]
    fn test_format_g_special_values() {
        assert_eq!(format_g(0.0, 4), "0");
        assert_eq!(format_g(-0.0, 4), "-0");
        assert_eq!(format_g(f64::INFINITY, 4), "inf");
        assert_eq!(format_g(f64::NEG_INFINITY, 4), "-inf");
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1), "1 byte");
        assert_eq!(format_size(-1), "-1 byte");
        assert_eq!(format_size(5), "5 bytes");
        assert_eq!(format_size(1023), "1023 bytes");
        assert_eq!(format_size(1024), "1 KiB");
        assert_eq!(format_size(-2048), "-2.00 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3 MiB");
        assert_eq!(format_size(1536), "1.50 KiB");
        assert_eq!(format_size(-1536), "-1.50 KiB");
        assert_eq!(format_size(13 * 1024 * 1024 / 4), "3.25 MiB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024 / 2), "2.50 GiB");
        assert_eq!(format_size(-1536 * 1024), "-1.50 MiB");
    }

    #[test]
    fn test_format_size_extremes() {
        assert!(format_size(i64::MIN).starts_with('-'));
        assert!(format_size(i64::MAX).ends_with(" GiB"));
    }

    #[test]
    fn test_float_repr() {
        assert_eq!(float_repr(0.0), "0.0");
        assert_eq!(float_repr(-2.5), "-2.5");
        assert_eq!(float_repr(1e15), "1000000000000000.0");
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(0.0001), "0.0001");
        assert_eq!(float_repr(0.00001), "1e-05");
    }

    #[test]
    fn test_str_repr_escapes() {
        assert_eq!(str_repr(""), "''");
        assert_eq!(str_repr("both ' and \""), "'both \\' and \"'");
        assert_eq!(str_repr("tab\there"), "'tab\\there'");
        assert_eq!(str_repr("back\\slash"), "'back\\\\slash'");
    }

    #[test]
    fn test_bool_repr() {
        assert_eq!(bool_repr(true), "True");
        assert_eq!(bool_repr(false), "False");
    }
}
