//! Human-readable byte counts.
//!
//! Units step at powers of 1024. Rounding happens before the unit is chosen
//! for display, so a value just under the next unit renders as `1,024 KB`
//! (or MB, GB, TB) rather than being promoted.

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;

const UNITS: [&str; 6] = ["bytes", "KB", "MB", "GB", "TB", "PB"];

/// Fraction digits used for plain byte counts.
const BYTE_FRACTION_DIGITS: u32 = 3;

/// Upper bound on fraction digits, keeping scaled values within `u64`.
const MAX_FRACTION_DIGITS: u32 = 6;

/// Format a byte count, e.g. `1,023 bytes`, `3 KB`, `2.6 MB`.
///
/// - below 1 KB: the byte count
/// - below 1 MB: KBs, rounded up to a whole number
/// - MB and above: one decimal place, rounded half up; PB is open-ended
///
/// Negative and non-finite inputs are treated as 0.
pub fn bytes_to_string(bytes: f64) -> String {
    bytes_to_string_with_precision(bytes, 0)
}

/// Like [`bytes_to_string`], with `added_precision` extra decimal places for
/// MB and larger units.
pub fn bytes_to_string_with_precision(bytes: f64, added_precision: u32) -> String {
    let bytes = if bytes.is_finite() && bytes > 0.0 {
        bytes
    } else {
        0.0
    };

    if bytes < KB {
        return format!("{} {}", format_number(bytes, BYTE_FRACTION_DIGITS), UNITS[0]);
    }

    if bytes < MB {
        return format!("{} {}", format_number((bytes / KB).ceil(), 0), UNITS[1]);
    }

    let mut exponent = 2;
    while exponent < UNITS.len() - 1 && bytes >= unit_size(exponent + 1) {
        exponent += 1;
    }

    let digits = (1 + added_precision).min(MAX_FRACTION_DIGITS);
    format!(
        "{} {}",
        format_number(bytes / unit_size(exponent), digits),
        UNITS[exponent]
    )
}

/// Format an integral byte count.
pub fn format_size(bytes: u64) -> String {
    bytes_to_string(bytes as f64)
}

fn unit_size(exponent: usize) -> f64 {
    KB.powi(exponent as i32)
}

/// Round half up to `fraction_digits`, group the integer part by thousands
/// and drop trailing fraction zeros.
fn format_number(value: f64, fraction_digits: u32) -> String {
    let scale = 10u64.pow(fraction_digits);
    let scaled = (value * scale as f64).round();

    // Too large for integer arithmetic
    if scaled >= u64::MAX as f64 {
        let text = format!("{:.*}", fraction_digits as usize, value);
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let fraction = fraction.trim_end_matches('0');
        let mut out = group_thousands(integer);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        return out;
    }

    let scaled = scaled as u64;
    let integer = scaled / scale;
    let mut fraction = scaled % scale;

    let mut out = group_thousands(&integer.to_string());
    if fraction > 0 {
        let mut width = fraction_digits as usize;
        while fraction % 10 == 0 {
            fraction /= 10;
            width -= 1;
        }
        out.push('.');
        out.push_str(&format!("{:0width$}", fraction, width = width));
    }
    out
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
