//! Literal grammars for leaf values.
//!
//! Every parser returns `None` on malformed input; the engine treats that as
//! "leave the field at zero".

use std::str::FromStr;

/// Duration units and their length in nanoseconds.
const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("\u{b5}s", 1_000),
    ("\u{3bc}s", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60_000_000_000),
    ("h", 3_600_000_000_000),
];

/// Largest magnitude a duration may reach before the sign is applied.
const DURATION_LIMIT: u64 = 1 << 63;

/// Parse a boolean literal.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a signed integer with an optional base prefix.
///
/// Callers narrow the result to their own width with `TryFrom`.
pub fn parse_int(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = parse_uint(digits)?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Parse an unsigned integer with an optional base prefix.
///
/// `0x`, `0o` and `0b` select hex, octal and binary; a bare leading `0`
/// selects octal. Underscores may separate digits. Signs are rejected.
pub fn parse_uint(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    let (radix, body, prefixed) = split_radix(s);
    if s.contains('_') && !underscores_ok(body, prefixed) {
        return None;
    }

    let mut value: u64 = 0;
    for c in body.chars().filter(|&c| c != '_') {
        let digit = c.to_digit(radix)?;
        value = value
            .checked_mul(u64::from(radix))?
            .checked_add(u64::from(digit))?;
    }
    Some(value)
}

// Returns the radix, the digits after any prefix, and whether a prefix was
// consumed.
fn split_radix(s: &str) -> (u32, &str, bool) {
    let bytes = s.as_bytes();
    if bytes[0] != b'0' {
        return (10, s, false);
    }
    if bytes.len() >= 3 {
        match bytes[1].to_ascii_lowercase() {
            b'b' => return (2, &s[2..], true),
            b'o' => return (8, &s[2..], true),
            b'x' => return (16, &s[2..], true),
            _ => {}
        }
    }
    (8, &s[1..], true)
}

// Underscores must sit between digits; a base prefix (or the leading octal
// zero) counts as a digit.
fn underscores_ok(body: &str, prefixed: bool) -> bool {
    if body.ends_with('_') || body.contains("__") {
        return false;
    }
    prefixed || !body.starts_with('_')
}

/// Parse a floating point literal into `F`.
///
/// Underscores may separate digits (`1_000.5`). A finite literal that
/// overflows `F` is rejected rather than saturated.
pub fn parse_float<F>(s: &str) -> Option<F>
where
    F: FromStr + Into<f64> + Copy,
{
    let stripped;
    let s = if s.contains('_') {
        if !float_underscores_ok(s) {
            return None;
        }
        stripped = s.replace('_', "");
        stripped.as_str()
    } else {
        s
    };

    let value: F = s.parse().ok()?;
    let wide: f64 = value.into();
    if wide.is_infinite() && !s.to_ascii_lowercase().contains("inf") {
        return None;
    }
    Some(value)
}

// Every underscore must sit between two digits.
fn float_underscores_ok(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    })
}

/// Parse a duration literal such as `300ms`, `-1.5h` or `2h45m` into
/// nanoseconds.
///
/// Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare `0`
/// needs no unit.
pub fn parse_duration(s: &str) -> Option<i64> {
    let (negative, mut rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if rest == "0" {
        return Some(0);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let whole_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (whole, tail) = rest.split_at(whole_len);
        rest = tail;

        let mut value: u64 = 0;
        for digit in whole.bytes() {
            value = value
                .checked_mul(10)?
                .checked_add(u64::from(digit - b'0'))?;
        }
        if value > DURATION_LIMIT {
            return None;
        }

        let mut fraction: u64 = 0;
        let mut scale = 1f64;
        let mut has_fraction = false;
        if let Some(tail) = rest.strip_prefix('.') {
            let frac_len = tail.bytes().take_while(u8::is_ascii_digit).count();
            let (digits, tail) = tail.split_at(frac_len);
            rest = tail;
            has_fraction = frac_len > 0;

            // Digits past the precision of u64 are consumed but ignored.
            let mut saturated = false;
            for digit in digits.bytes() {
                if saturated || fraction > (i64::MAX as u64) / 10 {
                    saturated = true;
                    continue;
                }
                fraction = fraction * 10 + u64::from(digit - b'0');
                scale *= 10.0;
            }
        }
        if whole_len == 0 && !has_fraction {
            return None;
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return None;
        }
        let (unit, tail) = rest.split_at(unit_len);
        rest = tail;
        let (_, multiplier) = UNITS.iter().find(|(name, _)| *name == unit)?;

        if value > DURATION_LIMIT / multiplier {
            return None;
        }
        value *= multiplier;
        if fraction > 0 {
            value += (fraction as f64 * (*multiplier as f64 / scale)) as u64;
            if value > DURATION_LIMIT {
                return None;
            }
        }

        total = total.checked_add(value)?;
        if total > DURATION_LIMIT {
            return None;
        }
    }

    if negative {
        0i64.checked_sub_unsigned(total)
    } else {
        i64::try_from(total).ok()
    }
}
