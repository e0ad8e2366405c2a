//! Rendering algorithms: integer bases, floating-point notations, string
//! padding and digit grouping.
//!
//! These functions take an already-parsed [`FormatSpec`] and append to a
//! `String` buffer. Type-dependent legality lives here: a spec that parsed
//! fine can still be rejected once the value's type is known (a sign on a
//! string, a hex float), which is what lets one compiled template serve
//! arguments of different types.

use crate::error::{Error, Result};
use crate::spec::{Align, FormatSpec, Presentation, Sign};

/// Renders string-like content: width, fill and alignment only.
///
/// Numeric spec fields are rejected: strings have no sign to print, no digits
/// to group and no alternate form.
pub(crate) fn format_str(out: &mut String, value: &str, spec: &FormatSpec) -> Result<()> {
    if spec.sign != Sign::Default {
        return Err(Error::spec("sign not allowed with string or character"));
    }
    if spec.grouped {
        return Err(Error::spec("cannot specify ',' for string"));
    }
    if spec.alternate {
        return Err(Error::spec("alternate form (#) not allowed with string"));
    }
    if spec.align == Align::AfterSign {
        return Err(Error::spec(
            "'=' alignment not allowed with string or character",
        ));
    }
    match spec.ty {
        Presentation::Generic | Presentation::Str => {}
        _ => {
            return Err(Error::spec(
                "invalid presentation type for string or character",
            ))
        }
    }

    pad(out, "", value, Align::Left, spec);
    Ok(())
}

/// Renders an integer given its sign and magnitude.
///
/// Character presentation reroutes through the string path; floating-point
/// presentations reinterpret the value as a float and delegate.
pub(crate) fn format_int(
    out: &mut String,
    negative: bool,
    magnitude: u64,
    spec: &FormatSpec,
) -> Result<()> {
    match spec.ty {
        Presentation::Character => {
            let code = if negative { None } else { Some(magnitude) };
            let ch = code
                .and_then(|c| u32::try_from(c).ok())
                .and_then(char::from_u32)
                .ok_or_else(|| Error::spec("value out of range for character presentation"))?;
            // Reroute as a one-character string; the alternate flag is legal
            // for 'c' but has no effect on it.
            let strspec = FormatSpec {
                ty: Presentation::Str,
                alternate: false,
                ..spec.clone()
            };
            let mut buf = [0u8; 4];
            return format_str(out, ch.encode_utf8(&mut buf), &strspec);
        }
        Presentation::Fixed | Presentation::Exp | Presentation::General | Presentation::Percent => {
            let value = if negative {
                -(magnitude as f64)
            } else {
                magnitude as f64
            };
            return format_float(out, value, spec);
        }
        Presentation::Str => {
            return Err(Error::spec("invalid presentation type for integer"));
        }
        Presentation::Generic
        | Presentation::Dec
        | Presentation::Bin
        | Presentation::Oct
        | Presentation::Hex => {}
    }

    let mut prefix = String::new();
    push_sign(&mut prefix, negative, spec.sign);

    let mut digits = String::new();
    match spec.ty {
        Presentation::Bin => {
            if spec.alternate {
                prefix.push('0');
                prefix.push(if spec.upper { 'B' } else { 'b' });
            }
            if magnitude == 0 {
                digits.push('0');
            } else {
                // Peel bits from the highest set bit down.
                let mut bit = 1u64 << (63 - magnitude.leading_zeros());
                while bit != 0 {
                    digits.push(if magnitude & bit != 0 { '1' } else { '0' });
                    bit >>= 1;
                }
            }
        }
        Presentation::Oct => {
            if spec.alternate {
                prefix.push('0');
                prefix.push(if spec.upper { 'O' } else { 'o' });
            }
            digits = format!("{magnitude:o}");
            if spec.grouped {
                digits = group_digits(&digits);
            }
        }
        Presentation::Hex => {
            if spec.alternate {
                prefix.push('0');
                prefix.push(if spec.upper { 'X' } else { 'x' });
            }
            digits = if spec.upper {
                format!("{magnitude:X}")
            } else {
                format!("{magnitude:x}")
            };
            if spec.grouped {
                digits = group_digits(&digits);
            }
        }
        _ => {
            digits = magnitude.to_string();
            if spec.grouped {
                digits = group_digits(&digits);
            }
        }
    }

    pad(out, &prefix, &digits, Align::Right, spec);
    Ok(())
}

/// Renders a floating-point value.
///
/// The sign comes from the sign bit, so negative zero keeps its minus.
pub(crate) fn format_float(out: &mut String, value: f64, spec: &FormatSpec) -> Result<()> {
    let negative = value.is_sign_negative();
    let magnitude = value.abs();

    let body = match spec.ty {
        Presentation::Fixed => fixed_notation(magnitude, spec.precision, spec.grouped, spec.upper),
        Presentation::Percent => {
            let mut body =
                fixed_notation(magnitude * 100.0, spec.precision, spec.grouped, spec.upper);
            body.push('%');
            body
        }
        Presentation::Exp => exp_notation(magnitude, spec.precision, spec.upper),
        Presentation::Generic | Presentation::General => {
            general_notation(magnitude, spec.precision, spec.grouped, spec.upper)
        }
        _ => {
            return Err(Error::spec(
                "non-decimal presentation type not allowed with float",
            ))
        }
    };

    let mut prefix = String::new();
    push_sign(&mut prefix, negative, spec.sign);

    pad(out, &prefix, &body, Align::Right, spec);
    Ok(())
}

fn push_sign(prefix: &mut String, negative: bool, sign: Sign) {
    match sign {
        Sign::Default | Sign::NegativeOnly => {
            if negative {
                prefix.push('-');
            }
        }
        Sign::Always => prefix.push(if negative { '-' } else { '+' }),
        Sign::Space => prefix.push(if negative { '-' } else { ' ' }),
    }
}

/// Fixed notation with the given number of fractional digits.
fn fixed_notation(magnitude: f64, precision: usize, grouped: bool, upper: bool) -> String {
    if !magnitude.is_finite() {
        return nonfinite(magnitude, upper);
    }
    let body = format!("{magnitude:.precision$}");
    if grouped {
        group_integer_part(&body)
    } else {
        body
    }
}

/// Scientific notation: mantissa with `precision` fractional digits, then a
/// signed exponent of at least two digits (`1.500000e+03`).
fn exp_notation(magnitude: f64, precision: usize, upper: bool) -> String {
    if !magnitude.is_finite() {
        return nonfinite(magnitude, upper);
    }
    rewrite_exponent(&format!("{:.*e}", precision, magnitude), upper)
}

/// General notation: fixed or scientific, whichever reads shorter, with
/// trailing zeros stripped.
///
/// The choice follows the decimal exponent *after* rounding to the requested
/// number of significant digits, so 999999.5 at six digits tips over into
/// `1e+06`.
fn general_notation(magnitude: f64, precision: usize, grouped: bool, upper: bool) -> String {
    if !magnitude.is_finite() {
        return nonfinite(magnitude, upper);
    }
    let significant = precision.max(1);
    let sci = format!("{:.*e}", significant - 1, magnitude);
    let exponent: i32 = sci
        .split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0);

    if -4 <= exponent && exponent < significant as i32 {
        let fractional = (significant as i32 - 1 - exponent).max(0) as usize;
        let body = strip_zeros(&format!("{magnitude:.fractional$}"));
        if grouped {
            group_integer_part(&body)
        } else {
            body
        }
    } else {
        let stripped = match sci.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", strip_zeros(mantissa), exp),
            None => sci,
        };
        rewrite_exponent(&stripped, upper)
    }
}

fn nonfinite(magnitude: f64, upper: bool) -> String {
    let text = if magnitude.is_nan() { "nan" } else { "inf" };
    if upper {
        text.to_ascii_uppercase()
    } else {
        text.to_string()
    }
}

/// Converts Rust's `1.5e3` exponent form into `1.5e+03`.
fn rewrite_exponent(text: &str, upper: bool) -> String {
    let (mantissa, exponent) = match text.split_once('e') {
        Some(parts) => parts,
        None => (text, "0"),
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    let marker = if upper { 'E' } else { 'e' };
    if digits.len() < 2 {
        format!("{mantissa}{marker}{sign}0{digits}")
    } else {
        format!("{mantissa}{marker}{sign}{digits}")
    }
}

/// Drops trailing fractional zeros, and the point itself if nothing remains.
fn strip_zeros(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

/// Inserts `,` between three-digit groups, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Groups only the digits before the decimal point.
fn group_integer_part(body: &str) -> String {
    match body.find('.') {
        Some(point) => format!("{}{}", group_digits(&body[..point]), &body[point..]),
        None => group_digits(body),
    }
}

/// Pads `prefix + body` out to the spec width.
///
/// `AfterSign` puts the fill between the prefix and the body; everything else
/// treats them as one run of content. Widths count characters, not bytes.
fn pad(out: &mut String, prefix: &str, body: &str, default_align: Align, spec: &FormatSpec) {
    let length = prefix.chars().count() + body.chars().count();
    if length >= spec.width {
        out.push_str(prefix);
        out.push_str(body);
        return;
    }

    let padding = spec.width - length;
    let align = if spec.align == Align::Default {
        default_align
    } else {
        spec.align
    };
    match align {
        Align::Left => {
            out.push_str(prefix);
            out.push_str(body);
            fill(out, spec.fill, padding);
        }
        Align::Center => {
            let before = padding / 2;
            fill(out, spec.fill, before);
            out.push_str(prefix);
            out.push_str(body);
            fill(out, spec.fill, padding - before);
        }
        Align::AfterSign => {
            out.push_str(prefix);
            fill(out, spec.fill, padding);
            out.push_str(body);
        }
        Align::Right | Align::Default => {
            fill(out, spec.fill, padding);
            out.push_str(prefix);
            out.push_str(body);
        }
    }
}

fn fill(out: &mut String, fill: char, count: usize) {
    for _ in 0..count {
        out.push(fill);
    }
}
