//! Argument views and the dispatch trait.
//!
//! Every bound argument is viewed through a [`Formatter`]: a borrowed,
//! statically-dispatched representation picked once, when the argument list is
//! built, from the argument's Rust type. Rendering never re-dispatches.
//!
//! Built-in views cover booleans, characters, every integer width, both float
//! widths, strings, sequences, sets, maps and tuples. Anything else goes
//! through the single dynamic fallback, [`Formatter::display`], which accepts
//! any type that can write itself to a sink via [`std::fmt::Display`].
//!
//! ## Custom types
//!
//! User types participate by implementing [`FormatValue`], usually by
//! delegating to the fallback:
//!
//! ```rust
//! use textfmt::{args, format, FormatValue, Formatter};
//!
//! struct Celsius(f64);
//!
//! impl std::fmt::Display for Celsius {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "{}°C", self.0)
//!     }
//! }
//!
//! impl FormatValue for Celsius {
//!     fn formatter(&self) -> Formatter<'_> {
//!         Formatter::display(self)
//!     }
//! }
//!
//! let outside = Celsius(21.5);
//! let line = format("{:>10}", args![outside]).unwrap();
//! assert_eq!(line, "    21.5°C");
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

use crate::error::Result;
use crate::render;
use crate::spec::{FormatSpec, Presentation};
use crate::template::Conversion;

/// A borrowed view of one bound argument.
///
/// Scalar variants copy the value; strings, containers and the display
/// fallback borrow it, so the argument must outlive the formatting call.
#[derive(Clone)]
pub enum Formatter<'a> {
    Bool(bool),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(&'a str),
    /// Rendered as `[a, b, c]`.
    Seq(Vec<Formatter<'a>>),
    /// Rendered as `{a, b, c}`.
    Set(Vec<Formatter<'a>>),
    /// Rendered as `{k: v, ...}`.
    Map(Vec<(Formatter<'a>, Formatter<'a>)>),
    /// Rendered as `(a, b)`; the empty tuple renders as `()`.
    Tuple(Vec<Formatter<'a>>),
    /// The fallback for user types.
    Display(&'a dyn fmt::Display),
}

impl<'a> Formatter<'a> {
    /// Wraps any type that can write itself to a sink.
    ///
    /// This is the one dynamically-dispatched path; all built-in views are
    /// resolved statically.
    #[must_use]
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        Formatter::Display(value)
    }

    /// The presentation type assumed when a field's spec has no explicit type
    /// character.
    pub(crate) fn default_presentation(&self) -> Presentation {
        match self {
            Formatter::Int(_) | Formatter::UInt(_) => Presentation::Dec,
            Formatter::Float(_) => Presentation::General,
            _ => Presentation::Str,
        }
    }

    /// Renders this argument into `out` under a conversion and a parsed spec.
    pub(crate) fn format(
        &self,
        out: &mut String,
        conversion: Conversion,
        spec: &FormatSpec,
    ) -> Result<()> {
        match conversion {
            Conversion::Repr => {
                let mut buffer = String::new();
                self.repr(&mut buffer)?;
                render::format_str(out, &buffer, spec)
            }
            Conversion::Str => {
                let mut buffer = String::new();
                self.format(&mut buffer, Conversion::None, &FormatSpec::default())?;
                render::format_str(out, &buffer, spec)
            }
            Conversion::None => self.render(out, spec),
        }
    }

    fn render(&self, out: &mut String, spec: &FormatSpec) -> Result<()> {
        match self {
            Formatter::Bool(value) => format_bool(out, *value, spec),
            Formatter::Char(value) => {
                if matches!(spec.ty, Presentation::Generic | Presentation::Str) {
                    let mut buf = [0u8; 4];
                    render::format_str(out, value.encode_utf8(&mut buf), spec)
                } else {
                    render::format_int(out, false, u64::from(u32::from(*value)), spec)
                }
            }
            Formatter::Int(value) => {
                render::format_int(out, value.is_negative(), value.unsigned_abs(), spec)
            }
            Formatter::UInt(value) => render::format_int(out, false, *value, spec),
            Formatter::Float(value) => render::format_float(out, *value, spec),
            Formatter::Str(value) => render::format_str(out, value, spec),
            Formatter::Seq(items) => {
                let mut buffer = String::new();
                join_items(&mut buffer, '[', ']', items, false)?;
                render::format_str(out, &buffer, spec)
            }
            Formatter::Set(items) => {
                let mut buffer = String::new();
                join_items(&mut buffer, '{', '}', items, false)?;
                render::format_str(out, &buffer, spec)
            }
            Formatter::Tuple(items) => {
                let mut buffer = String::new();
                join_items(&mut buffer, '(', ')', items, false)?;
                render::format_str(out, &buffer, spec)
            }
            Formatter::Map(entries) => {
                let mut buffer = String::new();
                join_entries(&mut buffer, entries, false)?;
                render::format_str(out, &buffer, spec)
            }
            Formatter::Display(value) => {
                let buffer = value.to_string();
                render::format_str(out, &buffer, spec)
            }
        }
    }

    /// The formal, quoted representation requested by `!r`.
    pub(crate) fn repr(&self, out: &mut String) -> Result<()> {
        match self {
            Formatter::Char(value) => {
                out.push('\'');
                out.extend(value.escape_debug());
                out.push('\'');
                Ok(())
            }
            Formatter::Str(value) => {
                out.push('"');
                out.extend(value.escape_debug());
                out.push('"');
                Ok(())
            }
            Formatter::Seq(items) => join_items(out, '[', ']', items, true),
            Formatter::Set(items) => join_items(out, '{', '}', items, true),
            Formatter::Tuple(items) => join_items(out, '(', ')', items, true),
            Formatter::Map(entries) => join_entries(out, entries, true),
            _ => self.render(out, &FormatSpec::default()),
        }
    }
}

fn join_items(
    out: &mut String,
    left: char,
    right: char,
    items: &[Formatter<'_>],
    repr: bool,
) -> Result<()> {
    out.push(left);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if repr {
            item.repr(out)?;
        } else {
            item.format(out, Conversion::None, &FormatSpec::default())?;
        }
    }
    out.push(right);
    Ok(())
}

fn join_entries(
    out: &mut String,
    entries: &[(Formatter<'_>, Formatter<'_>)],
    repr: bool,
) -> Result<()> {
    out.push('{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if repr {
            key.repr(out)?;
        } else {
            key.format(out, Conversion::None, &FormatSpec::default())?;
        }
        out.push_str(": ");
        if repr {
            value.repr(out)?;
        } else {
            value.format(out, Conversion::None, &FormatSpec::default())?;
        }
    }
    out.push('}');
    Ok(())
}

fn format_bool(out: &mut String, value: bool, spec: &FormatSpec) -> Result<()> {
    if spec.ty.is_numeric() {
        render::format_int(out, false, u64::from(value), spec)
    } else {
        let text = match (value, spec.upper) {
            (true, false) => "true",
            (false, false) => "false",
            (true, true) => "TRUE",
            (false, true) => "FALSE",
        };
        render::format_str(out, text, spec)
    }
}

/// Selects the [`Formatter`] view for a value's static type.
///
/// Implemented for the built-in types; user types implement it themselves
/// (see the module docs) or are wrapped with [`Formatter::display`].
pub trait FormatValue {
    fn formatter(&self) -> Formatter<'_>;
}

impl FormatValue for bool {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Bool(*self)
    }
}

impl FormatValue for char {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Char(*self)
    }
}

macro_rules! signed_impls {
    ($($ty:ty)+) => {$(
        impl FormatValue for $ty {
            fn formatter(&self) -> Formatter<'_> {
                Formatter::Int(*self as i64)
            }
        }
    )+}
}

macro_rules! unsigned_impls {
    ($($ty:ty)+) => {$(
        impl FormatValue for $ty {
            fn formatter(&self) -> Formatter<'_> {
                Formatter::UInt(*self as u64)
            }
        }
    )+}
}

signed_impls! { i8 i16 i32 i64 isize }
unsigned_impls! { u8 u16 u32 u64 usize }

impl FormatValue for f32 {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Float(f64::from(*self))
    }
}

impl FormatValue for f64 {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Float(*self)
    }
}

impl FormatValue for str {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Str(self)
    }
}

impl FormatValue for String {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Str(self)
    }
}

impl<T: FormatValue + ?Sized> FormatValue for &T {
    fn formatter(&self) -> Formatter<'_> {
        (**self).formatter()
    }
}

impl<T: FormatValue> FormatValue for [T] {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Seq(self.iter().map(FormatValue::formatter).collect())
    }
}

impl<T: FormatValue> FormatValue for Vec<T> {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Seq(self.iter().map(FormatValue::formatter).collect())
    }
}

impl<T: FormatValue, const N: usize> FormatValue for [T; N] {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Seq(self.iter().map(FormatValue::formatter).collect())
    }
}

impl<T: FormatValue> FormatValue for BTreeSet<T> {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Set(self.iter().map(FormatValue::formatter).collect())
    }
}

impl<T: FormatValue, S> FormatValue for HashSet<T, S> {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Set(self.iter().map(FormatValue::formatter).collect())
    }
}

impl<K: FormatValue, V: FormatValue> FormatValue for BTreeMap<K, V> {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Map(
            self.iter()
                .map(|(key, value)| (key.formatter(), value.formatter()))
                .collect(),
        )
    }
}

impl<K: FormatValue, V: FormatValue, S> FormatValue for HashMap<K, V, S> {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Map(
            self.iter()
                .map(|(key, value)| (key.formatter(), value.formatter()))
                .collect(),
        )
    }
}

impl FormatValue for () {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Tuple(Vec::new())
    }
}

macro_rules! tuple_impls {
    ($( ( $($name:ident . $idx:tt),+ ) )+) => {$(
        impl<$($name: FormatValue),+> FormatValue for ($($name,)+) {
            fn formatter(&self) -> Formatter<'_> {
                Formatter::Tuple(vec![$(self.$idx.formatter()),+])
            }
        }
    )+}
}

tuple_impls! {
    (A.0)
    (A.0, B.1)
    (A.0, B.1, C.2)
    (A.0, B.1, C.2, D.3)
}
