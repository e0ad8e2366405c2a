//! The argument list bound to one formatting call.
//!
//! [`Arguments`] is an ordered list of [`Formatter`] views. Positional fields
//! resolve by index into the list; named fields resolve through a secondary
//! name index over the same list. The list borrows its arguments, so it lives
//! at most as long as the values it was built from.
//!
//! Most call sites build one with the [`args!`](crate::args) macro:
//!
//! ```rust
//! use textfmt::{args, format};
//!
//! let line = format("{0}, {who}!", args!["hello", who = "world"]).unwrap();
//! assert_eq!(line, "hello, world!");
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::value::{FormatValue, Formatter};

/// An ordered list of argument views for one formatting call.
///
/// Built once per call and consumed by [`crate::Template::bind`] or the
/// one-shot [`crate::format`]. Named arguments occupy positions in the same
/// list, so they remain addressable by index as well.
#[derive(Clone, Default)]
pub struct Arguments<'a> {
    formatters: Vec<Formatter<'a>>,
    names: IndexMap<String, usize>,
}

impl<'a> Arguments<'a> {
    /// Creates an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Arguments {
            formatters: Vec::new(),
            names: IndexMap::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg<T: FormatValue + ?Sized>(mut self, value: &'a T) -> Self {
        self.formatters.push(value.formatter());
        self
    }

    /// Appends a named argument. It also gets the next positional index.
    #[must_use]
    pub fn named<T: FormatValue + ?Sized>(mut self, name: &str, value: &'a T) -> Self {
        self.names.insert(name.to_string(), self.formatters.len());
        self.formatters.push(value.formatter());
        self
    }

    /// Appends a positional argument through the display fallback, for types
    /// without a [`FormatValue`] implementation.
    #[must_use]
    pub fn display(mut self, value: &'a dyn fmt::Display) -> Self {
        self.formatters.push(Formatter::display(value));
        self
    }

    /// Appends a named argument through the display fallback.
    #[must_use]
    pub fn named_display(mut self, name: &str, value: &'a dyn fmt::Display) -> Self {
        self.names.insert(name.to_string(), self.formatters.len());
        self.formatters.push(Formatter::display(value));
        self
    }

    /// Number of bound arguments, named ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    pub(crate) fn by_index(&self, index: usize) -> Option<&Formatter<'a>> {
        self.formatters.get(index)
    }

    pub(crate) fn by_name(&self, name: &str) -> Option<&Formatter<'a>> {
        self.names
            .get(name)
            .and_then(|&index| self.formatters.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_and_named_share_one_list() {
        let first = 1;
        let second = "two";
        let arguments = Arguments::new().arg(&first).named("second", &second);

        assert_eq!(arguments.len(), 2);
        assert!(arguments.by_index(0).is_some());
        assert!(arguments.by_index(1).is_some());
        assert!(arguments.by_name("second").is_some());
        assert!(arguments.by_name("third").is_none());
        assert!(arguments.by_index(2).is_none());
    }

    #[test]
    fn later_binding_wins_a_name() {
        let a = 1;
        let b = 2;
        let arguments = Arguments::new().named("n", &a).named("n", &b);

        assert_eq!(arguments.len(), 2);
        let formatter = arguments.by_name("n").unwrap();
        let mut out = String::new();
        formatter
            .format(
                &mut out,
                crate::template::Conversion::None,
                &crate::spec::FormatSpec {
                    ty: crate::spec::Presentation::Dec,
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(out, "2");
    }
}
