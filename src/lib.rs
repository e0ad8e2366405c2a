//! # textfmt
//!
//! A runtime format-string engine: compile `{}`-style templates once, render
//! them any number of times with typed arguments.
//!
//! ## What it does
//!
//! A template is literal text with replacement fields. Each field names an
//! argument (by position or name), may force a conversion (`!s` plain text,
//! `!r` quoted), and may carry a format spec controlling fill, alignment,
//! sign, base or notation, width, precision and digit grouping:
//!
//! ```text
//! field := '{' [ref] ['!' conv] [':' spec] '}'
//! spec  := [[fill]align] [sign] ['#'] ['0'] [width] [','] ['.' precision] [type]
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use textfmt::{args, format};
//!
//! let line = format("{}, {}!", args!["hello", "world"]).unwrap();
//! assert_eq!(line, "hello, world!");
//!
//! // Alignment, fill, bases, precision...
//! assert_eq!(format("{:_^11}", args!["hi"]).unwrap(), "____hi_____");
//! assert_eq!(format("{:#x}", args![255]).unwrap(), "0xff");
//! assert_eq!(format("{:+08.2f}", args![3.14159]).unwrap(), "+0003.14");
//!
//! // Named fields.
//! let line = format("{greeting}, {name}!", args![greeting = "hi", name = "you"]);
//! assert_eq!(line.unwrap(), "hi, you!");
//! ```
//!
//! ## Compile once, render many times
//!
//! Compilation is the expensive half, so templates are first-class values:
//! immutable, cheap to clone, and safe to share across threads.
//!
//! ```rust
//! use textfmt::{args, Template};
//!
//! let row = Template::compile("{0:<10}{1:>8.2f}").unwrap();
//! assert_eq!(row.format(args!["apples", 1.5]).unwrap(), "apples        1.50");
//! assert_eq!(row.format(args!["pears", 12.0]).unwrap(), "pears        12.00");
//! ```
//!
//! Field specs are validated against each call's argument types, not at
//! compile time, so the same template can serve arguments of different types
//! across calls.
//!
//! ## Deferred rendering
//!
//! [`Template::bind`] (or the free [`bind`]) pairs a template with arguments
//! without rendering yet; the result renders on demand into a `String`, an
//! [`std::io::Write`] sink, or through `Display`:
//!
//! ```rust
//! use textfmt::{args, bind};
//!
//! let total = 3;
//! let bound = bind("{} items", args![total]).unwrap();
//! let mut report = String::from("cart: ");
//! bound.write_into(&mut report).unwrap();
//! assert_eq!(report, "cart: 3 items");
//! ```
//!
//! Arguments are borrowed, never copied, so they must outlive the bound
//! value; the borrow checker enforces exactly the "argument outlives the
//! call" window.
//!
//! ## Diagnostic-only formatting
//!
//! [`debug_format`] and [`debug_compile`] behave like [`format`] and
//! [`compile`] in debug builds and are documented no-ops in release builds
//! (`debug_assertions` off): no parsing, no rendering, an empty result. Use
//! them for formatting calls that only feed diagnostics.
//!
//! ## Errors
//!
//! All failures are recoverable [`Error`] values: template grammar problems
//! surface at compile time, spec legality and missing arguments at render
//! time. See the [`error`] module for the split.

pub mod args;
pub mod bound;
pub mod error;
pub mod macros;
mod render;
pub mod spec;
pub mod template;
pub mod value;

pub use args::Arguments;
pub use bound::Bound;
pub use error::{Error, Result};
pub use spec::{Align, FormatSpec, Presentation, Sign};
pub use template::{ArgRef, Conversion, Instruction, Template};
pub use value::{FormatValue, Formatter};

/// Compiles a template for repeated use.
///
/// # Examples
///
/// ```rust
/// use textfmt::{args, compile};
///
/// let template = compile("{:>4}").unwrap();
/// assert_eq!(template.format(args![7]).unwrap(), "   7");
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if the template violates the field grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn compile(template: &str) -> Result<Template> {
    Template::compile(template)
}

/// Compiles, binds and renders in one step.
///
/// # Examples
///
/// ```rust
/// use textfmt::{args, format};
///
/// assert_eq!(format("{} = {:#06b}", args!["bits", 5]).unwrap(), "bits = 0b0101");
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`], [`Error::Spec`] or [`Error::Reference`] as
/// compilation and rendering do.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format(template: &str, arguments: Arguments<'_>) -> Result<String> {
    Template::compile(template)?.format(arguments)
}

/// Compiles and binds, deferring the render.
///
/// Useful for writing straight into a destination without an intermediate
/// buffer; see [`Bound`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if the template violates the field grammar;
/// rendering errors surface when the bound value is rendered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn bind<'a>(template: &str, arguments: Arguments<'a>) -> Result<Bound<'a>> {
    Ok(Template::compile(template)?.bind(arguments))
}

/// [`format`] for diagnostic-only call sites.
///
/// In release builds this is a no-op that performs no parsing or rendering
/// and returns an empty string.
#[cfg(debug_assertions)]
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn debug_format(template: &str, arguments: Arguments<'_>) -> Result<String> {
    format(template, arguments)
}

/// [`format`] for diagnostic-only call sites.
///
/// In release builds this is a no-op that performs no parsing or rendering
/// and returns an empty string.
#[cfg(not(debug_assertions))]
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn debug_format(_template: &str, _arguments: Arguments<'_>) -> Result<String> {
    Ok(String::new())
}

/// [`compile`] for diagnostic-only call sites.
///
/// In release builds this is a no-op that performs no parsing and returns an
/// inert template rendering nothing.
#[cfg(debug_assertions)]
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn debug_compile(template: &str) -> Result<Template> {
    compile(template)
}

/// [`compile`] for diagnostic-only call sites.
///
/// In release builds this is a no-op that performs no parsing and returns an
/// inert template rendering nothing.
#[cfg(not(debug_assertions))]
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn debug_compile(_template: &str) -> Result<Template> {
    Ok(Template::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_format() {
        assert_eq!(format("{} + {} = {}", args![1, 2, 3]).unwrap(), "1 + 2 = 3");
    }

    #[test]
    fn compile_then_reuse() {
        let template = compile("[{:^5}]").unwrap();
        assert_eq!(template.format(args![1]).unwrap(), "[  1  ]");
        assert_eq!(template.format(args!["ab"]).unwrap(), "[ ab  ]");
    }

    #[test]
    fn bind_then_render_later() {
        let value = 99;
        let bound = bind("{0}%", args![value]).unwrap();
        assert_eq!(bound.render().unwrap(), "99%");
    }

    #[test]
    fn debug_helpers_match_format_in_debug_builds() {
        // Tests run with debug_assertions on.
        assert_eq!(debug_format("{}", args![5]).unwrap(), "5");
        let template = debug_compile("{}").unwrap();
        assert_eq!(template.format(args![5]).unwrap(), "5");
    }

    #[test]
    fn templates_can_be_shared_across_threads() {
        let template = compile("{0:03}").unwrap();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let template = template.clone();
                std::thread::spawn(move || template.format(args![i]).unwrap())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), std::format!("{i:03}"));
        }
    }
}
