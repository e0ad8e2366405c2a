//! Template compilation.
//!
//! A template is literal text mixed with replacement fields:
//!
//! ```text
//! field := '{' [ref] ['!' conv] [':' spec] '}'
//! ref   := digits | identifier     ; omitted => next implicit index
//! conv  := 's' | 'r'
//! ```
//!
//! `{{` and `}}` escape to literal braces. Compilation turns the text into an
//! immutable sequence of [`Instruction`]s held behind an [`Arc`], so a
//! [`Template`] is cheap to clone and safe to render from many threads at
//! once. The spec substring of each field is kept verbatim: its grammar is
//! checked when the field is rendered, against the type of the argument it
//! resolves to, because the same template may be reused with arguments of
//! different types.
//!
//! ## Examples
//!
//! ```rust
//! use textfmt::{args, Template};
//!
//! let template = Template::compile("{0:>6} {1}").unwrap();
//! let narrow = template.format(args![1, "st"]).unwrap();
//! let wide = template.format(args![2000, "nd"]).unwrap();
//! assert_eq!(narrow, "     1 st");
//! assert_eq!(wide, "  2000 nd");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::args::Arguments;
use crate::bound::Bound;
use crate::error::{Error, Result};

/// How a field converts its argument before the spec applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Conversion {
    /// Type-specific rendering, driven by the spec.
    #[default]
    None,
    /// `!s`: the plain textual form, then the spec applies to that text.
    Str,
    /// `!r`: the quoted formal form, then the spec applies to that text.
    Repr,
}

/// Reference from a field to one bound argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgRef {
    Index(usize),
    Name(String),
}

impl fmt::Display for ArgRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgRef::Index(index) => write!(f, "positional argument {index}"),
            ArgRef::Name(name) => write!(f, "argument {name:?}"),
        }
    }
}

/// One compiled template instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Text reproduced verbatim.
    Literal(String),
    /// A replacement field; `spec` is the raw, still-unparsed spec substring.
    Field {
        reference: ArgRef,
        conversion: Conversion,
        spec: String,
    },
}

/// A compiled template.
///
/// Immutable after construction. Cloning shares the instruction sequence, and
/// any number of threads may render from the same template concurrently.
#[derive(Clone, Debug)]
pub struct Template {
    instructions: Arc<[Instruction]>,
}

impl Template {
    /// Compiles template text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for unterminated fields, stray `}`, unknown
    /// conversion characters, malformed references, or templates that mix
    /// implicit (`{}`) and explicit (`{0}`) positional references.
    pub fn compile(template: &str) -> Result<Self> {
        Parser::new(template).run()
    }

    /// The inert template used by the release-build debug stubs.
    #[cfg_attr(debug_assertions, allow(dead_code))]
    pub(crate) fn empty() -> Self {
        Template {
            instructions: Vec::new().into(),
        }
    }

    /// Binds this template to one call's arguments.
    #[must_use]
    pub fn bind<'a>(&self, arguments: Arguments<'a>) -> Bound<'a> {
        Bound::new(self.clone(), arguments)
    }

    /// Binds and renders in one step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spec`] or [`Error::Reference`] as rendering does.
    pub fn format(&self, arguments: Arguments<'_>) -> Result<String> {
        self.bind(arguments).render()
    }

    pub(crate) fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Template::compile(s)
    }
}

/// Tracks whether the template picked implicit or explicit positional
/// indexing; the two cannot be mixed.
enum Indexing {
    Unknown,
    Auto(usize),
    Manual,
}

struct Parser<'a> {
    input: &'a str,
    position: usize,
    instructions: Vec<Instruction>,
    literal: String,
    indexing: Indexing,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            instructions: Vec::new(),
            literal: String::new(),
            indexing: Indexing::Unknown,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.position..].chars();
        chars.next();
        chars.next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.instructions
                .push(Instruction::Literal(std::mem::take(&mut self.literal)));
        }
    }

    fn run(mut self) -> Result<Template> {
        while let Some(ch) = self.peek_char() {
            match ch {
                '{' if self.peek_second() == Some('{') => {
                    self.next_char();
                    self.next_char();
                    self.literal.push('{');
                }
                '{' => self.field()?,
                '}' if self.peek_second() == Some('}') => {
                    self.next_char();
                    self.next_char();
                    self.literal.push('}');
                }
                '}' => {
                    return Err(Error::parse(
                        self.position,
                        "single '}' outside a field; use '}}' for a literal brace",
                    ));
                }
                _ => {
                    self.literal.push(ch);
                    self.next_char();
                }
            }
        }
        self.flush_literal();
        Ok(Template {
            instructions: self.instructions.into(),
        })
    }

    fn field(&mut self) -> Result<()> {
        let start = self.position;
        self.next_char(); // the opening '{'
        self.flush_literal();

        let ref_start = self.position;
        while let Some(ch) = self.peek_char() {
            if matches!(ch, '!' | ':' | '}') {
                break;
            }
            self.next_char();
        }
        let reference = self.resolve_reference(start, ref_start)?;

        let mut conversion = Conversion::None;
        if self.peek_char() == Some('!') {
            self.next_char();
            conversion = match self.next_char() {
                Some('s') => Conversion::Str,
                Some('r') => Conversion::Repr,
                Some(other) => {
                    return Err(Error::parse(
                        start,
                        format!("unknown conversion {other:?}; expected 's' or 'r'"),
                    ));
                }
                None => return Err(Error::parse(start, "unterminated field")),
            };
        }

        let mut spec = String::new();
        if self.peek_char() == Some(':') {
            self.next_char();
            let spec_start = self.position;
            while let Some(ch) = self.peek_char() {
                if ch == '}' {
                    break;
                }
                self.next_char();
            }
            spec = self.input[spec_start..self.position].to_string();
        }

        match self.next_char() {
            Some('}') => {
                self.instructions.push(Instruction::Field {
                    reference,
                    conversion,
                    spec,
                });
                Ok(())
            }
            Some(other) => Err(Error::parse(
                start,
                format!("expected '}}' to close the field, found {other:?}"),
            )),
            None => Err(Error::parse(start, "unterminated field")),
        }
    }

    fn resolve_reference(&mut self, field_start: usize, ref_start: usize) -> Result<ArgRef> {
        let text = &self.input[ref_start..self.position];
        if text.is_empty() {
            match self.indexing {
                Indexing::Manual => Err(Error::parse(
                    field_start,
                    "cannot mix implicit and explicit positional references",
                )),
                Indexing::Unknown => {
                    self.indexing = Indexing::Auto(1);
                    Ok(ArgRef::Index(0))
                }
                Indexing::Auto(next) => {
                    self.indexing = Indexing::Auto(next + 1);
                    Ok(ArgRef::Index(next))
                }
            }
        } else if text.bytes().all(|b| b.is_ascii_digit()) {
            if matches!(self.indexing, Indexing::Auto(_)) {
                return Err(Error::parse(
                    field_start,
                    "cannot mix implicit and explicit positional references",
                ));
            }
            self.indexing = Indexing::Manual;
            let index = text
                .parse()
                .map_err(|_| Error::parse(field_start, "positional index out of range"))?;
            Ok(ArgRef::Index(index))
        } else if is_identifier(text) {
            Ok(ArgRef::Name(text.to_string()))
        } else {
            Err(Error::parse(
                field_start,
                format!("invalid field reference {text:?}"),
            ))
        }
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(first) if first == '_' || first.is_ascii_alphabetic())
        && chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructions(template: &str) -> Vec<Instruction> {
        Template::compile(template).unwrap().instructions().to_vec()
    }

    fn field(reference: ArgRef, conversion: Conversion, spec: &str) -> Instruction {
        Instruction::Field {
            reference,
            conversion,
            spec: spec.to_string(),
        }
    }

    #[test]
    fn literal_only() {
        assert_eq!(
            instructions("plain text"),
            vec![Instruction::Literal("plain text".to_string())]
        );
        assert_eq!(instructions(""), vec![]);
    }

    #[test]
    fn brace_escapes() {
        assert_eq!(
            instructions("a {{b}} c"),
            vec![Instruction::Literal("a {b} c".to_string())]
        );
    }

    #[test]
    fn implicit_references_count_up() {
        assert_eq!(
            instructions("{} and {}"),
            vec![
                field(ArgRef::Index(0), Conversion::None, ""),
                Instruction::Literal(" and ".to_string()),
                field(ArgRef::Index(1), Conversion::None, ""),
            ]
        );
    }

    #[test]
    fn explicit_and_named_references() {
        assert_eq!(
            instructions("{1}{0}{name}"),
            vec![
                field(ArgRef::Index(1), Conversion::None, ""),
                field(ArgRef::Index(0), Conversion::None, ""),
                field(ArgRef::Name("name".to_string()), Conversion::None, ""),
            ]
        );
    }

    #[test]
    fn conversions_and_specs() {
        assert_eq!(
            instructions("{0!r:>10}{x!s}{:_^5d}"),
            vec![
                field(ArgRef::Index(0), Conversion::Repr, ">10"),
                field(ArgRef::Name("x".to_string()), Conversion::Str, ""),
                field(ArgRef::Index(0), Conversion::None, "_^5d"),
            ]
        );
    }

    #[test]
    fn spec_text_is_kept_verbatim() {
        // Even nonsense specs compile; they fail later, against the argument.
        assert_eq!(
            instructions("{:this is no spec}"),
            vec![field(ArgRef::Index(0), Conversion::None, "this is no spec")]
        );
    }

    #[test]
    fn rejects_mixed_indexing() {
        let auto_then_manual = Template::compile("{} {0}").unwrap_err();
        assert!(auto_then_manual.is_parse());
        let manual_then_auto = Template::compile("{0} {}").unwrap_err();
        assert!(manual_then_auto.is_parse());
    }

    #[test]
    fn named_fields_do_not_disturb_indexing() {
        assert_eq!(
            instructions("{name} {} {}"),
            vec![
                field(ArgRef::Name("name".to_string()), Conversion::None, ""),
                Instruction::Literal(" ".to_string()),
                field(ArgRef::Index(0), Conversion::None, ""),
                Instruction::Literal(" ".to_string()),
                field(ArgRef::Index(1), Conversion::None, ""),
            ]
        );
    }

    #[test]
    fn rejects_malformed_templates() {
        for bad in ["{", "{0", "{0!", "{0!x}", "}", "a } b", "{0:>5", "{ }"] {
            let error = Template::compile(bad).unwrap_err();
            assert!(error.is_parse(), "{bad:?} should fail to parse");
        }
    }

    #[test]
    fn nested_fields_are_not_supported() {
        // A '{' inside the spec is swallowed verbatim; the field then ends at
        // the first '}', leaving the rest of the text to fail or not on its
        // own terms.
        let error = Template::compile("{:{width}}").unwrap_err();
        assert!(error.is_parse());
    }

    #[test]
    fn template_is_cheap_to_share() {
        let template = Template::compile("{0}").unwrap();
        let clone = template.clone();
        assert_eq!(template.instructions(), clone.instructions());
    }
}
