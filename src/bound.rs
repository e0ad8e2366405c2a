//! A template paired with the arguments of one call.
//!
//! [`Bound`] drives rendering: it walks the compiled instruction sequence,
//! copies literal runs verbatim, and for each field resolves the referenced
//! argument, parses the field's raw spec against that argument's type, and
//! invokes the argument's render operation.
//!
//! Rendering never mutates the template or the arguments, so it is
//! idempotent: rendering the same `Bound` twice produces identical output.
//!
//! ## Examples
//!
//! ```rust
//! use textfmt::{args, Template};
//!
//! let template = Template::compile("{:>5}!").unwrap();
//! let bound = template.bind(args![42]);
//! assert_eq!(bound.render().unwrap(), "   42!");
//! assert_eq!(bound.render().unwrap(), "   42!");
//!
//! // Deferred rendering also works through Display.
//! assert_eq!(format!("->{bound}<-"), "->   42!<-");
//! ```

use std::fmt;
use std::io;

use crate::args::Arguments;
use crate::error::{Error, Result};
use crate::spec::{FormatSpec, Presentation};
use crate::template::{ArgRef, Conversion, Instruction, Template};

/// A compiled template bound to one call's arguments, ready to render.
///
/// The template is shared; the arguments are exclusively owned. A `Bound`
/// lives at most as long as the arguments it borrows.
pub struct Bound<'a> {
    template: Template,
    arguments: Arguments<'a>,
}

impl<'a> Bound<'a> {
    pub(crate) fn new(template: Template, arguments: Arguments<'a>) -> Self {
        Bound {
            template,
            arguments,
        }
    }

    /// Executes the instruction sequence, appending to `out`.
    ///
    /// On failure, everything rendered before the failing field is left in
    /// `out`; callers needing atomicity should render into a scratch buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reference`] for fields naming unbound arguments and
    /// [`Error::Spec`] for specs that are malformed or illegal for the
    /// resolved argument's type.
    pub fn write_into(&self, out: &mut String) -> Result<()> {
        for instruction in self.template.instructions() {
            match instruction {
                Instruction::Literal(text) => out.push_str(text),
                Instruction::Field {
                    reference,
                    conversion,
                    spec,
                } => {
                    let formatter = match reference {
                        ArgRef::Index(index) => self.arguments.by_index(*index),
                        ArgRef::Name(name) => self.arguments.by_name(name),
                    }
                    .ok_or_else(|| Error::Reference(reference.clone()))?;

                    // Under a conversion the outer spec applies to the
                    // converted text, so it defaults to a string spec.
                    let default_ty = match conversion {
                        Conversion::None => formatter.default_presentation(),
                        Conversion::Str | Conversion::Repr => Presentation::Str,
                    };
                    let parsed = FormatSpec::parse(spec, default_ty)?;
                    formatter.format(out, *conversion, &parsed)?;
                }
            }
        }
        Ok(())
    }

    /// Renders into a fresh string.
    ///
    /// # Errors
    ///
    /// See [`Bound::write_into`].
    pub fn render(&self) -> Result<String> {
        // Reasonable starting capacity for typical templates.
        let mut out = String::with_capacity(64);
        self.write_into(&mut out)?;
        Ok(out)
    }

    /// Renders and writes the bytes to `writer`.
    ///
    /// # Errors
    ///
    /// Returns rendering errors as [`Bound::write_into`] does, and
    /// [`Error::Io`] if the writer fails.
    pub fn to_writer<W: io::Write>(&self, mut writer: W) -> Result<()> {
        let text = self.render()?;
        writer
            .write_all(text.as_bytes())
            .map_err(|e| Error::io(&e.to_string()))
    }
}

impl fmt::Display for Bound<'_> {
    /// Best-effort rendering: failures collapse into `fmt::Error`. Use
    /// [`Bound::render`] to keep the error details.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
