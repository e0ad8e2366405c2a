//! The per-field format specification mini-language.
//!
//! A specification is the text after the `:` in a replacement field, e.g. the
//! `_^+10.3f` in `{0:_^+10.3f}`. Its grammar is:
//!
//! ```text
//! spec  := [[fill]align] [sign] ['#'] ['0'] [width] [','] ['.' precision] [type]
//! align := '<' | '>' | '^' | '='
//! sign  := '+' | '-' | ' '
//! type  := 'b'|'o'|'x'|'X'|'d'|'n'|'c'|'s'|'e'|'E'|'f'|'F'|'g'|'G'|'%'
//! ```
//!
//! Parsing is a pure function of the raw text plus the presentation type
//! implied by the argument it is applied to, so the same template can be
//! reused with arguments of different types. Whether a parsed spec is *legal*
//! for a given argument (a sign on a string, a hex float, ...) is checked when
//! the value is rendered, not here.
//!
//! ## Examples
//!
//! ```rust
//! use textfmt::{Align, FormatSpec, Presentation, Sign};
//!
//! let spec = FormatSpec::parse("_^+10.3f", Presentation::General).unwrap();
//! assert_eq!(spec.fill, '_');
//! assert_eq!(spec.align, Align::Center);
//! assert_eq!(spec.sign, Sign::Always);
//! assert_eq!(spec.width, 10);
//! assert_eq!(spec.precision, 3);
//! assert_eq!(spec.ty, Presentation::Fixed);
//! ```

use crate::error::{Error, Result};

/// Horizontal placement of rendered content inside its padded width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Align {
    /// No alignment given: right for numbers, left for strings.
    #[default]
    Default,
    /// `<`
    Left,
    /// `>`
    Right,
    /// `^`
    Center,
    /// `=`: padding goes between the sign or base prefix and the digits, so
    /// zero-padding lands inside the number (`-0042`).
    AfterSign,
}

/// Sign policy for numeric values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Sign {
    /// No sign given: minus for negative values only.
    #[default]
    Default,
    /// `-`: an explicit request for the default policy.
    NegativeOnly,
    /// `+`: always show a sign.
    Always,
    /// ` `: a leading space where the plus sign would be.
    Space,
}

/// Presentation type selected by the trailing type character, or implied by
/// the argument's type when the character is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Presentation {
    /// No type character and no implied default.
    #[default]
    Generic,
    /// `d`, or `n` which also turns on digit grouping.
    Dec,
    /// `b`
    Bin,
    /// `o`
    Oct,
    /// `x` / `X`
    Hex,
    /// `c`: the character with the value's code point.
    Character,
    /// `s`
    Str,
    /// `f` / `F`
    Fixed,
    /// `e` / `E`
    Exp,
    /// `g` / `G`
    General,
    /// `%`: fixed notation of the value times 100, with a percent sign.
    Percent,
}

impl Presentation {
    /// Integer presentations, including `c`.
    pub(crate) fn is_int(self) -> bool {
        matches!(
            self,
            Presentation::Dec
                | Presentation::Bin
                | Presentation::Oct
                | Presentation::Hex
                | Presentation::Character
        )
    }

    /// Floating-point presentations.
    pub(crate) fn is_float(self) -> bool {
        matches!(
            self,
            Presentation::Fixed | Presentation::Exp | Presentation::General | Presentation::Percent
        )
    }

    pub(crate) fn is_numeric(self) -> bool {
        self.is_int() || self.is_float()
    }
}

/// Precision applied when a spec does not give one.
pub(crate) const DEFAULT_PRECISION: usize = 6;

/// A parsed format specification.
///
/// All fields are public so hand-built specs can drive the rendering
/// functions directly, but most specs come from [`FormatSpec::parse`].
#[derive(Clone, Debug, PartialEq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Align,
    pub sign: Sign,
    /// `#`: prepend the base prefix (`0b`/`0o`/`0x`) to integers.
    pub alternate: bool,
    /// `,`: group integer digits in threes.
    pub grouped: bool,
    /// Total field width; 0 leaves the content unpadded.
    pub width: usize,
    pub precision: usize,
    pub ty: Presentation,
    /// Uppercase digits, prefixes and exponents (`X`, `E`, `F`, `G`).
    pub upper: bool,
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec {
            fill: ' ',
            align: Align::Default,
            sign: Sign::Default,
            alternate: false,
            grouped: false,
            width: 0,
            precision: DEFAULT_PRECISION,
            ty: Presentation::Generic,
            upper: false,
        }
    }
}

fn align_of(ch: char) -> Option<Align> {
    match ch {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        '=' => Some(Align::AfterSign),
        _ => None,
    }
}

impl FormatSpec {
    /// Parses a raw spec substring.
    ///
    /// `default_ty` is the presentation type used when the spec has no
    /// trailing type character; it comes from the argument the spec is
    /// applied to (strings imply [`Presentation::Str`], integers
    /// [`Presentation::Dec`], floats [`Presentation::General`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spec`] when the text does not match the spec grammar.
    pub fn parse(raw: &str, default_ty: Presentation) -> Result<FormatSpec> {
        let mut spec = FormatSpec {
            ty: default_ty,
            ..FormatSpec::default()
        };
        let chars: Vec<char> = raw.chars().collect();
        let mut i = 0;

        // fill+align: a fill character is only recognized by the align
        // character following it.
        if chars.len() >= 2 && align_of(chars[1]).is_some() {
            spec.fill = chars[0];
            spec.align = align_of(chars[1]).unwrap_or(Align::Default);
            i = 2;
        } else if let Some(align) = chars.first().copied().and_then(align_of) {
            spec.align = align;
            i = 1;
        }

        match chars.get(i) {
            Some('+') => {
                spec.sign = Sign::Always;
                i += 1;
            }
            Some('-') => {
                spec.sign = Sign::NegativeOnly;
                i += 1;
            }
            Some(' ') => {
                spec.sign = Sign::Space;
                i += 1;
            }
            _ => {}
        }

        if chars.get(i) == Some(&'#') {
            spec.alternate = true;
            i += 1;
        }

        // A leading zero means sign-aware zero padding unless fill and
        // alignment were given explicitly.
        if chars.get(i) == Some(&'0') {
            if spec.align == Align::Default {
                spec.fill = '0';
                spec.align = Align::AfterSign;
            }
            i += 1;
        }

        while let Some(digit) = chars.get(i).and_then(|c| c.to_digit(10)) {
            spec.width = spec
                .width
                .checked_mul(10)
                .and_then(|w| w.checked_add(digit as usize))
                .ok_or_else(|| Error::spec("width out of range"))?;
            i += 1;
        }

        if chars.get(i) == Some(&',') {
            spec.grouped = true;
            i += 1;
        }

        if chars.get(i) == Some(&'.') {
            i += 1;
            let mut digits = 0;
            spec.precision = 0;
            while let Some(digit) = chars.get(i).and_then(|c| c.to_digit(10)) {
                spec.precision = spec
                    .precision
                    .checked_mul(10)
                    .and_then(|p| p.checked_add(digit as usize))
                    .ok_or_else(|| Error::spec("precision out of range"))?;
                digits += 1;
                i += 1;
            }
            if digits == 0 {
                return Err(Error::spec("'.' must be followed by a precision"));
            }
        }

        if let Some(&ch) = chars.get(i) {
            spec.ty = match ch {
                'b' => Presentation::Bin,
                'o' => Presentation::Oct,
                'x' => Presentation::Hex,
                'X' => {
                    spec.upper = true;
                    Presentation::Hex
                }
                'd' => Presentation::Dec,
                'n' => {
                    spec.grouped = true;
                    Presentation::Dec
                }
                'c' => Presentation::Character,
                's' => Presentation::Str,
                'e' => Presentation::Exp,
                'E' => {
                    spec.upper = true;
                    Presentation::Exp
                }
                'f' => Presentation::Fixed,
                'F' => {
                    spec.upper = true;
                    Presentation::Fixed
                }
                'g' => Presentation::General,
                'G' => {
                    spec.upper = true;
                    Presentation::General
                }
                '%' => Presentation::Percent,
                other => {
                    return Err(Error::spec(format!(
                        "unknown presentation type {other:?}"
                    )))
                }
            };
            i += 1;
        }

        if i != chars.len() {
            return Err(Error::spec(format!(
                "unexpected trailing characters in spec {raw:?}"
            )));
        }

        Ok(spec)
    }
}
