//! User-defined types: the display fallback and hand-written views.
//!
//! Run with: cargo run --example custom_types

use std::fmt;

use textfmt::{args, format, Arguments, FormatValue, Formatter};

/// Participates through the display fallback.
struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Participates with its own view, so numeric specs apply to the inner value.
struct Celsius(f64);

impl FormatValue for Celsius {
    fn formatter(&self) -> Formatter<'_> {
        Formatter::Float(self.0)
    }
}

fn main() -> textfmt::Result<()> {
    let release = Version {
        major: 1,
        minor: 4,
        patch: 2,
    };
    let arguments = Arguments::new().named_display("release", &release);
    println!("{}", format("release {release:>10}", arguments)?);

    let outside = Celsius(21.537);
    println!("{}", format("outside: {:+.1f}°C", args![outside])?);

    Ok(())
}
