//! Compile once, render many times: a fixed-width table.
//!
//! Run with: cargo run --example report

use textfmt::{args, Template};

fn main() -> textfmt::Result<()> {
    let header = Template::compile("{:<12}{:>10}{:>12}")?;
    let row = Template::compile("{:<12}{:>10,}{:>12.2f}")?;

    println!("{}", header.format(args!["item", "count", "total"])?);

    let lines = [("widgets", 12_400, 1488.0), ("gadgets", 131, 3013.25), ("gizmos", 7, 41.3)];
    for (item, count, total) in lines {
        println!("{}", row.format(args![item, count, total])?);
    }

    // A totals line through the same compiled template.
    println!("{}", row.format(args!["(all)", 12_538, 4542.55])?);

    Ok(())
}
