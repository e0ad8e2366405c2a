//! Your first textfmt experience: one-shot formatting.
//!
//! Run with: cargo run --example simple

use textfmt::{args, format};

fn main() -> textfmt::Result<()> {
    // Implicit positional fields, in order.
    println!("{}", format("{} + {} = {}", args![2, 3, 2 + 3])?);

    // Explicit indices can repeat and reorder.
    println!("{}", format("{1} before {0}", args!["beta", "alpha"])?);

    // Named fields.
    println!(
        "{}",
        format("{name} scored {score:.1%}", args![name = "ada", score = 0.97])?
    );

    // Specs: fill, alignment, width, sign, base.
    println!("{}", format("[{:_^20}]", args!["centered"])?);
    println!("{}", format("{:+06}", args![42])?);
    println!("{}", format("{0:#b} {0:#o} {0:#x}", args![199])?);

    // Containers render themselves.
    println!("{}", format("{}", args![vec![1, 2, 3]])?);

    Ok(())
}
