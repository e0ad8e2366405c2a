//! The [`args!`](crate::args) constructor macro.

/// Builds an [`Arguments`](crate::Arguments) list from positional values and
/// `name = value` pairs.
///
/// Values are borrowed, not copied, so anything passed in must stay alive
/// until rendering finishes. Named arguments also take the next positional
/// slot, in the order written.
///
/// # Examples
///
/// ```rust
/// use textfmt::{args, format};
///
/// let line = format("{} {} {punct}", args!["hello", "world", punct = "!"]).unwrap();
/// assert_eq!(line, "hello world !");
/// ```
#[macro_export]
macro_rules! args {
    (@acc $arguments:expr $(,)?) => { $arguments };
    (@acc $arguments:expr, $name:ident = $value:expr $(, $($rest:tt)*)?) => {
        $crate::args!(@acc $arguments.named(stringify!($name), &$value) $(, $($rest)*)?)
    };
    (@acc $arguments:expr, $value:expr $(, $($rest:tt)*)?) => {
        $crate::args!(@acc $arguments.arg(&$value) $(, $($rest)*)?)
    };
    () => { $crate::Arguments::new() };
    ($($rest:tt)+) => { $crate::args!(@acc $crate::Arguments::new(), $($rest)+) };
}
