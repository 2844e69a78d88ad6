//! Print-style message composition
//!
//! [`sprint`] concatenates its operands, adding a space between two adjacent
//! operands only when neither is a string. [`sprintln`] always separates
//! operands with a space and ends the message with a newline.

use std::borrow::Cow;
use std::fmt;

/// A value that can be passed to the print-style logging methods
///
/// Implemented for strings, numbers and a few std types. Other types can opt
/// in with an empty `impl Operand for MyType {}` (they count as non-strings),
/// or be wrapped with [`display`].
pub trait Operand: fmt::Display {
    /// Whether this operand is a string for spacing purposes
    fn is_string(&self) -> bool {
        false
    }
}

impl Operand for str {
    fn is_string(&self) -> bool {
        true
    }
}

impl Operand for String {
    fn is_string(&self) -> bool {
        true
    }
}

impl Operand for Cow<'_, str> {
    fn is_string(&self) -> bool {
        true
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

impl<T: Operand + ?Sized> Operand for Box<T> {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

macro_rules! non_string_operands {
    ($($ty:ty),* $(,)?) => {
        $(impl Operand for $ty {})*
    };
}

non_string_operands!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    fmt::Arguments<'_>,
    std::io::Error,
    std::net::IpAddr,
    std::net::SocketAddr,
    crate::core::error::LoggerError,
    crate::core::severity::Severity,
);

/// Wrapper that lets any `Display` value be used as a non-string operand
#[derive(Debug, Clone, Copy)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> fmt::Display for Displayed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> Operand for Displayed<T> {}

/// Use any `Display` value as an operand.
pub fn display<T: fmt::Display>(value: T) -> Displayed<T> {
    Displayed(value)
}

/// Concatenate operands, spacing only between two adjacent non-strings.
pub fn sprint(args: &[&dyn Operand]) -> String {
    let mut out = String::new();
    let mut previous_is_string = true;
    for (i, arg) in args.iter().enumerate() {
        let is_string = arg.is_string();
        if i > 0 && !is_string && !previous_is_string {
            out.push(' ');
        }
        out.push_str(&arg.to_string());
        previous_is_string = is_string;
    }
    out
}

/// Join operands with single spaces and terminate with a newline.
pub fn sprintln(args: &[&dyn Operand]) -> String {
    let mut out = args
        .iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    out.push('\n');
    out
}

/// Render formatted arguments, terminating with a newline if missing.
pub fn sprintf(args: fmt::Arguments<'_>) -> String {
    let mut out = fmt::format(args);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
