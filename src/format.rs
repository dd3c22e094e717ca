//! Text rendering of designed taps.
use std::fmt::Write;
use std::str::FromStr;

use crate::Error;
use crate::Taps;

/// Output format for designed taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One comma separated line per filter.
    #[default]
    Csv,
    /// A `const` array declaration per filter.
    Rust,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "rust" => Ok(Format::Rust),
            other => Err(Error::InvalidParameter(format!("unknown format '{other}'"))),
        }
    }
}

impl Format {
    /// Render `taps` in this format. `name` is only used by [`Format::Rust`].
    pub fn render(&self, name: &str, taps: &Taps) -> String {
        match self {
            Format::Csv => csv(taps),
            Format::Rust => rust_array(name, taps),
        }
    }
}

/// Comma separated taps in shortest round-trip notation, terminated by a newline.
///
/// ```
/// use firdes::{format, Taps};
///
/// let taps = Taps::new(vec![0.25, 0.5, 0.25]);
/// assert_eq!(format::csv(&taps), "0.25,0.5,0.25\n");
/// ```
pub fn csv(taps: &Taps) -> String {
    format!("{taps}\n")
}

/// Taps as a Rust `const` array of `f32`, one tap per line.
///
/// ```
/// use firdes::{format, Taps};
///
/// let taps = Taps::new(vec![0.5, 0.5]);
/// assert_eq!(
///     format::rust_array("taps1", &taps),
///     "const TAPS1: [f32; 2] = [\n    0.5,\n    0.5,\n];\n"
/// );
/// ```
pub fn rust_array(name: &str, taps: &Taps) -> String {
    let ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    let ident = match ident.chars().next() {
        Some(c) if !c.is_ascii_digit() => ident,
        _ => format!("_{ident}"),
    };

    let mut s = format!("const {ident}: [f32; {}] = [\n", taps.len());
    for tap in taps {
        // writing into a String cannot fail
        let _ = writeln!(s, "    {tap:?},");
    }
    s.push_str("];\n");
    s
}
