#![allow(clippy::module_name_repetitions)]
//! Small utilities: command-line reconstruction and line-oriented text scraping.

pub mod text_lines;

pub use text_lines::{first_line_containing, value_after_first_colon, value_after_last_colon};

/// Reconstruct `program arg1 arg2 ...` for diagnostics.
///
/// Arguments are joined verbatim with single spaces. This is lossy when an argument itself
/// contains whitespace and must never be fed back into a shell.
pub fn command_line(program: &str, args: &[String]) -> String {
    let mut out = String::from(program);
    for a in args {
        out.push(' ');
        out.push_str(a);
    }
    out
}
