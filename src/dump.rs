// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Dumps data to stdout

use owo_colors::{OwoColorize, Style};
use std::fmt::Write;

/// Renders a hexdump of `bytes`, 16 to a line, with a highlighted offset gutter
///
/// # Examples
/// ```rust
/// # use bmp2dw::dump::hexdump;
/// let dump = hexdump(b"BM");
/// assert!(dump.contains("424d"));
/// ```
pub fn hexdump(bytes: &[u8]) -> String {
    let term = Style::new().bold().green().on_black();
    let mut out = String::new();
    for (index, byte) in bytes.iter().enumerate() {
        if index % 16 == 0 {
            if index != 0 {
                out.push('\n');
            }
            // Writing into a String can't fail
            let _ = write!(out, "{:>03x}{} ", index.style(term), ":".style(term));
        } else if index % 8 == 0 {
            out.push_str("  ");
        } else if index % 2 == 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Prints a hexdump of `bytes` to stdout
pub fn print_hexdump(bytes: &[u8]) {
    println!("{}", hexdump(bytes));
}
