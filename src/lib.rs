// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! This crate turns a 16-bit-per-pixel bitmap into a table of `dw` directives,
//! ready to be pasted into (or included by) an assembly source file.
//!
//! The header is skipped without being looked at, and every following pair of
//! bytes becomes one little-endian word.

pub mod dump;
pub mod error;
pub mod layout;
pub mod reader;
pub mod rebuild;
pub mod table;

use error::Result;
use layout::{Layout, DIRECTIVE};
use log::info;
use reader::{Bitmap, Reader};
use std::path::{Path, PathBuf};
use table::WordTable;

/// Selects which order the rows are written out in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    /// The order the rows are stored in the file (bottom row first)
    #[default]
    File,
    /// The order the rows are displayed in (top row first)
    Display,
}

/// Everything [convert] needs to know, besides the paths
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Options {
    /// Shape of the input
    pub layout: Layout,
    /// Directive written at the start of each line
    pub directive: String,
    /// Order of the rows in the table
    pub order: Order,
    /// Reject a trailing partial row
    pub strict: bool,
    /// Hexdump the skipped header to stdout
    pub dump: bool,
    /// Also write the decoded words back out as a bitmap
    pub rebuild: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            layout: Layout::default(),
            directive: DIRECTIVE.to_string(),
            order: Order::default(),
            strict: false,
            dump: false,
            rebuild: None,
        }
    }
}

/// What a successful [convert] produced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Summary {
    /// Number of words decoded
    pub words: usize,
    /// Number of complete rows
    pub rows: usize,
    /// Number of lines in the table
    pub lines: usize,
    /// Number of pixels in a trailing partial row
    pub trailing: usize,
}

/// Reads the bitmap at `input`, and writes its word table to `output`
///
/// # Examples
/// ```rust,no_run
/// # use bmp2dw::*;
/// # fn main() -> bmp2dw::error::Result<()> {
/// let summary = convert("jura.bmp", layout::OUTPUT, &Options::default())?;
/// assert_eq!(128, summary.lines);
/// # Ok(())
/// # }
/// ```
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &Options,
) -> Result<Summary> {
    let bitmap = Reader::new(options.layout)
        .strict(options.strict)
        .open(input)?;
    if options.dump {
        dump::print_hexdump(&bitmap.header);
    }
    let summary = write_table(&bitmap, output, options)?;
    if let Some(path) = &options.rebuild {
        rebuild::write_file(path, &bitmap)?;
    }
    info!(
        "Wrote {} words in {} lines ({} rows)",
        summary.words, summary.lines, summary.rows
    );
    Ok(summary)
}

/// Writes the word table for an already-read [Bitmap] to `output`
pub fn write_table(
    bitmap: &Bitmap,
    output: impl AsRef<Path>,
    options: &Options,
) -> Result<Summary> {
    let display;
    let words = match options.order {
        Order::File => &bitmap.words[..],
        Order::Display => {
            display = bitmap.display_words();
            &display[..]
        }
    };
    let table = WordTable::new(words)
        .directive(options.directive.as_str())
        .per_line(options.layout.width)?;
    table.write_file(output)?;
    Ok(Summary {
        words: words.len(),
        rows: bitmap.rows.len(),
        lines: table.lines(),
        trailing: bitmap.trailing,
    })
}

/// Common imports for bmp2dw
pub mod prelude {
    pub use super::{convert, write_table, Options, Order, Summary};
    pub use crate::error::{Error, Result};
    pub use crate::layout::{Dimensions, Layout, Word};
    pub use crate::reader::{Bitmap, Reader, Row};
    pub use crate::table::WordTable;
}
