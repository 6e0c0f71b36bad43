// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Renders words as an assembler data table
//!
//! ```text
//! dw 1234, 5678, ..., 9012
//! dw 3456, ...
//! ```

#[cfg(test)]
mod tests;

use crate::{
    error::{Error, Result},
    layout::{Word, DIRECTIVE, WIDTH},
};
use log::debug;
use std::{
    fmt::{Display, Formatter},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// A table of words, grouped into lines of `per_line` values
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordTable<'w> {
    words: &'w [Word],
    directive: String,
    per_line: usize,
}

impl<'w> WordTable<'w> {
    /// Constructs a table of `words` with the default directive and line length
    ///
    /// # Examples
    /// ```rust
    /// # use bmp2dw::table::WordTable;
    /// let table = WordTable::new(&[1, 2, 3]).per_line(2).unwrap();
    /// assert_eq!(table.to_string(), "dw 1, 2\ndw 3");
    /// ```
    pub fn new(words: &'w [Word]) -> Self {
        WordTable {
            words,
            directive: DIRECTIVE.to_string(),
            per_line: WIDTH,
        }
    }
    /// Sets the directive which begins each line
    pub fn directive(self, directive: impl Into<String>) -> Self {
        WordTable {
            directive: directive.into(),
            ..self
        }
    }
    /// Sets the number of words per line. Zero words per line makes no table.
    pub fn per_line(self, per_line: usize) -> Result<Self> {
        if per_line == 0 {
            return Err(Error::InvalidDimensions {
                dims: "0 words per line".into(),
            });
        }
        Ok(WordTable { per_line, ..self })
    }
    /// Gets the number of lines the table will occupy
    pub fn lines(&self) -> usize {
        self.words.len().div_ceil(self.per_line)
    }
    /// Writes the table to `writer`
    pub fn write_to(&self, mut writer: impl Write) -> Result<()> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }
    /// Creates (or truncates) the file at `path`, and writes the table into it
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Writing {} lines to {}", self.lines(), path.display());
        self.write_to(BufWriter::new(File::create(path)?))
    }
}

impl Display for WordTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, word) in self.words.iter().enumerate() {
            if index % self.per_line == 0 {
                if index != 0 {
                    writeln!(f)?;
                }
                write!(f, "{} {word}", self.directive)?;
            } else {
                write!(f, ", {word}")?;
            }
        }
        Ok(())
    }
}
