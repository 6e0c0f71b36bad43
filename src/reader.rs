// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Reads the pixel words out of a bitmap
//!
//! BMP stores its rows bottom-up, so alongside the flat sequence of words the
//! reader builds an image buffer of [Row]s in top-down display order.


use crate::{
    error::{Error, Result},
    layout::{Layout, Word, BYTES_PER_PIXEL, HEADER_LEN, WIDTH},
};
use log::{debug, trace, warn};
use std::{
    collections::VecDeque,
    fs::File,
    io::{BufReader, ErrorKind, Read},
    path::Path,
};

/// One horizontal line of pixels
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Row {
    words: Vec<Word>,
}

impl Row {
    /// Builds a row from its raw little-endian bytes, checking that they
    /// make up exactly `width` pixels
    ///
    /// # Examples
    /// ```rust
    /// # use bmp2dw::reader::Row;
    /// let row = Row::from_bytes(&[0x34, 0x12, 0x78, 0x56], 2).unwrap();
    /// assert_eq!(row.words(), &[0x1234, 0x5678]);
    /// // Three bytes are never two pixels
    /// assert!(Row::from_bytes(&[0x34, 0x12, 0x78], 2).is_err());
    /// ```
    pub fn from_bytes(raw: &[u8], width: usize) -> Result<Row> {
        if width.checked_mul(BYTES_PER_PIXEL) != Some(raw.len()) {
            return Err(Error::MalformedRow {
                len: raw.len(),
                pixels: raw.len() as f64 / BYTES_PER_PIXEL as f64,
            });
        }
        Ok(Row {
            words: raw
                .chunks_exact(BYTES_PER_PIXEL)
                .map(|pair| Word::from_le_bytes([pair[0], pair[1]]))
                .collect(),
        })
    }
    /// Gets the words in this row, left to right
    pub fn words(&self) -> &[Word] {
        &self.words
    }
    /// Gets the number of pixels in this row
    pub fn len(&self) -> usize {
        self.words.len()
    }
    /// Returns true if the row holds no pixels
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Everything recovered from one pass over a bitmap
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bitmap {
    /// The skipped header bytes, uninterpreted
    pub header: Vec<u8>,
    /// Every decoded word, in file order (bottom row first)
    pub words: Vec<Word>,
    /// Every complete row, in display order (top row first)
    pub rows: VecDeque<Row>,
    /// Number of pixels in an incomplete final row, or 0
    pub trailing: usize,
}

impl Bitmap {
    /// Reads a bitmap from a file with the default [Reader]
    pub fn open(path: impl AsRef<Path>, layout: Layout) -> Result<Bitmap> {
        Reader::new(layout).open(path)
    }
    /// Gets the words in display order, top row first
    ///
    /// A partial row at the end of the file is the top of the image, so it
    /// comes first.
    ///
    /// # Examples
    /// ```rust
    /// # use bmp2dw::{layout::Layout, reader::Reader};
    /// # fn main() -> bmp2dw::error::Result<()> {
    /// let layout = Layout::new(2, 2, 0);
    /// let bitmap = Reader::new(layout).read(&[1u8, 0, 2, 0, 3, 0, 4, 0, 5, 0][..])?;
    /// assert_eq!(bitmap.words, [1, 2, 3, 4, 5]);
    /// assert_eq!(bitmap.display_words(), [5, 3, 4, 1, 2]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn display_words(&self) -> Vec<Word> {
        let complete: usize = self.rows.iter().map(Row::len).sum();
        let partial: &[Word] = self.words.get(complete..).unwrap_or_default();
        partial
            .iter()
            .copied()
            .chain(self.rows.iter().flat_map(|row| row.words().iter().copied()))
            .collect()
    }
}

/// Decodes bitmaps according to a [Layout]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reader {
    layout: Layout,
    strict: bool,
}

impl Reader {
    /// Constructs a new, lenient Reader
    pub fn new(layout: Layout) -> Self {
        Reader {
            layout,
            strict: false,
        }
    }
    /// When strict, an incomplete final row is a [Error::MalformedRow]
    pub fn strict(self, strict: bool) -> Self {
        Reader { strict, ..self }
    }
    /// Gets the [Layout] this reader decodes with
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
    /// Opens the file at `path` and reads a [Bitmap] out of it
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Bitmap> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::InputNotFound {
                path: path.to_owned(),
            },
            _ => e.into(),
        })?;
        debug!("Reading {}", path.display());
        self.read(BufReader::new(file))
    }
    /// Reads a [Bitmap] out of any byte source
    pub fn read(&self, mut input: impl Read) -> Result<Bitmap> {
        let Layout {
            width, header_len, ..
        } = self.layout;
        let row_bytes = self.layout.row_bytes()?;

        // The header is skipped blindly
        let mut header = Vec::with_capacity(header_len.min(HEADER_LEN));
        input
            .by_ref()
            .take(header_len as u64)
            .read_to_end(&mut header)?;
        if header.len() < header_len {
            warn!("Input ended inside the header ({} bytes)", header.len());
        }

        let mut bitmap = Bitmap {
            header,
            ..Default::default()
        };
        let mut row = Vec::with_capacity(row_bytes.min(WIDTH * BYTES_PER_PIXEL));
        let mut pixel = 0;
        let mut bytes = input.bytes();
        loop {
            let Some(b1) = bytes.next().transpose()? else {
                break;
            };
            let Some(b2) = bytes.next().transpose()? else {
                debug!("Ignoring lone trailing byte {b1:02x}");
                break;
            };
            bitmap.words.push(Word::from_le_bytes([b1, b2]));
            row.extend([b1, b2]);
            pixel += 1;

            if pixel == width {
                bitmap.rows.push_front(Row::from_bytes(&row, width)?);
                trace!("Row {} complete", bitmap.rows.len());
                row.clear();
                pixel = 0;
            }
        }

        if pixel != 0 {
            if self.strict {
                Row::from_bytes(&row, width)?;
            }
            warn!("Final row is incomplete: {pixel} of {width} pixels");
            bitmap.trailing = pixel;
        }
        if bitmap.rows.len() != self.layout.height {
            warn!(
                "Expected {} rows, found {}",
                self.layout.height,
                bitmap.rows.len()
            );
        }
        debug!(
            "Decoded {} words in {} rows",
            bitmap.words.len(),
            bitmap.rows.len()
        );
        Ok(bitmap)
    }
}
