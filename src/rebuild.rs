// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Writes decoded words back out as a bitmap, for checking the decode by eye

use crate::{error::Result, layout::Word, reader::Bitmap};
use log::debug;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Writes `header` followed by each of `words` in little-endian order
///
/// # Examples
/// ```rust
/// # use bmp2dw::rebuild::write_bitmap;
/// # fn main() -> bmp2dw::error::Result<()> {
/// let mut out = vec![];
/// write_bitmap(&mut out, b"BM", &[0x1234])?;
/// assert_eq!(out, b"BM\x34\x12");
/// # Ok(())
/// # }
/// ```
pub fn write_bitmap(mut writer: impl Write, header: &[u8], words: &[Word]) -> Result<()> {
    writer.write_all(header)?;
    for word in words {
        writer.write_all(&word.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path`, and rebuilds `bitmap` into it
pub fn write_file(path: impl AsRef<Path>, bitmap: &Bitmap) -> Result<()> {
    let path = path.as_ref();
    debug!("Rebuilding bitmap into {}", path.display());
    write_bitmap(
        BufWriter::new(File::create(path)?),
        &bitmap.header,
        &bitmap.words,
    )
}
