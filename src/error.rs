// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Error type for bmp2dw

use std::path::PathBuf;
use thiserror::Error;

/// Result type, equivalent to [std::result::Result]<T, [enum@Error]>
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bmp2dw.
#[derive(Debug, Error)]
pub enum Error {
    /// The input bitmap does not exist
    #[error("input file {path:?} not found")]
    InputNotFound {
        /// The path that was asked for
        path: PathBuf,
    },
    /// A row's raw byte count didn't match the layout's row width
    #[error("row length is not width*byte but {len} / byte = {pixels}")]
    MalformedRow {
        /// The number of raw bytes in the offending row
        len: usize,
        /// The number of pixels that length works out to (may be fractional)
        pixels: f64,
    },
    /// Tried to parse dimensions from a string, but they were nonsense
    #[error("no suitable conversion of \"{dims}\" into dimensions")]
    InvalidDimensions {
        /// The string which failed to become dimensions
        dims: String,
    },
    /// Error originated in [std::io]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
