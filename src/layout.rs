// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Describes the fixed shape of the bitmaps bmp2dw understands

use crate::error::{Error, Result};
use std::{fmt::Display, str::FromStr};

/// A single 16-bit pixel
pub type Word = u16;

/// Width of the image, in pixels
pub const WIDTH: usize = 128;
/// Height of the image, in pixels
pub const HEIGHT: usize = 128;
/// Size of one [Word] in the input stream
pub const BYTES_PER_PIXEL: usize = std::mem::size_of::<Word>();
/// Number of header bytes skipped before the pixel data
pub const HEADER_LEN: usize = 72;
/// Data-definition directive placed at the start of each line
pub const DIRECTIVE: &str = "dw";
/// Where the table is written when no output is given
pub const OUTPUT: &str = "jura.dat";

/// The dimensions of an image, parsed from `WxH`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Pixels per row
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

impl FromStr for Dimensions {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || Error::InvalidDimensions {
            dims: s.to_string(),
        };
        let lower = s.to_lowercase();
        let (width, height) = lower.split_once('x').ok_or_else(invalid)?;
        let width: usize = width.trim().parse().map_err(|_| invalid())?;
        let height: usize = height.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Where the pixels live in the input file, and how many of them there are
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Pixels per row
    pub width: usize,
    /// Expected number of rows. Only used for diagnostics.
    pub height: usize,
    /// Bytes skipped before the first pixel
    pub header_len: usize,
}

impl Layout {
    /// Constructs a new Layout
    ///
    /// # Examples
    /// ```rust
    /// # use bmp2dw::layout::*;
    /// let layout = Layout::new(128, 128, 72);
    /// assert_eq!(layout, Layout::default());
    /// ```
    pub fn new(width: usize, height: usize, header_len: usize) -> Self {
        Layout {
            width,
            height,
            header_len,
        }
    }
    /// Replaces the width and height with the given [Dimensions]
    pub fn with_dimensions(self, dims: Dimensions) -> Self {
        Layout {
            width: dims.width,
            height: dims.height,
            ..self
        }
    }
    /// Replaces the header length
    pub fn with_header_len(self, header_len: usize) -> Self {
        Layout { header_len, ..self }
    }
    /// Gets the width and height as [Dimensions]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
    /// Number of raw bytes in one complete row
    ///
    /// # Examples
    /// ```rust
    /// # use bmp2dw::layout::*;
    /// assert_eq!(256, Layout::default().row_bytes().unwrap());
    /// // Rows too wide to address are rejected
    /// assert!(Layout::new(usize::MAX, 1, 0).row_bytes().is_err());
    /// ```
    pub fn row_bytes(&self) -> Result<usize> {
        self.width
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(|| self.overflow())
    }
    /// Number of pixels in a complete image
    pub fn pixels(&self) -> Result<usize> {
        self.width
            .checked_mul(self.height)
            .ok_or_else(|| self.overflow())
    }
    fn overflow(&self) -> Error {
        Error::InvalidDimensions {
            dims: self.dimensions().to_string(),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::new(WIDTH, HEIGHT, HEADER_LEN)
    }
}
