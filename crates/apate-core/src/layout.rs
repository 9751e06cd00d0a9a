//! Geometry of a masked file
//!
//! A masked file is laid out as
//!
//! ```text
//! [ content         ][ reversed header ][ mask length ]
//!   file_size - L - 4        L              4, u32 LE
//! ```
//!
//! where `L` is the mask length stored in the trailer.

use crate::error::UnmaskError;
use crate::result::Result;

/// Width of the mask length trailer at the end of a masked file
pub const TRAILER_LEN: u64 = 4;

/// The validated position of the disguised header and trailer inside a masked file.
///
/// A `MaskLayout` can only be obtained through [`MaskLayout::new`], so every
/// offset derived from it lies inside the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskLayout {
    file_size: u64,
    mask_length: u32,
}

impl MaskLayout {
    /// Fails with [`UnmaskError::TooSmall`] when the file cannot hold a trailer.
    pub fn check_file_size(file_size: u64) -> Result<()> {
        if file_size <= TRAILER_LEN {
            return Err(UnmaskError::TooSmall { size: file_size });
        }

        Ok(())
    }

    /// Validates a trailer value against the size of the file it was read from.
    ///
    /// The mask length must satisfy `0 < mask_length < file_size - 4`, a mask
    /// that would leave no content behind is rejected.
    pub fn new(file_size: u64, mask_length: u32) -> Result<Self> {
        Self::check_file_size(file_size)?;

        let payload_space = file_size - TRAILER_LEN;
        if mask_length == 0 || u64::from(mask_length) >= payload_space {
            return Err(UnmaskError::InvalidMaskLength {
                mask_length,
                file_size,
            });
        }

        let layout = Self {
            file_size,
            mask_length,
        };

        // checked independently of the length bound above
        match file_size
            .checked_sub(TRAILER_LEN)
            .and_then(|s| s.checked_sub(u64::from(mask_length)))
        {
            Some(offset) if offset < file_size => Ok(layout),
            _ => Err(UnmaskError::InvalidHeaderOffset { file_size }),
        }
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn mask_length(&self) -> u32 {
        self.mask_length
    }

    /// Offset of the reversed original header
    pub fn header_offset(&self) -> u64 {
        self.file_size - TRAILER_LEN - u64::from(self.mask_length)
    }

    /// Offset of the 4 byte mask length trailer
    pub fn trailer_offset(&self) -> u64 {
        self.file_size - TRAILER_LEN
    }

    /// Size of the file once header and trailer are removed
    pub fn restored_size(&self) -> u64 {
        self.header_offset()
    }
}
