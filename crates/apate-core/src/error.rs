use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnmaskError {
    /// Represents a file that cannot even hold the 4 byte length trailer
    #[error("File is too small to carry a mask length trailer ({size} bytes)")]
    TooSmall { size: u64 },

    /// Represents a failure to read the complete 4 byte trailer at the end of the file
    #[error("Mask length trailer could not be read")]
    TrailerReadError,

    /// Represents a trailer value that does not fit the file, for example a file that was never masked
    #[error("Invalid mask length {mask_length} for a file of {file_size} bytes")]
    InvalidMaskLength { mask_length: u32, file_size: u64 },

    /// Represents a disguised header position outside of the file
    #[error("Disguised header offset is out of range for a file of {file_size} bytes")]
    InvalidHeaderOffset { file_size: u64 },

    /// Represents a short read of the disguised header
    #[error("Disguised header could not be read completely, expected {expected} bytes")]
    HeaderReadError { expected: u32 },

    /// Represents a failure while the header was written back or the file was truncated.
    /// The file may be left partially restored.
    #[error("File was left partially restored: {source}")]
    PartialWriteError { source: std::io::Error },

    /// Represents a failure to rename a restored file to its undisguised name
    #[error("Failed to rename {} to {}: {source}", .from.display(), .to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// Represents a path that is not a regular file, for example a directory
    #[error("Not a regular file: {}", .0.display())]
    NotARegularFile(PathBuf),

    /// Represents a target path for a batch run that does not exist
    #[error("Path does not exist: {}", .0.display())]
    TargetNotFound(PathBuf),

    #[error("API Error: No target path set")]
    TargetNotSet,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl UnmaskError {
    /// true if the file might have been modified before the error occurred
    pub fn is_destructive(&self) -> bool {
        matches!(self, UnmaskError::PartialWriteError { .. })
    }
}
