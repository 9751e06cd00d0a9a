use std::fs::{self, File, OpenOptions};
use std::io::{self, Cursor, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, trace};

use crate::error::UnmaskError;
use crate::layout::{MaskLayout, TRAILER_LEN};
use crate::result::Result;

/// Anything whose length can be changed in place, like a file.
pub trait SetLen {
    fn set_len(&mut self, size: u64) -> io::Result<()>;
}

impl SetLen for File {
    fn set_len(&mut self, size: u64) -> io::Result<()> {
        File::set_len(self, size)
    }
}

impl SetLen for Cursor<Vec<u8>> {
    fn set_len(&mut self, size: u64) -> io::Result<()> {
        let size = usize::try_from(size).map_err(io::Error::other)?;
        self.get_mut().resize(size, 0);
        Ok(())
    }
}

/// Restores a masked file in place.
///
/// On success the file is shrunk to its original size and starts with its
/// original header again. Any validation error leaves the file untouched.
pub fn unmask(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_regular_file(path)?;

    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    let layout = unmask_in_place(&mut file)?;
    debug!(
        "restored {} from {} to {} bytes",
        path.display(),
        layout.file_size(),
        layout.restored_size()
    );

    Ok(())
}

/// Validates a masked file without touching it and returns its layout.
pub fn inspect(path: impl AsRef<Path>) -> Result<MaskLayout> {
    let path = path.as_ref();
    ensure_regular_file(path)?;

    let mut file = File::open(path)?;
    let layout = read_layout(&mut file)?;
    read_disguised_header(&mut file, &layout)?;

    Ok(layout)
}

/// Runs the whole unmask procedure on an open handle.
///
/// Everything up to the header write is read only. Once writing starts any
/// failure is reported as [`UnmaskError::PartialWriteError`].
pub fn unmask_in_place<T>(target: &mut T) -> Result<MaskLayout>
where
    T: Read + Write + Seek + SetLen,
{
    let layout = read_layout(target)?;
    let mut header = read_disguised_header(target, &layout)?;
    header.reverse();

    restore(target, &layout, &header)
        .map_err(|source| UnmaskError::PartialWriteError { source })?;

    Ok(layout)
}

/// Reads and validates the trailer of a masked file.
pub fn read_layout<T: Read + Seek>(source: &mut T) -> Result<MaskLayout> {
    let file_size = source.seek(SeekFrom::End(0))?;
    MaskLayout::check_file_size(file_size)?;

    source.seek(SeekFrom::Start(file_size - TRAILER_LEN))?;
    let mask_length = source
        .read_u32::<LittleEndian>()
        .map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => UnmaskError::TrailerReadError,
            _ => UnmaskError::IoError(e),
        })?;
    debug!("trailer: mask length {mask_length}, file size {file_size}");

    MaskLayout::new(file_size, mask_length)
}

fn read_disguised_header<T: Read + Seek>(source: &mut T, layout: &MaskLayout) -> Result<Vec<u8>> {
    let expected = layout.mask_length();
    source.seek(SeekFrom::Start(layout.header_offset()))?;

    let mut header = vec![0; expected as usize];
    source.read_exact(&mut header).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => UnmaskError::HeaderReadError { expected },
        _ => UnmaskError::IoError(e),
    })?;
    trace!(
        "read {expected} header bytes at offset {}",
        layout.header_offset()
    );

    Ok(header)
}

fn restore<T: Write + Seek + SetLen>(
    target: &mut T,
    layout: &MaskLayout,
    header: &[u8],
) -> io::Result<()> {
    target.seek(SeekFrom::Start(0))?;
    target.write_all(header)?;
    target.flush()?;
    trace!("header written, truncating to {}", layout.restored_size());

    target.set_len(layout.restored_size())
}

fn ensure_regular_file(path: &Path) -> Result<()> {
    if !fs::metadata(path)?.is_file() {
        return Err(UnmaskError::NotARegularFile(path.to_path_buf()));
    }

    Ok(())
}
