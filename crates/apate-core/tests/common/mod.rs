#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// start of an mp4 container, used as cover header
pub const COVER: &[u8] = b"\x00\x00\x00\x20ftypisom\x00\x00\x02\x00isomiso2avc1mp41";

/// Masks `original` the way Apate does: the first `mask_length` bytes are
/// replaced by a cover header and stored reversed at the end, followed by
/// the length trailer.
pub fn mask(original: &[u8], mask_length: usize) -> Vec<u8> {
    assert!(mask_length > 0 && mask_length <= original.len());

    let mut data: Vec<u8> = COVER.iter().copied().cycle().take(mask_length).collect();
    data.extend_from_slice(&original[mask_length..]);
    data.extend(original[..mask_length].iter().rev());
    data.extend((mask_length as u32).to_le_bytes());
    data
}

pub fn with_trailer(content: &[u8], trailer: u32) -> Vec<u8> {
    let mut data = content.to_vec();
    data.extend(trailer.to_le_bytes());
    data
}

pub fn write_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent folder");
    }
    fs::write(&path, data).expect("Failed to write test file");
    path
}

pub fn write_masked(dir: &Path, name: &str, original: &[u8], mask_length: usize) -> PathBuf {
    write_file(dir, name, &mask(original, mask_length))
}
