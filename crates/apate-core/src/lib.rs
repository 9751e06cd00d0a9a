//! # Apate Core API
//!
//! Restores files that were disguised by Apate header masking. A masked file
//! has its original header moved to the end in reversed byte order, followed
//! by a 4 byte little endian trailer holding the header length. Usually it
//! also carries a fake extension like `.mp4`.
//!
//! - [`unmask`] restores one file in place
//! - [`strip_disguise_suffix`] computes the undisguised file name
//! - [`api::reveal`] finds, gates and restores many files
//!
//! # Usage Examples
//!
//! ## Restore a single file
//!
//! ```rust
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let masked = temp_dir.path().join("notes.txt.mp4");
//! // "hello" with its first two bytes disguised as "MP"
//! fs::write(&masked, b"MPllo\x65\x68\x02\x00\x00\x00").unwrap();
//!
//! apate_core::unmask(&masked).expect("Failed to unmask file");
//!
//! assert_eq!(fs::read(&masked).unwrap(), b"hello");
//! assert_eq!(
//!     apate_core::strip_disguise_suffix(&masked, "mp4"),
//!     temp_dir.path().join("notes.txt")
//! );
//! ```
//!
//! ## Restore a folder after asking for permission
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! let plan = apate_core::api::reveal::prepare()
//!     .from_target(temp_dir.path())
//!     .with_suffix("mp4")
//!     .plan()
//!     .expect("Failed to look up candidates");
//!
//! let stats = if plan.is_empty() {
//!     plan.decline()
//! } else {
//!     plan.execute()
//! };
//! assert_eq!(stats.total, 0);
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod batch;
pub mod commands;
pub mod error;
pub mod layout;
pub mod result;
pub mod suffix;
pub mod unmask;

pub use crate::batch::{BatchStats, FileOutcome, RevealOptions};
pub use crate::error::UnmaskError;
pub use crate::layout::{MaskLayout, TRAILER_LEN};
pub use crate::result::Result;
pub use crate::suffix::{strip_disguise_suffix, DisguiseSuffix, DEFAULT_DISGUISE_SUFFIX};
pub use crate::unmask::{inspect, unmask, unmask_in_place, SetLen};
