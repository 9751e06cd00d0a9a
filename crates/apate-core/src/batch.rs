//! Batch processing of many masked files
//!
//! Work is split into two steps that can run independently:
//! [`find_candidates`] collects the files that carry the disguise suffix,
//! [`reveal_all`] restores and renames them one after the other and folds
//! every [`FileOutcome`] into [`BatchStats`].

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::UnmaskError;
use crate::result::Result;
use crate::suffix::DisguiseSuffix;
use crate::unmask::unmask;

/// Options for a batch reveal run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOptions {
    /// Descends into sub folders when the target is a folder
    pub recursive: bool,

    /// Replaces an existing file that already has the restored name.
    /// If false such a candidate is skipped and stays masked.
    pub overwrite: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            overwrite: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    DestinationExists(PathBuf),
    /// the restored name belongs to a folder, checked even when overwriting
    DestinationIsDirectory(PathBuf),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::DestinationExists(p) => write!(f, "{} already exists", p.display()),
            SkipReason::DestinationIsDirectory(p) => {
                write!(f, "{} is a folder", p.display())
            }
        }
    }
}

/// What happened to a single candidate
#[derive(Debug)]
pub enum FileOutcome {
    Revealed { from: PathBuf, to: PathBuf },
    Skipped { path: PathBuf, reason: SkipReason },
    Failed { path: PathBuf, error: UnmaskError },
}

impl FileOutcome {
    /// the candidate path this outcome belongs to
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Revealed { from, .. } => from,
            FileOutcome::Skipped { path, .. } => path,
            FileOutcome::Failed { path, .. } => path,
        }
    }
}

/// Position of a file inside a batch run, `current` starts at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchStats {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(mut self, outcome: &FileOutcome) -> Self {
        match outcome {
            FileOutcome::Revealed { .. } => self.success += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
        self
    }

    /// true if no file failed
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Collects all files below `root` that carry the disguise suffix.
///
/// A `root` that is a file itself is returned if it matches. Folder entries are
/// visited in file name order, unreadable entries and symlinks are skipped.
pub fn find_candidates(
    root: &Path,
    suffix: &DisguiseSuffix,
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    let metadata = match fs::metadata(root) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(UnmaskError::TargetNotFound(root.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    if metadata.is_file() {
        return Ok(if suffix.matches(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let mut walker = WalkDir::new(root).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if entry.file_type().is_file() && suffix.matches(entry.path()) {
            candidates.push(entry.into_path());
        }
    }
    debug!(
        "found {} candidates with suffix {suffix} in {}",
        candidates.len(),
        root.display()
    );

    Ok(candidates)
}

/// Unmasks one file and renames it to its name without the disguise suffix.
///
/// The destination is checked before the file is touched, a skipped candidate
/// stays masked under its disguised name.
pub fn reveal_file(path: &Path, suffix: &DisguiseSuffix, options: &RevealOptions) -> FileOutcome {
    let destination = suffix.strip(path);
    let renames = destination != path;

    if renames && destination.is_dir() {
        return FileOutcome::Skipped {
            path: path.to_path_buf(),
            reason: SkipReason::DestinationIsDirectory(destination),
        };
    }
    if renames && !options.overwrite && destination.exists() {
        return FileOutcome::Skipped {
            path: path.to_path_buf(),
            reason: SkipReason::DestinationExists(destination),
        };
    }

    if let Err(error) = unmask(path) {
        if error.is_destructive() {
            warn!("{} may be partially restored: {error}", path.display());
        }
        return FileOutcome::Failed {
            path: path.to_path_buf(),
            error,
        };
    }

    if renames {
        if let Err(source) = fs::rename(path, &destination) {
            return FileOutcome::Failed {
                path: path.to_path_buf(),
                error: UnmaskError::RenameFailed {
                    from: path.to_path_buf(),
                    to: destination,
                    source,
                },
            };
        }
    }

    FileOutcome::Revealed {
        from: path.to_path_buf(),
        to: destination,
    }
}

/// Reveals every candidate in order and reports each outcome to `on_outcome`.
///
/// A failing file never stops the run.
pub fn reveal_all<F>(
    candidates: &[PathBuf],
    suffix: &DisguiseSuffix,
    options: &RevealOptions,
    mut on_outcome: F,
) -> BatchStats
where
    F: FnMut(Progress, &FileOutcome),
{
    let total = candidates.len();

    candidates
        .iter()
        .enumerate()
        .fold(BatchStats::new(total), |stats, (i, path)| {
            let outcome = reveal_file(path, suffix, options);
            on_outcome(
                Progress {
                    current: i + 1,
                    total,
                },
                &outcome,
            );
            stats.record(&outcome)
        })
}
