use std::path::{Path, PathBuf};

use crate::batch::{find_candidates, reveal_all, BatchStats, FileOutcome, Progress, RevealOptions};
use crate::layout::MaskLayout;
use crate::suffix::DisguiseSuffix;
use crate::unmask::inspect;
use crate::{Result, UnmaskError};

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

#[derive(Default, Debug)]
pub struct RevealApi {
    target: Option<PathBuf>,
    suffix: DisguiseSuffix,
    options: RevealOptions,
}

impl RevealApi {
    /// A single masked file or a folder that contains masked files
    pub fn from_target(mut self, target: impl AsRef<Path>) -> Self {
        self.target = Some(target.as_ref().to_path_buf());
        self
    }

    /// The extension masked files carry, `mp4` if not set
    pub fn with_suffix(mut self, suffix: impl Into<DisguiseSuffix>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_options(mut self, options: RevealOptions) -> Self {
        self.options = options;
        self
    }

    /// Looks up all candidates, nothing is modified yet
    pub fn plan(self) -> Result<RevealPlan> {
        let Some(target) = self.target else {
            return Err(UnmaskError::TargetNotSet);
        };
        let candidates = find_candidates(&target, &self.suffix, self.options.recursive)?;

        Ok(RevealPlan {
            target,
            suffix: self.suffix,
            options: self.options,
            candidates,
        })
    }

    /// Plans and executes in one go, without asking anybody
    pub fn execute(self) -> Result<BatchStats> {
        Ok(self.plan()?.execute())
    }
}

/// The files a reveal run is about to modify
#[derive(Debug)]
pub struct RevealPlan {
    target: PathBuf,
    suffix: DisguiseSuffix,
    options: RevealOptions,
    candidates: Vec<PathBuf>,
}

impl RevealPlan {
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn suffix(&self) -> &DisguiseSuffix {
        &self.suffix
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Validates every candidate read only, this is a dry run
    pub fn verify(&self) -> impl Iterator<Item = (&Path, Result<MaskLayout>)> + '_ {
        self.candidates
            .iter()
            .map(|path| (path.as_path(), inspect(path)))
    }

    /// Drops the plan without touching any file, all candidates count as skipped
    pub fn decline(self) -> BatchStats {
        BatchStats {
            skipped: self.len(),
            ..BatchStats::new(self.len())
        }
    }

    pub fn execute(self) -> BatchStats {
        self.execute_with(|_, _| {})
    }

    /// Restores all candidates and reports each outcome as soon as it is known
    pub fn execute_with<F>(self, on_outcome: F) -> BatchStats
    where
        F: FnMut(Progress, &FileOutcome),
    {
        reveal_all(&self.candidates, &self.suffix, &self.options, on_outcome)
    }
}
