use std::path::Path;

use crate::batch::{BatchStats, RevealOptions};
use crate::layout::MaskLayout;
use crate::suffix::DisguiseSuffix;
use crate::Result;

/// Restores all masked files in `target` without any confirmation step.
pub fn reveal(
    target: &Path,
    suffix: impl Into<DisguiseSuffix>,
    options: RevealOptions,
) -> Result<BatchStats> {
    crate::api::reveal::prepare()
        .from_target(target)
        .with_suffix(suffix)
        .with_options(options)
        .execute()
}

/// Reports the mask layout of a single file, the file is not modified.
pub fn inspect(masked_file: &Path) -> Result<MaskLayout> {
    crate::unmask::inspect(masked_file)
}
