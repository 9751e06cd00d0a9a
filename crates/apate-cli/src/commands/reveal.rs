use std::path::{Path, PathBuf};

use apate_core::api::reveal::RevealPlan;
use apate_core::batch::Progress;
use apate_core::{BatchStats, FileOutcome, RevealOptions, DEFAULT_DISGUISE_SUFFIX};
use clap::Args;
use log::info;

use crate::cli::ask_for_confirmation;
use crate::{CliError, CliResult};

/// number of candidates listed before asking for confirmation
const MAX_PREVIEW: usize = 5;

/// Restores masked files and removes their disguise extension
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Masked file or folder that contains masked files
    #[arg(value_name = "path")]
    pub target: PathBuf,

    /// Extension of the masked files
    #[arg(
        short,
        long,
        value_name = "extension",
        env = "APATE_SUFFIX",
        default_value = DEFAULT_DISGUISE_SUFFIX
    )]
    pub suffix: String,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Only look at the top level of a folder
    #[arg(long)]
    pub no_recursive: bool,

    /// Replace files that already have the restored name
    #[arg(long)]
    pub overwrite: bool,

    /// Validate all candidates, but modify nothing
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl RevealArgs {
    pub fn run(self) -> CliResult<()> {
        let plan = apate_core::api::reveal::prepare()
            .from_target(&self.target)
            .with_suffix(self.suffix.as_str())
            .with_options(RevealOptions {
                recursive: !self.no_recursive,
                overwrite: self.overwrite,
            })
            .plan()?;

        if plan.is_empty() {
            println!(
                "No {} files found in {}",
                plan.suffix(),
                plan.target().display()
            );
            return Ok(());
        }

        if self.dry_run {
            return dry_run(&plan);
        }

        print_preview(&plan);
        if !self.yes && !ask_for_confirmation("Continue?")? {
            println!("Cancelled, no file was modified.");
            print_summary(&plan.decline());
            return Ok(());
        }

        info!("revealing {} files", plan.len());
        let stats = plan.execute_with(print_outcome);
        print_summary(&stats);

        if stats.is_clean() {
            Ok(())
        } else {
            Err(CliError::BatchIncomplete {
                failed: stats.failed,
            })
        }
    }
}

fn dry_run(plan: &RevealPlan) -> CliResult<()> {
    let mut failed = 0;

    for (path, result) in plan.verify() {
        match result {
            Ok(layout) => println!(
                "  ok       {} (mask {} bytes, restores to {} bytes)",
                file_name(path),
                layout.mask_length(),
                layout.restored_size()
            ),
            Err(e) => {
                failed += 1;
                println!("  invalid  {}: {e}", file_name(path));
            }
        }
    }
    println!(
        "Dry run: {} of {} files can be restored",
        plan.len() - failed,
        plan.len()
    );

    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::BatchIncomplete { failed })
    }
}

fn print_preview(plan: &RevealPlan) {
    println!("Target:  {}", plan.target().display());
    println!("Found {} {} files", plan.len(), plan.suffix());

    for (i, path) in plan.candidates().iter().take(MAX_PREVIEW).enumerate() {
        println!("  {}. {}", i + 1, file_name(path));
    }
    if plan.len() > MAX_PREVIEW {
        println!("  ... and {} more", plan.len() - MAX_PREVIEW);
    }

    println!();
    println!(
        "WARNING: files are modified in place and the {} extension is removed.",
        plan.suffix()
    );
    println!("This cannot be undone, make sure you have a backup.");
}

fn print_outcome(progress: Progress, outcome: &FileOutcome) {
    let counter = format!("[{}/{}]", progress.current, progress.total);

    match outcome {
        FileOutcome::Revealed { from, to } => {
            println!("{counter} ok      {} -> {}", file_name(from), file_name(to))
        }
        FileOutcome::Skipped { path, reason } => {
            println!("{counter} skipped {}: {reason}", file_name(path))
        }
        FileOutcome::Failed { path, error } => {
            println!("{counter} failed  {}: {error}", file_name(path));
            if error.is_destructive() {
                println!(
                    "        WARNING: {} may be partially restored, recover it from a backup",
                    path.display()
                );
            }
        }
    }
}

fn print_summary(stats: &BatchStats) {
    println!();
    println!("Total:   {}", stats.total);
    println!("Success: {}", stats.success);
    println!("Failed:  {}", stats.failed);
    if stats.skipped > 0 {
        println!("Skipped: {}", stats.skipped);
    }

    if stats.failed > 0 {
        println!();
        println!("Possible reasons for failures:");
        println!("  - the file was not masked by Apate");
        println!("  - the file is damaged");
        println!("  - missing permissions");
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
