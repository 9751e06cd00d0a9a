use std::path::PathBuf;

use clap::Args;

use crate::{CliError, CliResult};

/// Shows the mask layout of masked files without modifying them
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Masked files to inspect
    #[arg(value_name = "file", required = true)]
    pub files: Vec<PathBuf>,
}

impl InspectArgs {
    pub fn run(self) -> CliResult<()> {
        let mut failed = 0;

        for file in &self.files {
            match apate_core::commands::inspect(file) {
                Ok(layout) => {
                    println!("# {}", file.display());
                    println!("  file size:      {} bytes", layout.file_size());
                    println!("  mask length:    {} bytes", layout.mask_length());
                    println!("  header offset:  {}", layout.header_offset());
                    println!("  restored size:  {} bytes", layout.restored_size());
                }
                Err(e) => {
                    failed += 1;
                    println!("# {}", file.display());
                    println!("  not a masked file: {e}");
                }
            }
        }

        if failed == 0 {
            Ok(())
        } else {
            Err(CliError::BatchIncomplete { failed })
        }
    }
}
