//! Subcommand entry points.

use anyhow::Result;

use crate::cli::ExportArgs;
use crate::pipeline::{ExportOutcome, run_export};
use crate::summary::print_categories;

pub fn export(args: &ExportArgs) -> Result<ExportOutcome> {
    run_export(args)
}

pub fn categories() {
    print_categories();
}
