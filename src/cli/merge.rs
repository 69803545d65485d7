use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::merge::{self, MergeReport};

/// Deduplicate and sort the catalog, recording new tools for the alert step
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load(&config::resolve_path(config_path))?;
    let report = merge::run(&config)?;
    print_report(&report, &config.data.tools_csv);
    Ok(())
}

pub fn print_report(report: &MergeReport, path: &std::path::Path) {
    if report.seeded_from_sample {
        println!("Catalog was empty, seeded from the sample list");
    }
    println!(
        "Merged {} row(s) into {} unique tool(s), {} duplicate(s) removed: {}",
        report.loaded,
        report.written,
        report.duplicates_removed,
        path.display()
    );
    if report.new_tools.is_empty() {
        println!("No new tools since the last commit.");
    } else {
        println!("{} new tool(s) pending alert.", report.new_tools.len());
    }
}
