use std::path::PathBuf;

use crate::alert::{self, AlertOptions, AlertReport, EmailOutcome};
use crate::config;
use crate::error::Result;
use crate::publish::CommitOutcome;

/// Email new tools and commit the catalog
pub fn run(config_path: Option<PathBuf>, no_email: bool, no_commit: bool, no_push: bool) -> Result<()> {
    let config = config::load(&config::resolve_path(config_path))?;

    let mut options = AlertOptions::from_config(&config);
    options.email &= !no_email;
    options.commit &= !no_commit;
    options.push &= !no_push;

    let report = alert::run(&config, options)?;
    print_report(&report);
    Ok(())
}

pub fn print_report(report: &AlertReport) {
    match &report.email {
        EmailOutcome::Sent { recipient } => println!(
            "Email alert sent to {} ({} new tool(s))",
            recipient,
            report.new_tools.len()
        ),
        EmailOutcome::NothingNew => println!("No new tools to alert about."),
        EmailOutcome::NotConfigured => println!(
            "Email not configured, skipped alert for {} new tool(s).",
            report.new_tools.len()
        ),
        EmailOutcome::Disabled => println!(
            "Email disabled, {} new tool(s) stay pending.",
            report.new_tools.len()
        ),
        EmailOutcome::Failed(e) => println!("Email alert failed: {}", e),
    }

    match &report.commit {
        None => {}
        Some(CommitOutcome::NotARepository) => {
            println!("Catalog is not inside a git repository, nothing committed.")
        }
        Some(CommitOutcome::NoChanges) => println!("No catalog changes to commit."),
        Some(CommitOutcome::Committed { hash, pushed }) => {
            let short = hash.get(..7).unwrap_or(hash.as_str());
            if *pushed {
                println!("Committed and pushed catalog ({})", short);
            } else {
                println!("Committed catalog ({})", short);
            }
        }
    }
}
