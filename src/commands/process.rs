//! `process` and `batch` commands.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::config::UsermgrConfig;
use crate::core::{Error, ResultExt};
use crate::manager::UserManager;

/// One submission as read from a batch file. `name` may be null or absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessReport {
    pub summaries: Vec<String>,
    pub accepted: Vec<String>,
}

impl ProcessReport {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => {
                let mut out = String::new();
                for summary in &self.summaries {
                    out.push_str(summary);
                    out.push('\n');
                }
                out.push_str("Accepted users: ");
                if self.accepted.is_empty() {
                    out.push_str("(none)");
                } else {
                    out.push_str(&self.accepted.join(", "));
                }
                Ok(out)
            }
        }
    }
}

/// Run submissions through a fresh manager, in order.
pub fn process_submissions(
    manager: &mut UserManager,
    submissions: &[Submission],
) -> ProcessReport {
    let summaries = submissions
        .iter()
        .map(|s| manager.process_user(s.name.as_deref(), &s.email, s.age))
        .collect();

    ProcessReport {
        summaries,
        accepted: manager.get_user_names(),
    }
}

pub fn parse_submissions(contents: &str) -> crate::core::Result<Vec<Submission>> {
    Ok(serde_json::from_str(contents)?)
}

/// Read and parse a batch file of submissions.
pub fn read_submissions(input: &Path) -> crate::core::Result<Vec<Submission>> {
    let contents = std::fs::read_to_string(input)
        .map_err(Error::from)
        .context(format!("Failed to read {}", input.display()))?;
    parse_submissions(&contents).context(format!("Invalid submissions in {}", input.display()))
}

pub fn handle_process(
    config: &UsermgrConfig,
    submission: Submission,
    format: OutputFormat,
) -> Result<()> {
    let mut manager = UserManager::from_config(config)?;
    let report = process_submissions(&mut manager, std::slice::from_ref(&submission));
    println!("{}", report.render(format)?);
    Ok(())
}

pub fn handle_batch(config: &UsermgrConfig, input: &Path, format: OutputFormat) -> Result<()> {
    let submissions = read_submissions(input)?;
    log::info!("Processing {} submissions", submissions.len());

    let mut manager = UserManager::from_config(config)?;
    let report = process_submissions(&mut manager, &submissions);
    println!("{}", report.render(format)?);
    Ok(())
}
