//! CSV export of match results, one file per job report.

use anyhow::{Context, Result};

use crate::matching::types::MatchResult;

const CSV_HEADERS: [&str; 9] = [
    "Resume File",
    "Name",
    "Email",
    "Phone",
    "LinkedIn",
    "GitHub",
    "Address",
    "Matching Score",
    "Justification",
];

/// Renders one job's results as a CSV table. Absent detail fields become empty
/// cells; quoting and quote-doubling follow standard CSV rules (the writer
/// handles both).
pub fn results_to_csv(results: &[MatchResult]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADERS)
        .context("Failed to write CSV header")?;

    for result in results {
        let details = &result.details;
        let fields = &details.fields;
        writer
            .write_record([
                details.file_name.as_str(),
                fields.name.as_deref().unwrap_or(""),
                fields.email.as_deref().unwrap_or(""),
                fields.phone.as_deref().unwrap_or(""),
                fields.linkedin_url.as_deref().unwrap_or(""),
                fields.github_url.as_deref().unwrap_or(""),
                fields.address.as_deref().unwrap_or(""),
                &result.score.to_string(),
                &result.justification,
            ])
            .context("Failed to write CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Download filename for a job's export: `matching_results_<job stem>.csv`,
/// with the job file's extension stripped.
pub fn export_file_name(job_file_name: &str) -> String {
    let stem = match job_file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => job_file_name,
    };
    format!("matching_results_{stem}.csv")
}
