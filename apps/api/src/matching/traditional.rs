//! Traditional matcher — deterministic, synchronous, no external calls.
//!
//! Detail extraction is regex-heuristic and scoring is keyword overlap. The
//! name heuristic and phone pattern are English/North-American only; this is a
//! known limitation carried over deliberately rather than generalized.

use std::collections::HashSet;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use crate::matching::engine::MatcherStrategy;
use crate::matching::types::{CandidateFields, MatchOutcome};

lazy_static! {
    /// A full-name line: 2 to 4 capitalized words, letters/apostrophes/hyphens only.
    static ref NAME_LINE_RE: Regex = Regex::new(r"^([A-Z][a-z'-]+(\s|$)){2,4}$").unwrap();
    /// Fallback for a simple "Firstname Lastname" at the start of any line.
    static ref NAME_FALLBACK_RE: Regex = Regex::new(r"(?m)^[A-Z][a-z]+ [A-Z][a-z]+").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap();
    /// North-American phone numbers: optional +1, optional (area) code,
    /// separators `.`/`-`/space.
    static ref PHONE_RE: Regex = Regex::new(
        r"(?:(?:\+?1\s*(?:[.-]\s*)?)?(?:\(\s*(?:[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9])\s*\)|(?:[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9]))\s*(?:[.-]\s*)?)?(?:[2-9]1[02-9]|[2-9][02-9]1|[2-9][02-9]{2})\s*(?:[.-]\s*)?[0-9]{4}"
    )
    .unwrap();
    static ref LINKEDIN_RE: Regex =
        Regex::new(r"(https?://)?(www\.)?linkedin\.com/in/[a-zA-Z0-9_-]+").unwrap();
    static ref GITHUB_RE: Regex =
        Regex::new(r"(https?://)?(www\.)?github\.com/[a-zA-Z0-9_-]+").unwrap();
    /// A "City, ST 12345" address fragment.
    static ref ADDRESS_RE: Regex = Regex::new(r"[A-Z][a-zA-Z\s.-]+,\s[A-Z]{2}\s\d{5}").unwrap();
    /// Maximal runs of word characters, length >= 3.
    static ref TOKEN_RE: Regex = Regex::new(r"\b\w{3,}\b").unwrap();
}

/// Deterministic matcher backend. Stateless; a unit struct satisfies the
/// strategy contract.
pub struct TraditionalMatcher;

#[async_trait]
impl MatcherStrategy for TraditionalMatcher {
    async fn extract_details(&self, resume_text: &str) -> CandidateFields {
        extract_details_traditionally(resume_text)
    }

    async fn score(
        &self,
        resume_text: &str,
        job_text: &str,
        custom_keywords: &str,
    ) -> MatchOutcome {
        traditional_match(resume_text, job_text, custom_keywords)
    }
}

/// Builds the set of distinct lower-cased tokens of length >= 3.
fn extract_keywords(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Keyword-overlap scorer: score = round(100 * |job ∩ resume| / |job|), where
/// the job-side vocabulary also includes any custom keywords.
pub fn traditional_match(
    resume_text: &str,
    job_text: &str,
    custom_keywords: &str,
) -> MatchOutcome {
    let combined_job_text = format!("{job_text} {custom_keywords}");
    let job_keywords = extract_keywords(&combined_job_text);
    let resume_keywords = extract_keywords(resume_text);

    if job_keywords.is_empty() {
        return MatchOutcome {
            score: 0,
            justification: "No keywords found in job description or custom keywords."
                .to_string(),
        };
    }

    let matched = job_keywords
        .iter()
        .filter(|k| resume_keywords.contains(*k))
        .count();
    let total = job_keywords.len();
    let score = ((matched as f64 / total as f64) * 100.0).round() as u32;

    MatchOutcome {
        score,
        justification: format!("Matched {matched} out of {total} keywords."),
    }
}

/// Regex-heuristic detail extraction. Any field with no match is None; the
/// name falls back to "N/A" so the report column is never blank.
pub fn extract_details_traditionally(resume_text: &str) -> CandidateFields {
    // Name: the first of the top 5 lines that looks like a capitalized full name.
    let mut name = resume_text
        .lines()
        .take(5)
        .map(str::trim)
        .find(|line| NAME_LINE_RE.is_match(line))
        .map(str::to_string);

    // Fallback for a simple "Firstname Lastname" anywhere in the text.
    if name.is_none() {
        name = NAME_FALLBACK_RE
            .find(resume_text)
            .map(|m| m.as_str().to_string());
    }

    let first_match = |re: &Regex| re.find(resume_text).map(|m| m.as_str().to_string());

    CandidateFields {
        name: Some(name.unwrap_or_else(|| "N/A".to_string())),
        email: first_match(&EMAIL_RE),
        phone: first_match(&PHONE_RE),
        linkedin_url: first_match(&LINKEDIN_RE),
        github_url: first_match(&GITHUB_RE),
        address: first_match(&ADDRESS_RE),
    }
}
