//! Matching engine — orchestrates detail extraction and scoring over a batch
//! of resumes and job descriptions.
//!
//! Two strictly ordered phases:
//! 1. Extract candidate details ONCE per resume, in input order. The results
//!    are held in a Vec aligned to resume order and reused for every job, so
//!    an AI-backed run issues O(resumes) extraction calls, not O(resumes×jobs).
//! 2. Score every (job, resume) pair, jobs outer, resumes inner, one call at a
//!    time. External backends are rate-limited per caller; sequential awaits
//!    avoid burst rejections and make the output order trivially deterministic.
//!
//! The engine never fails on a single bad cell — the strategy contract returns
//! sentinel values instead of errors. It does fail fast on empty inputs.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::matching::advanced::AdvancedMatcher;
use crate::matching::traditional::TraditionalMatcher;
use crate::matching::types::{
    CandidateDetails, CandidateFields, FileRecord, JobMatchReport, MatchOutcome, MatchResult,
    MatchingType,
};

/// The matcher strategy contract. Implement this pair to add a backend without
/// touching the orchestration below.
///
/// Both operations are infallible by design: implementations convert their own
/// failures into sentinel values (see `advanced.rs`) so one flaky external call
/// degrades one cell of the report instead of aborting the batch.
#[async_trait]
pub trait MatcherStrategy: Send + Sync {
    async fn extract_details(&self, resume_text: &str) -> CandidateFields;

    async fn score(&self, resume_text: &str, job_text: &str, custom_keywords: &str)
        -> MatchOutcome;
}

/// Resolves the requested matching type to a concrete backend. This is the only
/// place the enum is branched on — the engine's loops see `&dyn MatcherStrategy`.
pub fn select_strategy(
    matching_type: MatchingType,
    llm: Arc<dyn TextGenerator>,
) -> Box<dyn MatcherStrategy> {
    match matching_type {
        MatchingType::Advanced => Box::new(AdvancedMatcher::new(llm)),
        MatchingType::Traditional => Box::new(TraditionalMatcher),
    }
}

/// Runs the full matching process: one `JobMatchReport` per job, in job input
/// order, each holding one `MatchResult` per resume, in resume input order.
pub async fn run_matching(
    resumes: &[FileRecord],
    jobs: &[FileRecord],
    strategy: &dyn MatcherStrategy,
    custom_keywords: &str,
) -> Result<Vec<JobMatchReport>, AppError> {
    if resumes.is_empty() {
        return Err(AppError::Validation(
            "At least one resume is required".to_string(),
        ));
    }
    if jobs.is_empty() {
        return Err(AppError::Validation(
            "At least one job description is required".to_string(),
        ));
    }

    // Phase 1: extract details from all resumes first so each resume is
    // processed exactly once no matter how many jobs it is compared against.
    // Sequential to stay under external rate limits.
    let mut all_details: Vec<CandidateDetails> = Vec::with_capacity(resumes.len());
    for resume in resumes {
        let fields = strategy.extract_details(&resume.content).await;
        all_details.push(CandidateDetails {
            file_name: resume.name.clone(),
            fields,
        });
    }

    // Phase 2: score each job against the pre-extracted resumes, one pair at a
    // time. The details Vec is index-aligned with `resumes`.
    let mut reports: Vec<JobMatchReport> = Vec::with_capacity(jobs.len());
    for job in jobs {
        let mut results: Vec<MatchResult> = Vec::with_capacity(resumes.len());

        for (resume, details) in resumes.iter().zip(&all_details) {
            let outcome = strategy
                .score(&resume.content, &job.content, custom_keywords)
                .await;

            results.push(MatchResult {
                details: details.clone(),
                score: outcome.score,
                justification: outcome.justification,
            });
        }

        reports.push(JobMatchReport {
            job_file_name: job.name.clone(),
            job_content: job.content.clone(),
            results,
        });
    }

    Ok(reports)
}
