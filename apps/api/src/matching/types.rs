//! Data model for the matching engine.
//!
//! Every entity here is built once per match run and treated as read-only
//! afterward; nothing has persisted identity. Wire names follow the original
//! client contract: file-name fields are camelCase, the LLM-extracted detail
//! fields are snake_case.

use serde::{Deserialize, Serialize};

/// Which matcher backend a run uses. Selected once per request, never
/// re-branched on inside the engine's loops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchingType {
    Traditional,
    #[default]
    Advanced,
}

/// One uploaded resume or job description after text extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub content: String,
}

/// Contact and profile fields pulled from a resume, before the originating
/// file name is attached. This is the shape both detail-extractor backends
/// produce, and the exact JSON schema the AI extractor asks the model for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub address: Option<String>,
}

/// `CandidateFields` plus the resume file it came from.
/// Exactly one instance exists per input resume, however many jobs it is
/// matched against; `file_name` always equals the originating resume's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDetails {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(flatten)]
    pub fields: CandidateFields,
}

/// Score and justification for one (resume, job) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// 0–100 inclusive.
    pub score: u32,
    pub justification: String,
}

/// One resume's row within a single job's report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub details: CandidateDetails,
    pub score: u32,
    pub justification: String,
}

/// All match results for one job description.
/// `results` preserves resume input order — sorting by score is a
/// presentation concern, not a data-model invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchReport {
    #[serde(rename = "jobFileName")]
    pub job_file_name: String,
    #[serde(rename = "jobContent")]
    pub job_content: String,
    pub results: Vec<MatchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_type_serde_screaming_snake() {
        let t: MatchingType = serde_json::from_str(r#""TRADITIONAL""#).unwrap();
        assert_eq!(t, MatchingType::Traditional);
        let a: MatchingType = serde_json::from_str(r#""ADVANCED""#).unwrap();
        assert_eq!(a, MatchingType::Advanced);
    }

    #[test]
    fn test_matching_type_default_is_advanced() {
        assert_eq!(MatchingType::default(), MatchingType::Advanced);
    }

    #[test]
    fn test_candidate_details_serializes_flat_with_file_name() {
        let details = CandidateDetails {
            file_name: "jane.txt".to_string(),
            fields: CandidateFields {
                name: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["fileName"], "jane.txt");
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["phone"], serde_json::Value::Null);
    }

    #[test]
    fn test_candidate_fields_deserializes_llm_schema() {
        let json = r#"{
            "name": "John Smith",
            "email": null,
            "phone": "555-123-4567",
            "linkedin_url": "https://www.linkedin.com/in/jsmith",
            "github_url": null,
            "address": null
        }"#;
        let fields: CandidateFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.name.as_deref(), Some("John Smith"));
        assert!(fields.email.is_none());
        assert_eq!(fields.phone.as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn test_job_match_report_wire_names() {
        let report = JobMatchReport {
            job_file_name: "backend.txt".to_string(),
            job_content: "Rust developer".to_string(),
            results: vec![],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["jobFileName"], "backend.txt");
        assert_eq!(json["jobContent"], "Rust developer");
        assert!(json["results"].as_array().unwrap().is_empty());
    }
}
