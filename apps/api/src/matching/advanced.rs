//! Advanced matcher — delegates extraction and scoring to the LLM.
//!
//! Both operations are best-effort: a transport failure or an unparsable model
//! response degrades a single cell of the report to a sentinel value instead of
//! aborting the batch. The engine relies on this — neither method returns Err.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::{parse_json_response, TextGenerator};
use crate::matching::engine::MatcherStrategy;
use crate::matching::prompts::{
    CUSTOM_KEYWORDS_SECTION_TEMPLATE, EXTRACT_DETAILS_PROMPT_TEMPLATE, MATCH_PROMPT_TEMPLATE,
};
use crate::matching::types::{CandidateFields, MatchOutcome};

/// Sentinel name when the model's answer is not valid JSON after fence stripping.
const PARSING_FAILED: &str = "Parsing Failed";
/// Sentinel name when the model call itself fails.
const API_ERROR: &str = "API Error";

/// LLM-backed matcher. Holds the generator behind the `TextGenerator` seam so
/// tests can drive the sentinel paths without a network.
pub struct AdvancedMatcher {
    llm: Arc<dyn TextGenerator>,
}

impl AdvancedMatcher {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl MatcherStrategy for AdvancedMatcher {
    async fn extract_details(&self, resume_text: &str) -> CandidateFields {
        let prompt = EXTRACT_DETAILS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

        let text = match self.llm.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Detail extraction call failed: {e}");
                return sentinel_fields(API_ERROR);
            }
        };

        match parse_json_response::<CandidateFields>(&text) {
            Ok(fields) => fields,
            Err(e) => {
                warn!("Detail extraction response was not valid JSON: {e}");
                sentinel_fields(PARSING_FAILED)
            }
        }
    }

    async fn score(
        &self,
        resume_text: &str,
        job_text: &str,
        custom_keywords: &str,
    ) -> MatchOutcome {
        let custom_keywords_section = if custom_keywords.trim().is_empty() {
            String::new()
        } else {
            CUSTOM_KEYWORDS_SECTION_TEMPLATE.replace("{custom_keywords}", custom_keywords)
        };

        let prompt = MATCH_PROMPT_TEMPLATE
            .replace("{custom_keywords_section}", &custom_keywords_section)
            .replace("{jd_text}", job_text)
            .replace("{resume_text}", resume_text);

        let text = match self.llm.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Match scoring call failed: {e}");
                return MatchOutcome {
                    score: 0,
                    justification: "An API error occurred during matching.".to_string(),
                };
            }
        };

        match parse_json_response::<MatchOutcome>(&text) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Match scoring response was not valid JSON: {e}");
                MatchOutcome {
                    score: 0,
                    justification: "Failed to get a valid score from the AI model.".to_string(),
                }
            }
        }
    }
}

fn sentinel_fields(name: &str) -> CandidateFields {
    CandidateFields {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    /// Canned generator: either a fixed response or a simulated transport failure.
    struct StubGenerator {
        response: Result<String, ()>,
    }

    impl StubGenerator {
        fn ok(text: &str) -> Arc<dyn TextGenerator> {
            Arc::new(Self {
                response: Ok(text.to_string()),
            })
        }

        fn failing() -> Arc<dyn TextGenerator> {
            Arc::new(Self { response: Err(()) })
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(LlmError::EmptyContent),
            }
        }
    }

    #[tokio::test]
    async fn test_extract_details_parses_valid_json() {
        let matcher = AdvancedMatcher::new(StubGenerator::ok(
            r#"{"name": "Jane Smith", "email": "jane@example.com", "phone": null,
                "linkedin_url": null, "github_url": null, "address": null}"#,
        ));
        let fields = matcher.extract_details("resume text").await;
        assert_eq!(fields.name.as_deref(), Some("Jane Smith"));
        assert_eq!(fields.email.as_deref(), Some("jane@example.com"));
        assert!(fields.phone.is_none());
    }

    #[tokio::test]
    async fn test_extract_details_tolerates_fenced_json() {
        let matcher = AdvancedMatcher::new(StubGenerator::ok(
            "```json\n{\"name\": \"Jane Smith\", \"email\": null, \"phone\": null, \"linkedin_url\": null, \"github_url\": null, \"address\": null}\n```",
        ));
        let fields = matcher.extract_details("resume text").await;
        assert_eq!(fields.name.as_deref(), Some("Jane Smith"));
    }

    #[tokio::test]
    async fn test_extract_details_sentinel_on_unparsable_response() {
        let matcher = AdvancedMatcher::new(StubGenerator::ok("I could not parse that resume."));
        let fields = matcher.extract_details("resume text").await;
        assert_eq!(fields.name.as_deref(), Some("Parsing Failed"));
        assert!(fields.email.is_none());
        assert!(fields.address.is_none());
    }

    #[tokio::test]
    async fn test_extract_details_sentinel_on_transport_failure() {
        let matcher = AdvancedMatcher::new(StubGenerator::failing());
        let fields = matcher.extract_details("resume text").await;
        assert_eq!(fields.name.as_deref(), Some("API Error"));
        assert!(fields.email.is_none());
    }

    #[tokio::test]
    async fn test_score_parses_valid_json() {
        let matcher =
            AdvancedMatcher::new(StubGenerator::ok(r#"{"score": 85, "justification": "Strong overlap in required skills."}"#));
        let outcome = matcher.score("resume", "job", "").await;
        assert_eq!(outcome.score, 85);
        assert_eq!(outcome.justification, "Strong overlap in required skills.");
    }

    #[tokio::test]
    async fn test_score_sentinel_on_unparsable_response() {
        let matcher = AdvancedMatcher::new(StubGenerator::ok("85 out of 100, great candidate"));
        let outcome = matcher.score("resume", "job", "").await;
        assert_eq!(outcome.score, 0);
        assert_eq!(
            outcome.justification,
            "Failed to get a valid score from the AI model."
        );
    }

    #[tokio::test]
    async fn test_score_sentinel_on_transport_failure() {
        let matcher = AdvancedMatcher::new(StubGenerator::failing());
        let outcome = matcher.score("resume", "job", "").await;
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.justification, "An API error occurred during matching.");
    }
}
