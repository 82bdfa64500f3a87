use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The matcher strategy is NOT stored here: each match request selects its own
/// strategy from the request's `matchingType`, so two concurrent requests can
/// use different backends.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
