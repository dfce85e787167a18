use std::sync::Arc;

use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The service is stateless across requests — no cache, no persistence. The
/// only shared piece is the completion backend, held behind the trait so tests
/// can swap in a stub.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionModel>,
}
