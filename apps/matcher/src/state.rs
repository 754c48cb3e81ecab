use std::sync::Arc;

use crate::config::Config;
use crate::scoring::MatchScorer;
use crate::uploads::UploadStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Upload directory, created before the router is built.
    pub uploads: UploadStore,
    /// Pluggable scorer. Default: KeywordScorer.
    pub scorer: Arc<dyn MatchScorer>,
}
