use std::sync::Arc;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable resume analyzer. Default: HeuristicAnalyzer, built once at
    /// startup; it owns the read-only technical keyword catalog.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
