//! Shared types for the API layer.

use std::sync::Arc;

use crate::report::ReportGenerator;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub generator: Arc<ReportGenerator>,
}

impl ApiContext {
    pub fn new(generator: Arc<ReportGenerator>) -> Self {
        Self { generator }
    }
}
