use uuid::Uuid;

use super::normalize::normalize;
use super::parser::parse_report;
use super::prompt::build_report_prompt;
use super::types::{LlmClient, ReportDocument};
use super::ReportError;

/// Orchestrates the full insight pipeline for one request:
/// prompt → model → parse → normalize.
pub struct ReportGenerator {
    llm: Box<dyn LlmClient + Send + Sync>,
    model: String,
}

impl ReportGenerator {
    pub fn new(llm: Box<dyn LlmClient + Send + Sync>, model: &str) -> Self {
        Self {
            llm,
            model: model.to_string(),
        }
    }

    /// The model name requests are sent to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a structured report for one biomarker panel.
    ///
    /// An empty reply from the model is an error; a reply with missing or
    /// malformed sections is not; those sections stay at their empty
    /// defaults.
    pub fn generate(
        &self,
        request_id: &Uuid,
        panel: &crate::panel::BiomarkerPanel,
    ) -> Result<ReportDocument, ReportError> {
        let _span =
            tracing::info_span!("generate_report", request_id = %request_id).entered();

        let prompt = build_report_prompt(panel);
        let reply = self.llm.generate(&self.model, &prompt)?;

        let reply = reply.trim();
        if reply.is_empty() {
            return Err(ReportError::EmptyResponse);
        }

        let document = parse_report(reply);
        let cleaned = normalize(serde_json::to_value(&document)?);
        let document: ReportDocument = serde_json::from_value(cleaned)?;

        tracing::info!(
            request_id = %request_id,
            priorities = document.executive_summary.top_priorities.len(),
            systems = document.system_analysis.len(),
            alerts = document.interaction_alerts.len(),
            rows = document.biomarker_table.len(),
            "report structured"
        );

        Ok(document)
    }
}
