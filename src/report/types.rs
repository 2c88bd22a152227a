use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ReportError;

/// Label → explanatory text, in the order the labels appear in the source
/// report. Values are always strings; the JSON value type keeps the
/// normalizer generic over report shapes.
pub type SectionMap = Map<String, Value>;

/// Structured medical insight report, one per request.
///
/// All six sections are always present; a section missing from the model's
/// reply is its empty default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub executive_summary: ExecutiveSummary,
    pub system_analysis: SectionMap,
    pub personalized_action_plan: SectionMap,
    pub interaction_alerts: Vec<String>,
    pub normal_ranges: SectionMap,
    pub biomarker_table: Vec<BiomarkerRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub top_priorities: Vec<String>,
    pub key_strengths: Vec<String>,
}

/// One row of the biomarker mapping table. All cells stay text as emitted
/// by the model; values may carry units or qualifiers, or be empty after
/// cleaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiomarkerRow {
    pub biomarker: String,
    pub value: String,
    pub status: String,
    pub insight: String,
    pub reference_range: String,
}

/// Generative-language-model client abstraction (allows mocking).
pub trait LlmClient {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, ReportError>;
}
