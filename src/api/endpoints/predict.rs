//! Prediction endpoint.

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::panel::BiomarkerPanel;
use crate::report::ReportDocument;

/// `POST /predict`: generate a structured insight report for a biomarker
/// panel. Missing fields fall back to the panel defaults, so an empty
/// JSON object is a valid request.
///
/// The upstream model call is blocking; it runs on the blocking pool so
/// the async workers stay free.
pub async fn predict(
    State(ctx): State<ApiContext>,
    Json(panel): Json<BiomarkerPanel>,
) -> Result<Json<ReportDocument>, ApiError> {
    let request_id = Uuid::new_v4();
    tracing::info!(request_id = %request_id, "prediction requested");

    let generator = ctx.generator.clone();
    let document =
        tokio::task::spawn_blocking(move || generator.generate(&request_id, &panel))
            .await
            .map_err(|e| ApiError::Internal(format!("prediction task failed: {e}")))??;

    Ok(Json(document))
}
