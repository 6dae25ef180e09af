use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::vitals_dto::*},
    error::AppError,
};

/// POST /analyze_vitals
pub async fn analyze_vitals(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeVitalsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected vitals payload: {}", rejection.body_text());
        state.metrics.record_validation_rejection();
        AppError::Validation(rejection.body_text())
    })?;

    let reading = request.into_reading().map_err(|e| {
        debug!("Incomplete vitals payload: {}", e);
        state.metrics.record_validation_rejection();
        AppError::from(e)
    })?;

    debug!("Analyzing vitals for user: {}", reading.user_id);

    let result = state.analysis_service.analyze(&reading).await?;

    Ok(Json(AnalyzeVitalsResponse::from(result)))
}
