use axum::{Json, extract::State};

use crate::{
    auth::AdminClaims,
    db::profile::get_profiles_with_ratings,
    errors::ApiError,
    models::results::ResultsReport,
    state::AppState,
    survey::build_report,
};

pub async fn get_results_handler(
    State(state): State<AppState>,
    _admin: AdminClaims,
) -> Result<Json<ResultsReport>, ApiError> {
    let entries = get_profiles_with_ratings(state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error loading results: {}", e);
            e.to_response()
        })?;

    let report = build_report(&entries);

    tracing::info!(
        "Computed results for {} profiles ({} rated)",
        report.results.len(),
        report.statistics.sample_size
    );
    Ok(Json(report))
}
