//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! view registry for the actual work.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use super::dto::{
    AggregatedView, FilterOptionsResponse, FilterQuery, HealthResponse, PreviewData, ViewId,
    ViewSnapshot,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::HotelType;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store = state.registry.store();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        record_count: store.len(),
        checksum: store.checksum().to_string(),
    }))
}

// =============================================================================
// Filter controls
// =============================================================================

/// GET /v1/filters/options
///
/// Values for the dashboard selectors: hotel types, countries and the month
/// slider bounds.
pub async fn get_filter_options(
    State(state): State<AppState>,
) -> HandlerResult<FilterOptionsResponse> {
    let store = state.registry.store();
    Ok(Json(FilterOptionsResponse {
        hotel_types: HotelType::ALL.to_vec(),
        countries: store.countries(),
        month_bounds: store.month_bounds(),
        views: ViewId::ALL.to_vec(),
        default_preview_rows: state.config.views.default_preview_rows,
        max_preview_rows: state.config.views.max_preview_rows,
        load_report: store.load_report().clone(),
    }))
}

// =============================================================================
// Views
// =============================================================================

/// GET /v1/views
///
/// Every view for the filter in the query string, from one filtered set.
pub async fn get_views(
    State(state): State<AppState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> HandlerResult<ViewSnapshot> {
    let Query(query) = query?;
    let filter = query.to_filter_state()?;

    let snapshot = tokio::task::spawn_blocking(move || state.registry.snapshot(&filter))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(snapshot.as_ref().clone()))
}

/// GET /v1/views/{view_id}
pub async fn get_view(
    State(state): State<AppState>,
    Path(view_id): Path<String>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> HandlerResult<AggregatedView> {
    let view_id: ViewId = view_id.parse()?;
    let Query(query) = query?;
    let filter = query.to_filter_state()?;

    let view = tokio::task::spawn_blocking(move || state.registry.view(view_id, &filter))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(view))
}

/// GET /v1/preview
///
/// The first `rows` records matching the filter.
pub async fn get_preview(
    State(state): State<AppState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> HandlerResult<PreviewData> {
    let Query(query) = query?;
    let filter = query.to_filter_state()?;
    let rows = state.config.preview_rows(query.rows);

    let preview = tokio::task::spawn_blocking(move || state.registry.preview(&filter, rows))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(preview))
}
