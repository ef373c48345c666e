use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use envlens_core::problemdetails::{Problem, ProblemDetails};
use std::sync::Arc;
use tracing::debug;
use utoipa::OpenApi;

use super::types::{
    AppState, EnvVarRow, ExportQuery, ListVariablesQuery, ListVariablesResponse,
};
use crate::services::{
    export_filename, filter_entries, mask_value, render_export, Category, CategoryStat,
    FilterMode,
};

fn invalid_query(rejection: QueryRejection) -> Problem {
    envlens_core::error_builder::bad_request()
        .detail(rejection.to_string())
        .build()
}

#[derive(OpenApi)]
#[openapi(
    paths(list_variables, export_variables),
    components(schemas(
        Category,
        CategoryStat,
        EnvVarRow,
        FilterMode,
        ListVariablesResponse,
        ProblemDetails
    )),
    tags(
        (name = "Environment", description = "Snapshot of the server process environment")
    )
)]
pub struct EnvApiDoc;

pub fn configure_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/env/variables", get(list_variables))
        .route("/env/export", get(export_variables))
}

/// List the visible environment variables
///
/// Applies the category restriction, then the filter, over the key-sorted
/// snapshot, and masks secret-classified values unless visibility is on.
#[utoipa::path(
    get,
    path = "/env/variables",
    tag = "Environment",
    params(ListVariablesQuery),
    responses(
        (status = 200, description = "Visible rows and category statistics", body = ListVariablesResponse),
        (status = 400, description = "Malformed query parameters", body = ProblemDetails),
    )
)]
async fn list_variables(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListVariablesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Problem> {
    let Query(query) = query.map_err(invalid_query)?;

    debug!(
        "GET /env/variables filter={:?} mode={:?} category={:?}",
        query.filter, query.mode, query.category
    );

    let snapshot = &state.snapshot_service;
    let visible = filter_entries(snapshot.entries(), &query.filter, query.mode, query.category);

    let entries: Vec<EnvVarRow> = visible
        .into_iter()
        .map(|e| EnvVarRow {
            key: e.key.clone(),
            value: mask_value(&e.value, e.is_secret, query.show_secrets),
            category: e.category,
            is_secret: e.is_secret,
        })
        .collect();

    Ok(Json(ListVariablesResponse {
        total: snapshot.len(),
        entries,
        stats: snapshot.category_stats(),
    }))
}

/// Export the visible environment variables as a text file
///
/// One `KEY=<JSON string>` line per visible entry, with raw values. Answers
/// 204 No Content when nothing is visible; no export is produced.
#[utoipa::path(
    get,
    path = "/env/export",
    tag = "Environment",
    params(ExportQuery),
    responses(
        (status = 200, description = "Text attachment of the visible rows", content_type = "text/plain"),
        (status = 204, description = "Nothing visible to export"),
        (status = 400, description = "Malformed query parameters", body = ProblemDetails),
    )
)]
async fn export_variables(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Result<Response, Problem> {
    let Query(query) = query.map_err(invalid_query)?;

    let snapshot = &state.snapshot_service;
    let visible = filter_entries(snapshot.entries(), &query.filter, query.mode, query.category);

    if visible.is_empty() {
        debug!("GET /env/export with nothing visible");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let filename = export_filename(query.category);
    debug!("GET /env/export -> {} ({} rows)", filename, visible.len());

    let payload = render_export(&visible);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        payload,
    )
        .into_response())
}
