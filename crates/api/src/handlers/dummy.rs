//! Handlers for the dummy resource.
//!
//! Every handler runs inside one request-scoped [`DbSession`]. Handlers that
//! write commit the session before building the response; read-only handlers
//! let it roll back on drop.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use basic_template_core::pagination::PaginationParams;
use basic_template_core::types::DbId;
use basic_template_db::models::dummy::{DummyDto, DummyInput};
use basic_template_db::repositories::DummyRepo;

use crate::error::AppResult;
use crate::middleware::session::DbSession;

/// Body returned by a successful delete, whether or not a row existed.
pub const DELETE_SUCCESS_MESSAGE: &str = "Delete dummy success.";

/// GET /api/dummy?limit=&offset=
///
/// List dummies with pagination (defaults: `limit=10`, `offset=0`).
pub async fn list_dummies(
    mut session: DbSession,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<DummyDto>>> {
    let rows = DummyRepo::list(session.conn(), params.limit(), params.offset()).await?;

    Ok(Json(rows.into_iter().map(DummyDto::from).collect()))
}

/// GET /api/dummy/byname/{name}
///
/// List dummies whose name matches exactly. Empty list when nothing matches.
pub async fn filter_by_name(
    mut session: DbSession,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<DummyDto>>> {
    let rows = DummyRepo::filter(session.conn(), Some(name.as_str())).await?;

    Ok(Json(rows.into_iter().map(DummyDto::from).collect()))
}

/// GET /api/dummy/byid/{id}
pub async fn get_dummy(
    mut session: DbSession,
    Path(dummy_id): Path<DbId>,
) -> AppResult<Json<DummyDto>> {
    let row = DummyRepo::get_by_id(session.conn(), dummy_id).await?;

    Ok(Json(row.into()))
}

/// POST /api/dummy
///
/// Create a dummy and echo the request body back with 201.
pub async fn create_dummy(
    mut session: DbSession,
    Json(input): Json<DummyInput>,
) -> AppResult<impl IntoResponse> {
    DummyRepo::create(session.conn(), &input.name).await?;
    session.commit().await?;

    tracing::info!(name = %input.name, "Dummy created");

    Ok((StatusCode::CREATED, Json(input)))
}

/// DELETE /api/dummy/{id}
///
/// Idempotent: deleting a missing id still succeeds.
pub async fn delete_dummy(
    mut session: DbSession,
    Path(dummy_id): Path<DbId>,
) -> AppResult<Json<&'static str>> {
    let removed = DummyRepo::delete_by_id(session.conn(), dummy_id).await?;
    session.commit().await?;

    tracing::info!(dummy_id, removed, "Dummy delete processed");

    Ok(Json(DELETE_SUCCESS_MESSAGE))
}

/// PUT /api/dummy/{id}
///
/// Rename a dummy and return the updated row.
pub async fn update_dummy(
    mut session: DbSession,
    Path(dummy_id): Path<DbId>,
    Json(input): Json<DummyInput>,
) -> AppResult<Json<DummyDto>> {
    let row = DummyRepo::update_by_id(session.conn(), dummy_id, &input.name).await?;
    session.commit().await?;

    tracing::info!(dummy_id, name = %row.name, "Dummy updated");

    Ok(Json(row.into()))
}
