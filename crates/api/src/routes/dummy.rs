//! Route definitions for the dummy resource, mounted at `/api/dummy`.

use axum::routing::get;
use axum::Router;

use crate::handlers::dummy;
use crate::state::AppState;

/// ```text
/// GET    /              -> list_dummies
/// POST   /              -> create_dummy
/// GET    /byname/{name} -> filter_by_name
/// GET    /byid/{id}     -> get_dummy
/// PUT    /{id}          -> update_dummy
/// DELETE /{id}          -> delete_dummy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dummy::list_dummies).post(dummy::create_dummy))
        .route("/byname/{name}", get(dummy::filter_by_name))
        .route("/byid/{id}", get(dummy::get_dummy))
        .route(
            "/{id}",
            axum::routing::put(dummy::update_dummy).delete(dummy::delete_dummy),
        )
}
