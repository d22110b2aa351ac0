pub mod dummy;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /dummy                  list, create
/// /dummy/byname/{name}    filter by exact name
/// /dummy/byid/{id}        get
/// /dummy/{id}             update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/dummy", dummy::router())
}
