//! Request-scoped database session.
//!
//! Every handler that touches storage takes a [`DbSession`]. The session is a
//! transaction opened when the request is extracted; it is committed only by
//! an explicit [`DbSession::commit`] call and rolled back when dropped.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::{Sqlite, SqliteConnection, Transaction};

use crate::error::AppError;
use crate::state::AppState;

/// A unit of work bound to a single HTTP request.
///
/// ```ignore
/// async fn rename(mut session: DbSession) -> AppResult<Json<()>> {
///     DummyRepo::update_by_id(session.conn(), 1, "new").await?;
///     session.commit().await?;
///     Ok(Json(()))
/// }
/// ```
pub struct DbSession(Transaction<'static, Sqlite>);

impl DbSession {
    /// Connection handle to pass to repository methods.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.0
    }

    /// Commit every write made through this session.
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.0.commit().await
    }
}

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let tx = state.pool.begin().await?;
        Ok(DbSession(tx))
    }
}
