//! Repository for the `dummy_model` table.

use basic_template_core::error::CoreError;
use basic_template_core::types::DbId;
use sqlx::SqliteConnection;

use crate::error::RepoError;
use crate::models::dummy::Dummy;

/// Column list for `dummy_model` queries.
const COLUMNS: &str = "id, name";

/// Entity name reported in [`CoreError::NotFound`].
const ENTITY: &str = "Dummy";

/// Provides data access for dummies.
///
/// Nothing here commits: every method runs inside whatever transaction the
/// connection belongs to.
pub struct DummyRepo;

impl DummyRepo {
    /// Insert a new dummy.
    pub async fn create(conn: &mut SqliteConnection, name: &str) -> Result<(), RepoError> {
        sqlx::query("INSERT INTO dummy_model (name) VALUES (?)")
            .bind(name)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// List dummies in storage order with limit/offset pagination.
    pub async fn list(
        conn: &mut SqliteConnection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Dummy>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM dummy_model LIMIT ? OFFSET ?");
        let rows = sqlx::query_as::<_, Dummy>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    /// List dummies whose name equals `name` exactly.
    ///
    /// `None` or an empty string disables the filter and returns every row.
    pub async fn filter(
        conn: &mut SqliteConnection,
        name: Option<&str>,
    ) -> Result<Vec<Dummy>, RepoError> {
        let rows = match name.filter(|n| !n.is_empty()) {
            Some(name) => {
                let query = format!("SELECT {COLUMNS} FROM dummy_model WHERE name = ?");
                sqlx::query_as::<_, Dummy>(&query)
                    .bind(name)
                    .fetch_all(conn)
                    .await?
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM dummy_model");
                sqlx::query_as::<_, Dummy>(&query).fetch_all(conn).await?
            }
        };
        Ok(rows)
    }

    /// Find a dummy by its ID.
    pub async fn get_by_id(conn: &mut SqliteConnection, id: DbId) -> Result<Dummy, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM dummy_model WHERE id = ?");
        sqlx::query_as::<_, Dummy>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a dummy by ID. Returns `true` if a row was removed.
    ///
    /// A missing id is not an error.
    pub async fn delete_by_id(conn: &mut SqliteConnection, id: DbId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM dummy_model WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rename a dummy and return the updated row.
    pub async fn update_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
        name: &str,
    ) -> Result<Dummy, RepoError> {
        let query = format!("UPDATE dummy_model SET name = ? WHERE id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Dummy>(&query)
            .bind(name)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: DbId) -> RepoError {
    RepoError::Core(CoreError::NotFound { entity: ENTITY, id })
}
