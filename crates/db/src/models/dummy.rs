//! Dummy entity and its transfer shapes.

use basic_template_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dummy_model` table.
///
/// Deliberately not `Serialize`: responses go through [`DummyDto`].
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Dummy {
    pub id: DbId,
    pub name: String,
}

/// Response shape for a dummy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DummyDto {
    pub id: DbId,
    pub name: String,
}

impl From<Dummy> for DummyDto {
    fn from(row: Dummy) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// Request payload for creating or renaming a dummy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DummyInput {
    pub name: String,
}
