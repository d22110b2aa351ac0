use crate::types::DbId;

/// Domain-level errors, independent of transport and storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// No record of `entity` exists with the given id.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },
}
