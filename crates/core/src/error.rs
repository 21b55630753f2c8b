use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Carries the internal reason. Clients only ever see a generic message.
    #[error("Validation failed: {0}")]
    Validation(String),
}
