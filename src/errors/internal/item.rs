use thiserror::Error;

/// Item domain errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ItemError {
    /// One or more required fields are missing or blank
    #[error("Missing or empty required field(s): {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("Item not found: {0}")]
    NotFound(String),
}
