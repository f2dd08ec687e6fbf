use thiserror::Error;

pub mod database;
pub mod item;

pub use database::DatabaseError;
pub use item::ItemError;

/// Internal error type for store and service operations
///
/// Infrastructure failures (`Database`, `Parse`) are kept apart from the item
/// domain errors so the API layer can map each one to its own status code.
/// Not exposed via API - endpoints convert through `ItemApiError::from_internal_error`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error(transparent)]
    Item(#[from] ItemError),
}

impl InternalError {
    /// Wrap a failed storage call, tagged with the operation that issued it
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::Item(ItemError::NotFound(id.into()))
    }

    pub fn validation(fields: Vec<String>) -> Self {
        Self::Item(ItemError::Validation { fields })
    }
}
