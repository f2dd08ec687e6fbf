use crate::errors::internal::{DatabaseError, InternalError, ItemError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for item endpoints
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct ItemErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,

    /// Offending fields, present on validation failures only
    #[oai(skip_serializing_if_is_none)]
    pub fields: Option<Vec<String>>,
}

/// Item operation error types
#[derive(ApiResponse, Debug)]
pub enum ItemApiError {
    /// Required item fields are missing or empty
    #[oai(status = 400)]
    ValidationFailed(Json<ItemErrorResponse>),

    /// No item exists with the requested id
    #[oai(status = 404)]
    NotFound(Json<ItemErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ItemErrorResponse>),
}

impl ItemApiError {
    /// Create a ValidationFailed error naming the offending fields
    pub fn validation_failed(fields: Vec<String>) -> Self {
        ItemApiError::ValidationFailed(Json(ItemErrorResponse {
            error: "validation_failed".to_string(),
            message: format!("Missing or empty required field(s): {}", fields.join(", ")),
            status_code: 400,
            fields: Some(fields),
        }))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemApiError::NotFound(Json(ItemErrorResponse {
            error: "item_not_found".to_string(),
            message: "Item not found!".to_string(),
            status_code: 404,
            fields: None,
        }))
    }

    /// Convert InternalError to ItemApiError
    ///
    /// Storage and decoding details are logged here and replaced by a generic
    /// message; only validation and not-found errors reach the client verbatim.
    pub fn from_internal_error(err: InternalError) -> Self {
        match err {
            InternalError::Item(ItemError::Validation { fields }) => {
                tracing::debug!("Item validation failed: {}", fields.join(", "));
                Self::validation_failed(fields)
            }
            InternalError::Item(ItemError::NotFound(id)) => {
                tracing::debug!("Item not found: {}", id);
                Self::not_found()
            }
            InternalError::Database(ref db_err) => {
                match db_err {
                    DatabaseError::Operation { operation, .. }
                    | DatabaseError::TransactionBegin { operation, .. }
                    | DatabaseError::TransactionCommit { operation, .. } => {
                        tracing::error!("Storage error in {}: {}", operation, err);
                    }
                    DatabaseError::Migration { .. } => {
                        tracing::error!("Storage error: {}", err);
                    }
                }
                Self::internal_server_error()
            }
            InternalError::Parse { ref value_type, .. } => {
                tracing::error!("Parse error for {}: {}", value_type, err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    fn internal_server_error() -> Self {
        ItemApiError::InternalError(Json(ItemErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
            fields: None,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.response().message.clone()
    }

    pub fn status_code(&self) -> u16 {
        self.response().status_code
    }

    fn response(&self) -> &ItemErrorResponse {
        match self {
            ItemApiError::ValidationFailed(json)
            | ItemApiError::NotFound(json)
            | ItemApiError::InternalError(json) => &json.0,
        }
    }
}

impl From<InternalError> for ItemApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ItemApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
