// API-facing error types
pub mod item;

pub use item::{ItemApiError, ItemErrorResponse};
