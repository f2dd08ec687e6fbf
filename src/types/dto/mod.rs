// DTOs - request and response bodies exposed through the OpenAPI layer
pub mod common;
pub mod items;
