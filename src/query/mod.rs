// Query layer - pure translation of listing requests into storage-agnostic queries
pub mod distinct;
pub mod fields;
pub mod filter_builder;
pub mod predicate;

pub use distinct::split_distinct;
pub use fields::{OptionField, TextField};
pub use filter_builder::{
    ItemQuery, ItemQueryParams, MAX_LIMIT, SortDirection, SortField, build_query,
};
pub use predicate::Predicate;
