// Stores layer - Data access and repository pattern
pub mod item_sequence_store;
pub mod item_store;

pub use item_sequence_store::ItemSequenceStore;
pub use item_store::ItemStore;
