// Internal types - never serialized over the API
pub mod item;

pub use item::{ItemDraft, ItemPatch, NewItem};
