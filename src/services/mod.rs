// Services layer - Business logic and orchestration
pub mod item_service;
pub mod item_validator;

pub use item_service::ItemService;
