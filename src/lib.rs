pub mod actions;
pub mod app;
pub mod catalog;
pub mod cleanup;
pub mod context;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod message;
pub mod player;
pub mod settings;
pub mod trail;
pub mod tui;
pub mod ui;

// Re-export commonly used items for easier access
pub use actions::GameAction;
pub use catalog::{Catalog, Location, Rarity, StrainRecord, StrainType};
pub use discovery::{RandomSource, SearchOutcome};
pub use error::{AppError, CatalogError, GameError};
pub use message::{Message, MessageType};
pub use player::PlayerState;
