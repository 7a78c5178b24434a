use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

// Enum for handling various application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Game error: {0}")]
    Game(#[from] GameError), // Rejected player actions.

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError), // Inconsistent static data.

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error), // Errors related to settings serialization.

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error), // Input/output errors.

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Home directory could not be resolved")]
    NoHomeDir,

    #[error("Terminal event channel closed")]
    EventChannelClosed,
}

// Precondition failures of player actions. None of them mutate the player state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough energy: {required} needed, {available} left")]
    InsufficientEnergy { required: u8, available: u8 },

    #[error("Nothing left to find in {location}")]
    NothingLeftToFind { location: String },

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Already in {0}")]
    AlreadyThere(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate strain id: {0}")]
    DuplicateStrain(String),

    #[error("Duplicate location: {0}")]
    DuplicateLocation(String),

    #[error("Strain {strain} lives in unknown location {location}")]
    UnknownHome { strain: String, location: String },
}
