use stakeduel_core::CoreError;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Core engine error: {0}")]
    Core(#[from] CoreError),

    #[error("Invalid game rules: {0}")]
    InvalidRules(String),

    #[error("Game not found: {0}")]
    GameNotFound(Uuid),

    #[error("Player {0} is already enrolled")]
    AlreadyEnrolled(Uuid),

    #[error("Game is full")]
    GameFull,

    #[error("Not enough players to start the game")]
    NotEnoughPlayers,

    #[error("Player {0} is not enrolled in this game")]
    NotAPlayer(Uuid),

    #[error("Game is not active")]
    GameNotActive,

    #[error("Game has ended")]
    GameEnded,

    #[error("Game has not ended yet")]
    GameNotEnded,

    #[error("Asset {0} is not traded in this game")]
    UnknownAsset(String),

    #[error("Reward already claimed by {0}")]
    AlreadyClaimed(Uuid),
}
