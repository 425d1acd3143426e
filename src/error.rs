//! Centralized error types for the game.
//!
//! Gameplay itself never fails: damage is clamped, unknown animations are ignored and
//! busy map changes are dropped. What remains here are the setup and drawing paths.

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

/// Errors raised by a drawing backend.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    DrawFailed(String),
}

/// Errors related to map lookup and construction.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("Unknown map: {0}")]
    UnknownMap(String),

    #[error("Invalid map layout: {0}")]
    InvalidLayout(String),
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Console initialization failed: {0}")]
    ConsoleInit(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
