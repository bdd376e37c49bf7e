use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the game.  All of these surface at startup
/// except `Io`, which can also come from the terminal mid-game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("asset not found: {}", .0.display())]
    MissingAsset(PathBuf),

    #[error("failed to load image {}: {}", .path.display(), .source)]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to load sound {}: {}", .path.display(), .message)]
    Sound { path: PathBuf, message: String },

    #[error("audio device unavailable: {0}")]
    AudioDevice(String),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
