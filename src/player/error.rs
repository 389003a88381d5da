use thiserror::Error;

/// Every way a player operation can fail
///
/// All variants are expected, recoverable, user-facing outcomes. The display
/// strings are the message suffixes the shell prints after its per-command
/// prefix ("Cannot play video: ...").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    PlaylistExists,

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,
}

pub type PlayerResult<T> = Result<T, PlayerError>;
