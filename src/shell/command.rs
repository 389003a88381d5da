//! Command grammar for the interactive shell
//!
//! One command per line: a case-insensitive command word followed by
//! whitespace-separated arguments. The flag reason is the remainder of the
//! line after the video id.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowAllPlaylists,
    ShowPlaylist(String),
    SearchVideos(String),
    SearchVideoWithTag(String),
    FlagVideo { video_id: String, reason: String },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,

    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    UnknownCommand(String),

    #[error("{command} command requires {usage}")]
    MissingArgument {
        command: String,
        usage: &'static str,
    },
}

/// Take the next token, or report which argument the command is missing
fn require<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    command: &str,
    usage: &'static str,
) -> Result<String, ParseError> {
    parts
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseError::MissingArgument {
            command: command.to_string(),
            usage,
        })
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let mut parts = line.split_whitespace();
        let word = parts.next().ok_or(ParseError::Empty)?.to_uppercase();

        let command = match word.as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play(require(&mut parts, &word, "a video id")?),
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => {
                Command::CreatePlaylist(require(&mut parts, &word, "a playlist name")?)
            }
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                playlist: require(&mut parts, &word, "a playlist name and a video id")?,
                video_id: require(&mut parts, &word, "a playlist name and a video id")?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                playlist: require(&mut parts, &word, "a playlist name and a video id")?,
                video_id: require(&mut parts, &word, "a playlist name and a video id")?,
            },
            "CLEAR_PLAYLIST" => {
                Command::ClearPlaylist(require(&mut parts, &word, "a playlist name")?)
            }
            "DELETE_PLAYLIST" => {
                Command::DeletePlaylist(require(&mut parts, &word, "a playlist name")?)
            }
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SHOW_PLAYLIST" => {
                Command::ShowPlaylist(require(&mut parts, &word, "a playlist name")?)
            }
            "SEARCH_VIDEOS" => Command::SearchVideos(require(&mut parts, &word, "a search term")?),
            "SEARCH_VIDEO_WITH_TAG" => {
                Command::SearchVideoWithTag(require(&mut parts, &word, "a video tag")?)
            }
            "FLAG_VIDEO" => {
                let video_id = require(&mut parts, &word, "a video id and an optional reason")?;
                let reason = parts.collect::<Vec<_>>().join(" ");
                Command::FlagVideo { video_id, reason }
            }
            "ALLOW_VIDEO" => Command::AllowVideo(require(&mut parts, &word, "a video id")?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(ParseError::UnknownCommand(word)),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_word_is_case_insensitive() {
        assert_eq!(Command::parse("play v1"), Ok(Command::Play("v1".to_string())));
        assert_eq!(Command::parse("PLAY v1"), Ok(Command::Play("v1".to_string())));
        assert_eq!(Command::parse("Stop"), Ok(Command::Stop));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(Command::parse(""), Err(ParseError::Empty));
        assert_eq!(Command::parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("dance"),
            Err(ParseError::UnknownCommand("DANCE".to_string()))
        );
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            Command::parse("PLAY"),
            Err(ParseError::MissingArgument {
                command: "PLAY".to_string(),
                usage: "a video id",
            })
        );
    }

    #[test]
    fn test_two_argument_commands() {
        assert_eq!(
            Command::parse("add_to_playlist mix cat_id"),
            Ok(Command::AddToPlaylist {
                playlist: "mix".to_string(),
                video_id: "cat_id".to_string(),
            })
        );
    }

    #[test]
    fn test_flag_reason_is_rest_of_line() {
        assert_eq!(
            Command::parse("FLAG_VIDEO cat_id not my kind of video"),
            Ok(Command::FlagVideo {
                video_id: "cat_id".to_string(),
                reason: "not my kind of video".to_string(),
            })
        );
        assert_eq!(
            Command::parse("FLAG_VIDEO cat_id"),
            Ok(Command::FlagVideo {
                video_id: "cat_id".to_string(),
                reason: String::new(),
            })
        );
    }
}
