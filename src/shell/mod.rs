//! Interactive text frontend
//!
//! Reads command lines, dispatches to the player and renders structured
//! results as user-facing text. Input and output are generic so whole
//! sessions can be scripted in tests.

mod command;

pub use command::{Command, ParseError};

use crate::player::{PauseOutcome, Player, PlayOutcome, PlayerResult};
use std::io::{self, BufRead, Lines, Write};

const PROMPT: &str = "YT> ";

const SEARCH_PROMPT: &str = "Would you like to play any of the above? If yes, \
specify the number of the video.\nIf your answer is not a valid number, we will assume it's a no.";

const HELP_TEXT: &str = "Available commands:
    NUMBER_OF_VIDEOS                          - Show how many videos are in the library.
    SHOW_ALL_VIDEOS                           - Show all videos in the library.
    PLAY <video_id>                           - Play the specified video.
    PLAY_RANDOM                               - Play a random video.
    STOP                                      - Stop the current video.
    PAUSE                                     - Pause the current video.
    CONTINUE                                  - Resume the current paused video.
    SHOW_PLAYING                              - Show the video that is currently playing.
    CREATE_PLAYLIST <playlist_name>           - Create a new (empty) playlist.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Add a video to a playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Remove a video from a playlist.
    CLEAR_PLAYLIST <playlist_name>            - Remove all videos from a playlist.
    DELETE_PLAYLIST <playlist_name>           - Delete a playlist.
    SHOW_ALL_PLAYLISTS                        - Show all playlists.
    SHOW_PLAYLIST <playlist_name>             - Show all videos in a playlist.
    SEARCH_VIDEOS <search_term>               - Search for videos by title.
    SEARCH_VIDEO_WITH_TAG <video_tag>         - Search for videos by tag.
    FLAG_VIDEO <video_id> [reason]            - Flag a video, blocking it from playback.
    ALLOW_VIDEO <video_id>                    - Remove the flag from a video.
    HELP                                      - Show this help.
    EXIT                                      - Terminate the program.";

pub struct Shell {
    player: Player,
}

impl Shell {
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Run the interactive loop until EXIT or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        log::debug!("Shell session started");
        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next() else { break };
            match Command::parse(&line?) {
                Err(ParseError::Empty) => continue,
                Err(err) => writeln!(output, "{}", err)?,
                Ok(Command::Exit) => {
                    writeln!(output, "Goodbye!")?;
                    break;
                }
                Ok(cmd) => self.dispatch(cmd, &mut lines, output)?,
            }
        }
        log::debug!("Shell session ended");
        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        cmd: Command,
        lines: &mut Lines<R>,
        output: &mut W,
    ) -> io::Result<()> {
        match cmd {
            Command::NumberOfVideos => {
                writeln!(output, "{} videos in the library", self.player.video_count())?;
            }
            Command::ShowAllVideos => {
                writeln!(output, "Here's a list of all available videos:")?;
                for line in self.player.all_videos() {
                    writeln!(output, "{}", line)?;
                }
            }
            Command::Play(video_id) => {
                write_play_result(output, self.player.play(&video_id))?;
            }
            Command::PlayRandom => {
                // All videos flagged: intentionally silent
                if let Some(outcome) = self.player.play_random() {
                    write_play_outcome(output, &outcome)?;
                }
            }
            Command::Stop => match self.player.stop() {
                Ok(title) => writeln!(output, "Stopping video: {}", title)?,
                Err(err) => writeln!(output, "Cannot stop video: {}", err)?,
            },
            Command::Pause => match self.player.pause() {
                Ok(PauseOutcome::Paused(title)) => writeln!(output, "Pausing video: {}", title)?,
                Ok(PauseOutcome::AlreadyPaused(title)) => {
                    writeln!(output, "Video already paused: {}", title)?
                }
                Err(err) => writeln!(output, "Cannot pause video: {}", err)?,
            },
            Command::Continue => match self.player.resume() {
                Ok(title) => writeln!(output, "Continuing video: {}", title)?,
                Err(err) => writeln!(output, "Cannot continue video: {}", err)?,
            },
            Command::ShowPlaying => match self.player.now_playing() {
                Ok(now) => {
                    let suffix = if now.paused { " - PAUSED" } else { "" };
                    writeln!(output, "Currently playing: {}{}", now.video.display_line(), suffix)?;
                }
                Err(err) => writeln!(output, "{}", err)?,
            },
            Command::CreatePlaylist(name) => match self.player.create_playlist(&name) {
                Ok(display) => writeln!(output, "Successfully created new playlist: {}", display)?,
                Err(err) => writeln!(output, "Cannot create playlist: {}", err)?,
            },
            Command::AddToPlaylist { playlist, video_id } => {
                match self.player.add_to_playlist(&playlist, &video_id) {
                    Ok(title) => writeln!(output, "Added video to {}: {}", playlist, title)?,
                    Err(err) => writeln!(output, "Cannot add video to {}: {}", playlist, err)?,
                }
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                match self.player.remove_from_playlist(&playlist, &video_id) {
                    Ok(title) => writeln!(output, "Removed video from {}: {}", playlist, title)?,
                    Err(err) => writeln!(output, "Cannot remove video from {}: {}", playlist, err)?,
                }
            }
            Command::ClearPlaylist(name) => match self.player.clear_playlist(&name) {
                Ok(()) => writeln!(output, "Successfully removed all videos from {}", name)?,
                Err(err) => writeln!(output, "Cannot clear playlist {}: {}", name, err)?,
            },
            Command::DeletePlaylist(name) => match self.player.delete_playlist(&name) {
                Ok(()) => writeln!(output, "Deleted playlist: {}", name)?,
                Err(err) => writeln!(output, "Cannot delete playlist {}: {}", name, err)?,
            },
            Command::ShowAllPlaylists => {
                if !self.player.has_playlists() {
                    writeln!(output, "No playlists exist yet")?;
                } else {
                    writeln!(output, "Showing all playlists:")?;
                    for name in self.player.playlist_names() {
                        writeln!(output, "{}", name)?;
                    }
                }
            }
            Command::ShowPlaylist(name) => match self.player.show_playlist(&name) {
                Ok(entries) => {
                    writeln!(output, "Showing playlist: {}", name)?;
                    if entries.is_empty() {
                        writeln!(output, "No videos here yet")?;
                    }
                    for line in entries {
                        writeln!(output, "{}", line)?;
                    }
                }
                Err(err) => writeln!(output, "Cannot show playlist {}: {}", name, err)?,
            },
            Command::SearchVideos(term) => {
                let hits: Vec<String> = self
                    .player
                    .search_titles(&term)
                    .iter()
                    .map(|hit| hit.line.clone())
                    .collect();
                self.finish_search(&term, &hits, lines, output)?;
            }
            Command::SearchVideoWithTag(tag) => {
                let hits: Vec<String> = self
                    .player
                    .search_tags(&tag)
                    .iter()
                    .map(|hit| hit.line.clone())
                    .collect();
                self.finish_search(&tag, &hits, lines, output)?;
            }
            Command::FlagVideo { video_id, reason } => {
                match self.player.flag(&video_id, &reason) {
                    Ok(outcome) => {
                        if let Some(stopped) = outcome.stopped {
                            writeln!(output, "Stopping video: {}", stopped)?;
                        }
                        writeln!(
                            output,
                            "Successfully flagged video: {} (reason: {})",
                            outcome.title, outcome.reason
                        )?;
                    }
                    Err(err) => writeln!(output, "Cannot flag video: {}", err)?,
                }
            }
            Command::AllowVideo(video_id) => match self.player.allow(&video_id) {
                Ok(title) => writeln!(output, "Successfully removed flag from video: {}", title)?,
                Err(err) => writeln!(output, "Cannot remove flag from video: {}", err)?,
            },
            Command::Help => writeln!(output, "{}", HELP_TEXT)?,
            // EXIT is handled by the run loop
            Command::Exit => {}
        }
        Ok(())
    }

    /// Render search results and, when there are any, prompt for a selection
    /// and play it
    fn finish_search<R: BufRead, W: Write>(
        &mut self,
        term: &str,
        hits: &[String],
        lines: &mut Lines<R>,
        output: &mut W,
    ) -> io::Result<()> {
        if hits.is_empty() {
            writeln!(output, "No search results for {}", term)?;
            return Ok(());
        }

        writeln!(output, "Here are the results for {}:", term)?;
        for (i, line) in hits.iter().enumerate() {
            writeln!(output, "{}) {}", i + 1, line)?;
        }
        writeln!(output, "{}", SEARCH_PROMPT)?;
        output.flush()?;

        let reply = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        if let Some(result) = self.player.select_from_last_results(&reply) {
            write_play_result(output, result)?;
        }
        Ok(())
    }
}

fn write_play_outcome<W: Write>(output: &mut W, outcome: &PlayOutcome) -> io::Result<()> {
    if let Some(stopped) = &outcome.stopped {
        writeln!(output, "Stopping video: {}", stopped)?;
    }
    writeln!(output, "Playing video: {}", outcome.title)
}

fn write_play_result<W: Write>(output: &mut W, result: PlayerResult<PlayOutcome>) -> io::Result<()> {
    match result {
        Ok(outcome) => write_play_outcome(output, &outcome),
        Err(err) => writeln!(output, "Cannot play video: {}", err),
    }
}
