//! Scripted playback session
//!
//! Plays a mood playlist through a `SharedPlayback` and applies a list of
//! transport commands, while a background ticker advances simulated progress
//! the way the now-playing screen does.

use crate::error::{CliError, Result};
use moodtune_core::{MoodId, Track, TrackId, TrackProvider};
use moodtune_playback::{
    format_time, PlaybackEvent, PlaybackSnapshot, ProgressTracker, SharedPlayback, TickOutcome,
    Transition,
};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::{debug, info, trace};

/// One step of a session script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Next,
    Previous,
    Toggle,
    Shuffle,
    /// Let the ticker run for this many periods
    Wait(u32),
}

impl FromStr for SessionCommand {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let command = s.trim().to_ascii_lowercase();
        match command.as_str() {
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Previous),
            "toggle" => Ok(Self::Toggle),
            "shuffle" => Ok(Self::Shuffle),
            other => other
                .strip_prefix("wait:")
                .and_then(|ticks| ticks.parse().ok())
                .map(Self::Wait)
                .ok_or_else(|| CliError::InvalidCommand(s.trim().to_string())),
        }
    }
}

impl fmt::Display for SessionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("prev"),
            Self::Toggle => f.write_str("toggle"),
            Self::Shuffle => f.write_str("shuffle"),
            Self::Wait(ticks) => write!(f, "wait:{}", ticks),
        }
    }
}

/// Parse a comma-separated script such as `next,wait:3,toggle`
///
/// Blank entries are skipped.
pub fn parse_script(script: &str) -> Result<Vec<SessionCommand>> {
    script
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Tracks of `mood` from `provider`
///
/// A mood without tracks is reported as unknown.
pub async fn mood_playlist<P>(provider: &P, mood: &MoodId) -> Result<Vec<Track>>
where
    P: TrackProvider + ?Sized,
{
    let tracks = provider.tracks_for_mood(mood).await?;
    if tracks.is_empty() {
        return Err(CliError::UnknownMood(mood.to_string()));
    }
    Ok(tracks)
}

/// One-line description of a playback change
pub fn describe_change(snapshot: &PlaybackSnapshot, events: &[PlaybackEvent]) -> String {
    let status = if snapshot.is_playing { "▶" } else { "⏸" };
    let track = snapshot
        .current_track
        .as_ref()
        .map_or_else(|| "(nothing)".to_string(), |t| format!("{} - {}", t.title, t.artist));

    let position = snapshot.current_track.as_ref().and_then(|current| {
        snapshot
            .current_playlist
            .iter()
            .position(|t| t.id == current.id)
            .map(|i| format!(" [{}/{}]", i + 1, snapshot.current_playlist.len()))
    });

    let changes: Vec<&str> = events
        .iter()
        .map(|event| match event {
            PlaybackEvent::TrackChanged { .. } => "track",
            PlaybackEvent::PlayingChanged { .. } => "state",
            PlaybackEvent::PlaylistChanged { .. } => "playlist",
        })
        .collect();

    format!(
        "{} {}{} ({})",
        status,
        track,
        position.unwrap_or_default(),
        changes.join(", ")
    )
}

/// Background progress ticker, stopped when dropped
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Tick `progress` against `playback` every `period`
    pub fn spawn(playback: SharedPlayback, mut progress: ProgressTracker, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticks.tick().await;

            loop {
                ticks.tick().await;
                let outcome = playback.with_mut(|state| progress.tick(state, period));
                match outcome {
                    TickOutcome::Progressed => trace!(
                        elapsed = %format_time(progress.elapsed().as_secs()),
                        duration = %format_time(progress.duration().as_secs()),
                        "Progress"
                    ),
                    TickOutcome::Advanced => debug!("Advanced to next track"),
                    TickOutcome::Finished | TickOutcome::Idle => {}
                }
            }
        });

        Self { handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A playlist being played through a shared playback handle
pub struct Session {
    playback: SharedPlayback,
    playlist: Vec<Track>,
}

impl Session {
    /// Start playing `playlist`, from `start` if given, else from the first track
    pub fn start(
        playback: SharedPlayback,
        playlist: Vec<Track>,
        start: Option<&TrackId>,
    ) -> Result<Self> {
        let first = match start {
            Some(id) => playlist
                .iter()
                .find(|track| &track.id == id)
                .ok_or_else(|| CliError::UnknownTrack(id.to_string()))?,
            None => playlist
                .first()
                .ok_or(CliError::NothingToPlay)?,
        }
        .clone();

        info!(track_id = %first.id, tracks = playlist.len(), "Starting session");
        playback.with_mut(|state| state.play_with_context(first, playlist.clone()));

        Ok(Self { playback, playlist })
    }

    /// The shared handle this session drives
    pub fn playback(&self) -> &SharedPlayback {
        &self.playback
    }

    /// Apply one transport command
    ///
    /// Returns `None` for `Wait`, which only `run` can turn into elapsed time.
    pub fn apply(&self, command: SessionCommand) -> Option<Transition> {
        let outcome = self.playback.with_mut(|state| match command {
            SessionCommand::Next => Some(state.next(None)),
            SessionCommand::Previous => Some(state.previous(None)),
            SessionCommand::Toggle => Some(state.toggle_playback()),
            SessionCommand::Shuffle => Some(state.shuffle(&self.playlist)),
            SessionCommand::Wait(_) => None,
        });

        if let Some(Transition::Unchanged(reason)) = outcome {
            info!(command = %command, reason = %reason, "Command had no effect");
        }
        outcome
    }

    /// Run a script with the progress ticker active
    pub async fn run(
        &self,
        commands: &[SessionCommand],
        progress: ProgressTracker,
        period: Duration,
    ) -> PlaybackSnapshot {
        let _ticker = Ticker::spawn(self.playback.clone(), progress, period);

        for &command in commands {
            if let SessionCommand::Wait(ticks) = command {
                sleep(wait_time(period, ticks)).await;
            } else {
                self.apply(command);
            }
        }

        self.playback.snapshot()
    }
}

/// How long `wait:<ticks>` sleeps; saturates instead of overflowing
fn wait_time(period: Duration, ticks: u32) -> Duration {
    period.saturating_mul(ticks)
}
