//! Moodtune - mood-based music browser and playback session runner
use clap::{Parser, Subcommand};
use moodtune_cli::{
    config::AppConfig,
    error::CliError,
    session::{describe_change, mood_playlist, parse_script, Session},
};
use moodtune_core::{MoodId, Track, TrackId, TrackProvider};
use moodtune_library::{
    ArtworkResolver, Favorites, FallbackProvider, JsonFileStore, OfflineCatalog, ThemePreference,
};
use moodtune_playback::{ProgressTracker, SharedPlayback};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "moodtune")]
#[command(about = "Pick a mood, get a playlist", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MOODTUNE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all moods
    Moods,
    /// List the tracks of a mood
    Playlist {
        /// Mood id (e.g. m1)
        mood: String,
    },
    /// Search tracks by title or artist
    Search {
        /// Text to look for
        query: String,
    },
    /// Manage favorite tracks
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Show the current theme
    Theme {
        /// Switch between light and dark
        #[arg(short, long)]
        toggle: bool,
    },
    /// Play a mood playlist and apply transport commands
    Session {
        /// Mood id (e.g. m1)
        mood: String,
        /// Track id to start from (defaults to the first track)
        #[arg(short, long)]
        track: Option<String>,
        /// Comma-separated commands: next, prev, toggle, shuffle, wait:<ticks>
        #[arg(short = 'x', long, default_value = "")]
        commands: String,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorites
    List,
    /// Add a track by id
    Add {
        /// Track id (e.g. s1)
        track: String,
    },
    /// Remove a track by id
    Remove {
        /// Track id (e.g. s1)
        track: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodtune=info,moodtune_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // No remote catalog configured: the bundled one is the primary
    let catalog = OfflineCatalog::bundled();
    let provider = FallbackProvider::new(catalog.clone());

    match cli.command {
        Commands::Moods => {
            list_moods(&provider).await?;
        }
        Commands::Playlist { mood } => {
            let tracks = mood_playlist(&provider, &MoodId::new(mood)).await?;
            print_tracks(&tracks);
        }
        Commands::Search { query } => {
            let tracks = provider.search(&query).await?;
            if tracks.is_empty() {
                println!("No tracks match '{}'", query);
            }
            print_tracks(&tracks);
        }
        Commands::Favorites { action } => {
            favorites(&config, &catalog, action).await?;
        }
        Commands::Theme { toggle } => {
            theme(&config, toggle).await?;
        }
        Commands::Session {
            mood,
            track,
            commands,
        } => {
            session(&config, &provider, &catalog, &mood, track, &commands).await?;
        }
    }

    Ok(())
}

async fn list_moods(provider: &impl TrackProvider) -> anyhow::Result<()> {
    for mood in provider.moods().await? {
        println!("{}  {} {}", mood.id, mood.emoji, mood.title);
    }
    Ok(())
}

fn print_tracks(tracks: &[Track]) {
    for track in tracks {
        println!("{:>4}  {} - {}", track.id.as_str(), track.title, track.artist);
    }
}

async fn favorites(
    config: &AppConfig,
    catalog: &OfflineCatalog,
    action: FavoritesAction,
) -> anyhow::Result<()> {
    let favorites = Favorites::new(JsonFileStore::new(config.store_path()));

    match action {
        FavoritesAction::List => {
            let tracks = favorites.list().await?;
            if tracks.is_empty() {
                println!("No favorites yet");
            }
            print_tracks(&tracks);
        }
        FavoritesAction::Add { track } => {
            let id = TrackId::new(track);
            let track = catalog
                .track(&id)
                .cloned()
                .ok_or_else(|| CliError::UnknownTrack(id.to_string()))?;

            if favorites.add(track).await? {
                println!("Added {} to favorites", id);
            } else {
                println!("{} is already a favorite", id);
            }
        }
        FavoritesAction::Remove { track } => {
            let id = TrackId::new(track);
            if favorites.remove(&id).await? {
                println!("Removed {} from favorites", id);
            } else {
                println!("{} is not a favorite", id);
            }
        }
    }

    Ok(())
}

async fn theme(config: &AppConfig, toggle: bool) -> anyhow::Result<()> {
    let preference = ThemePreference::new(JsonFileStore::new(config.store_path()));
    let mode = if toggle {
        preference.toggle().await?
    } else {
        preference.load().await?
    };

    let palette = mode.palette();
    println!("Theme: {}", mode);
    println!("  background {}  text {}  accent {}", palette.background, palette.text, palette.accent);
    Ok(())
}

async fn session(
    config: &AppConfig,
    provider: &impl TrackProvider,
    catalog: &OfflineCatalog,
    mood: &str,
    track: Option<String>,
    script: &str,
) -> anyhow::Result<()> {
    let commands = parse_script(script)?;
    let playlist = mood_playlist(provider, &MoodId::new(mood)).await?;

    let playback = SharedPlayback::default();
    playback.with_mut(|state| {
        state.subscribe(|snapshot, events| println!("{}", describe_change(snapshot, events)))
    });

    let start = track.map(TrackId::new);
    let session = Session::start(playback, playlist, start.as_ref())?;

    let artwork = ArtworkResolver::new(catalog.clone(), config.artwork.cache_size);
    if let Some(current) = session.playback().with(|state| state.current_track().cloned()) {
        if let Some(url) = artwork.display_artwork(&current).await {
            println!("  artwork: {}", url);
        }
    }

    let progress = ProgressTracker::from_config(&config.playback_config());
    let last = session.run(&commands, progress, config.tick_interval()).await;

    match last.current_track {
        Some(track) => tracing::info!(
            track_id = %track.id,
            is_playing = last.is_playing,
            "Session finished"
        ),
        None => tracing::info!("Session finished with nothing playing"),
    }

    Ok(())
}
