//! Vimeo Embed CLI - Headless Player Inspection Tool
//!
//! Features:
//! - Render the synthesized player document
//! - Print the canonical embed URL
//! - Replay raw event streams through a headless surface

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod headless;

/// Vimeo Embed CLI - embedded player toolkit
#[derive(Parser)]
#[command(name = "vimeo-embed")]
#[command(version)]
#[command(about = "Embedded Vimeo player inspection toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Player flags shared by all subcommands
#[derive(Args)]
pub struct PlayerFlags {
    /// Start playback automatically
    #[arg(long)]
    pub autoplay: bool,

    /// Restart playback when the video ends
    #[arg(long = "loop")]
    pub looping: bool,

    /// Start with the audio muted
    #[arg(long)]
    pub muted: bool,

    /// Show the video title overlay
    #[arg(long)]
    pub title: bool,

    /// Show the byline overlay
    #[arg(long)]
    pub byline: bool,

    /// Show the uploader portrait overlay
    #[arg(long)]
    pub portrait: bool,

    /// Show the Vimeo badge overlay
    #[arg(long)]
    pub badge: bool,

    /// Hide the player control bar
    #[arg(long)]
    pub no_controls: bool,

    /// Allow the player to track the session
    #[arg(long)]
    pub no_dnt: bool,

    /// Background color (RRGGBB or AARRGGBB, leading '#' optional)
    #[arg(long)]
    pub background: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the synthesized player document
    Render {
        /// Vimeo video identifier
        video_id: String,

        #[command(flatten)]
        flags: PlayerFlags,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the canonical embed URL
    Url {
        /// Vimeo video identifier
        video_id: String,

        #[command(flatten)]
        flags: PlayerFlags,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay raw event names through a headless surface
    Replay {
        /// Vimeo video identifier
        video_id: String,

        #[command(flatten)]
        flags: PlayerFlags,

        /// Comma-separated raw event names (play, pause, ready, seek, finish, ...)
        #[arg(short, long, value_delimiter = ',')]
        events: Vec<String>,

        /// Wrap the stream in fullscreen enter/exit notifications
        #[arg(long)]
        fullscreen: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .init();

    match cli.command {
        Commands::Render {
            video_id,
            flags,
            output,
        } => {
            commands::render(&video_id, &flags, output)?;
        }
        Commands::Url {
            video_id,
            flags,
            json,
        } => {
            commands::url(&video_id, &flags, json)?;
        }
        Commands::Replay {
            video_id,
            flags,
            events,
            fullscreen,
        } => {
            commands::replay(&video_id, &flags, &events, fullscreen).await?;
        }
    }

    Ok(())
}
