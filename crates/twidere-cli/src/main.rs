//! Twidere command-line shell.
//!
//! A thin terminal front end over the REST client:
//! - `twidere login` - PIN-based OAuth authorization
//! - `twidere home` / `mentions` / `timeline` - read timelines
//! - `twidere post` / `delete` / `retweet` / `favorite` - write statuses
//! - `twidere dm`, `search`, `follow`, `unfollow`, `blocks`, `rate-limit`
//!
//! Every command accepts `--json` for machine-readable output.

#![forbid(unsafe_code)]

mod commands;
mod config;
mod login;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line shell for the Twitter v1 REST API.
#[derive(Parser, Debug)]
#[command(name = "twidere")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (defaults to ~/.config/twidere/config.toml).
    #[arg(long, global = true, env = "TWIDERE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the consumer key.
    #[arg(long, global = true, env = "TWIDERE_CONSUMER_KEY", hide_env_values = true)]
    pub consumer_key: Option<String>,

    /// Override the consumer secret.
    #[arg(long, global = true, env = "TWIDERE_CONSUMER_SECRET", hide_env_values = true)]
    pub consumer_secret: Option<String>,

    /// Override the access token.
    #[arg(long, global = true, env = "TWIDERE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Override the access token secret.
    #[arg(
        long,
        global = true,
        env = "TWIDERE_ACCESS_TOKEN_SECRET",
        hide_env_values = true
    )]
    pub access_token_secret: Option<String>,

    /// Send every request to this root instead of the public service.
    #[arg(long, global = true, env = "TWIDERE_API_ROOT")]
    pub api_root: Option<String>,

    /// Output JSON instead of human-readable text.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Authorize this shell with a PIN and store the access token.
    Login,

    /// Show the home timeline.
    Home(commands::TimelineArgs),

    /// Show statuses mentioning you.
    Mentions(commands::TimelineArgs),

    /// Show a user's profile.
    User {
        /// Screen name or numeric id
        user: String,
    },

    /// Show a user's statuses.
    Timeline {
        /// Screen name or numeric id
        user: String,

        #[command(flatten)]
        paging: commands::TimelineArgs,
    },

    /// Post a status.
    Post {
        text: String,

        /// Status id this replies to
        #[arg(long)]
        reply_to: Option<u64>,
    },

    /// Delete one of your statuses.
    Delete { id: u64 },

    /// Retweet a status.
    Retweet { id: u64 },

    /// Favorite a status.
    Favorite { id: u64 },

    /// Direct messages.
    #[command(subcommand)]
    Dm(commands::DmCommand),

    /// Search recent statuses.
    Search {
        query: String,

        /// Results per page
        #[arg(long, default_value_t = 20)]
        count: u32,
    },

    /// Follow a user.
    Follow { user: String },

    /// Unfollow a user.
    Unfollow { user: String },

    /// Block queries.
    #[command(subcommand)]
    Blocks(commands::BlocksCommand),

    /// Show the API rate limit status.
    RateLimit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for JSON output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    commands::run(cli.command, &cli.global).await
}
