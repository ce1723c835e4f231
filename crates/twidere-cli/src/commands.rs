//! Command dispatch.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::debug;
use twidere_api::{Paging, Query, StatusUpdate, TwitterClient, UserRef};

use crate::{Commands, GlobalArgs, config, login, output};

/// Paging flags for timeline commands.
#[derive(Args, Debug, Clone, Default)]
pub struct TimelineArgs {
    /// Number of statuses to fetch
    #[arg(long, short = 'n')]
    pub count: Option<u32>,

    /// Only statuses newer than this id
    #[arg(long)]
    pub since_id: Option<u64>,

    /// Only statuses at or older than this id
    #[arg(long)]
    pub max_id: Option<u64>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,
}

impl TimelineArgs {
    fn paging(&self) -> Paging {
        Paging {
            page: self.page,
            count: self.count,
            since_id: self.since_id,
            max_id: self.max_id,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum DmCommand {
    /// List received direct messages.
    List {
        #[arg(long, short = 'n')]
        count: Option<u32>,

        /// Show sent messages instead
        #[arg(long)]
        sent: bool,
    },

    /// Send a direct message.
    Send {
        /// Recipient screen name or id
        user: String,
        text: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum BlocksCommand {
    /// Check whether you block a user.
    Exists { user: String },
}

/// `@name`, `name` and numeric ids all name a user.
fn user_ref(user: &str) -> UserRef {
    let Ok(user) = user.parse::<UserRef>();
    user
}

fn client(global: &GlobalArgs) -> Result<TwitterClient> {
    let (path, config) = config::load(global)?;
    debug!(config = %path.display(), authorized = config.has_access_token(), "Loaded config");
    TwitterClient::new(config).context("failed to build client")
}

pub(crate) async fn run(command: Commands, global: &GlobalArgs) -> Result<()> {
    let json = global.json;
    let api = || client(global);

    match command {
        Commands::Login => {
            let (path, config) = config::load(global)?;
            login::run(&path, config, json).await
        }
        Commands::Home(args) => {
            let statuses = api()?.home_timeline(args.paging()).await?;
            output::statuses(&statuses, json)
        }
        Commands::Mentions(args) => {
            let statuses = api()?.mentions(args.paging()).await?;
            output::statuses(&statuses, json)
        }
        Commands::User { user } => {
            let user = api()?.show_user(&user_ref(&user)).await?;
            output::user(&user, json)
        }
        Commands::Timeline { user, paging } => {
            let statuses = api()?
                .user_timeline(Some(&user_ref(&user)), paging.paging())
                .await?;
            output::statuses(&statuses, json)
        }
        Commands::Post { text, reply_to } => {
            let mut update = StatusUpdate::new(text);
            if let Some(id) = reply_to {
                update = update.in_reply_to(id);
            }
            let status = api()?.update_status(update).await?;
            output::status("Posted", &status, json)
        }
        Commands::Delete { id } => {
            let status = api()?.destroy_status(id).await?;
            output::status("Deleted", &status, json)
        }
        Commands::Retweet { id } => {
            let status = api()?.retweet_status(id).await?;
            output::status("Retweeted", &status, json)
        }
        Commands::Favorite { id } => {
            let status = api()?.create_favorite(id).await?;
            output::status("Favorited", &status, json)
        }
        Commands::Dm(DmCommand::List { count, sent }) => {
            let paging = Paging {
                count,
                ..Paging::default()
            };
            let messages = if sent {
                api()?.sent_direct_messages(paging).await?
            } else {
                api()?.direct_messages(paging).await?
            };
            output::direct_messages(&messages, json)
        }
        Commands::Dm(DmCommand::Send { user, text }) => {
            let message = api()?.send_direct_message(&user_ref(&user), &text).await?;
            output::direct_message_sent(&message, json)
        }
        Commands::Search { query, count } => {
            let result = api()?.search(&Query::new(query).rpp(count)).await?;
            output::search(&result, json)
        }
        Commands::Follow { user } => {
            let user = api()?.create_friendship(&user_ref(&user), None).await?;
            output::user_action("Following", &user, json)
        }
        Commands::Unfollow { user } => {
            let user = api()?.destroy_friendship(&user_ref(&user)).await?;
            output::user_action("Unfollowed", &user, json)
        }
        Commands::Blocks(BlocksCommand::Exists { user }) => {
            let blocked = api()?.exists_block(&user_ref(&user)).await?;
            output::block_exists(&user, blocked, json)
        }
        Commands::RateLimit => {
            let status = api()?.rate_limit_status().await?;
            output::rate_limit(&status, json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_ref_parsing() {
        assert_eq!(user_ref("12345"), UserRef::Id(12_345));
        assert_eq!(user_ref("@alice"), UserRef::ScreenName("alice".into()));
        assert_eq!(user_ref("bob"), UserRef::ScreenName("bob".into()));
    }

    #[test]
    fn test_timeline_args_paging() {
        let args = TimelineArgs {
            count: Some(5),
            since_id: Some(10),
            ..TimelineArgs::default()
        };
        let paging = args.paging();
        assert_eq!(paging.count, Some(5));
        assert_eq!(paging.since_id, Some(10));
        assert_eq!(paging.max_id, None);
    }
}
