//! `twidere login`: out-of-band (PIN) OAuth authorization.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use twidere_api::{TwitterClient, TwitterConfig};

use crate::output;

/// Run the PIN flow and persist the resulting access token to `path`.
///
/// `config` is the effective configuration; only the token is written back.
pub async fn run(path: &Path, config: TwitterConfig, json: bool) -> Result<()> {
    let client = TwitterClient::new(config).context("failed to build client")?;
    let oauth = client.oauth_client();

    let request_token = oauth
        .get_request_token()
        .await
        .context("failed to obtain a request token")?;
    let url = oauth.authorization_url(&request_token)?;

    eprintln!("Open this URL, authorize the app, then enter the PIN shown:");
    eprintln!();
    eprintln!("  {url}");
    eprintln!();
    eprint!("PIN: ");

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("failed to read PIN")?;
    let pin = line.trim();
    if pin.is_empty() {
        bail!("no PIN entered");
    }

    let access = oauth
        .get_access_token(&request_token, pin)
        .await
        .context("failed to exchange the PIN for an access token")?;

    crate::config::save_access_token(path, &access.pair.token, &access.pair.secret)?;
    info!(path = %path.display(), "Saved access token");

    output::login(access.screen_name.as_deref(), access.user_id, path, json)
}
