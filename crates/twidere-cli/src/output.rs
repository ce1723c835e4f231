//! Human-readable and JSON rendering.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use twidere_api::{DirectMessage, QueryResult, RateLimitStatus, Status, User};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("failed to serialize to JSON")?;
    println!("{output}");
    Ok(())
}

fn author(status: &Status) -> &str {
    status
        .user
        .as_ref()
        .map_or("?", |user| user.screen_name.as_str())
}

fn print_status(status: &Status) {
    println!(
        "{}  @{}  {}",
        status.id,
        author(status),
        status.created_at.format("%Y-%m-%d %H:%M")
    );
    for line in status.text.lines() {
        println!("    {line}");
    }
}

pub fn statuses(statuses: &[Status], json: bool) -> Result<()> {
    if json {
        return print_json(statuses);
    }
    if statuses.is_empty() {
        println!("No statuses.");
    }
    for status in statuses {
        print_status(status);
    }
    Ok(())
}

/// A single status with a leading verb ("Posted", "Retweeted", ..).
pub fn status(verb: &str, status: &Status, json: bool) -> Result<()> {
    if json {
        return print_json(status);
    }
    println!("{verb}:");
    print_status(status);
    Ok(())
}

pub fn user(user: &User, json: bool) -> Result<()> {
    if json {
        return print_json(user);
    }
    println!("@{} ({})", user.screen_name, user.name);
    println!("  Id:          {}", user.id);
    if let Some(location) = user.location.as_deref().filter(|l| !l.is_empty()) {
        println!("  Location:    {location}");
    }
    if let Some(description) = user.description.as_deref().filter(|d| !d.is_empty()) {
        println!("  Bio:         {description}");
    }
    println!("  Statuses:    {}", user.statuses_count);
    println!("  Following:   {}", user.friends_count);
    println!("  Followers:   {}", user.followers_count);
    if user.protected {
        println!("  Protected");
    }
    Ok(())
}

/// A user touched by a follow/unfollow style action.
pub fn user_action(verb: &str, user: &User, json: bool) -> Result<()> {
    if json {
        return print_json(user);
    }
    println!("{verb} @{}", user.screen_name);
    Ok(())
}

pub fn direct_messages(messages: &[DirectMessage], json: bool) -> Result<()> {
    if json {
        return print_json(messages);
    }
    if messages.is_empty() {
        println!("No direct messages.");
    }
    for message in messages {
        println!(
            "{}  @{} -> @{}  {}",
            message.id,
            message.sender_screen_name,
            message.recipient_screen_name,
            message.created_at.format("%Y-%m-%d %H:%M")
        );
        println!("    {}", message.text);
    }
    Ok(())
}

pub fn direct_message_sent(message: &DirectMessage, json: bool) -> Result<()> {
    if json {
        return print_json(message);
    }
    println!(
        "Sent to @{} (id {})",
        message.recipient_screen_name, message.id
    );
    Ok(())
}

pub fn search(result: &QueryResult, json: bool) -> Result<()> {
    if json {
        return print_json(result);
    }
    if result.results.is_empty() {
        println!("No results for {}.", result.query);
    }
    for tweet in &result.results {
        println!("{}  @{}", tweet.id, tweet.from_user);
        println!("    {}", tweet.text);
    }
    Ok(())
}

pub fn block_exists(user: &str, blocked: bool, json: bool) -> Result<()> {
    if json {
        return print_json(&json!({ "user": user, "blocked": blocked }));
    }
    if blocked {
        println!("You are blocking {user}.");
    } else {
        println!("You are not blocking {user}.");
    }
    Ok(())
}

pub fn rate_limit(status: &RateLimitStatus, json: bool) -> Result<()> {
    if json {
        return print_json(status);
    }
    println!(
        "Remaining: {}/{}",
        status.remaining_hits, status.hourly_limit
    );
    println!("Resets in: {}s", status.seconds_until_reset());
    Ok(())
}

pub fn login(screen_name: Option<&str>, user_id: Option<u64>, path: &Path, json: bool) -> Result<()> {
    if json {
        return print_json(&json!({
            "screen_name": screen_name,
            "user_id": user_id,
            "config": path.display().to_string(),
        }));
    }
    match screen_name {
        Some(name) => println!("Logged in as @{name}."),
        None => println!("Logged in."),
    }
    println!("Access token saved to {}", path.display());
    Ok(())
}
