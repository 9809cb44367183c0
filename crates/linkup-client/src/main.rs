//! Command-line feed client for LinkUp.
//!
//! Signs in as the demo user against `LINKUP_API_URL`, optionally publishes
//! the command-line arguments as a new post, and prints the feed.
//!
//! ```text
//! linkup-feed                  # print the feed
//! linkup-feed hello everyone   # post "hello everyone", then print
//! ```

use chrono::Utc;
use linkup_client::{ClientConfig, ClientError, FeedClient, FeedView};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Entry point for the command-line client.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the post cannot be
/// published. A feed that fails to load is printed as its placeholder.
#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    let config = ClientConfig::from_env()?;
    info!(api_url = %config.api_url, "linkup-feed starting");

    let mut client = FeedClient::new(&config);
    if let Err(e) = client.login().await {
        warn!(error = %e, "Feed could not be loaded");
    }

    let content = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !content.trim().is_empty() {
        let post = client.create_post(&content).await?;
        info!(post_id = %post.id, "Published");
    }

    print_feed(&client.feed_view(Utc::now()));
    Ok(())
}

fn print_feed(view: &FeedView) {
    if let Some(text) = view.placeholder() {
        println!("{text}");
    }
    if let FeedView::Posts(cards) = view {
        for card in cards {
            let liked = if card.liked_by_viewer { " (liked)" } else { "" };
            println!("{} - {}", card.author_name, card.posted_ago);
            println!("  {}", card.content);
            println!(
                "  {} likes{liked}, {} comments",
                card.like_count, card.comment_count
            );
        }
    }
}
