//! Aivyra Client - session status probe
//!
//! Reports the persisted login state and, when logged in, the user's
//! conversations. Configuration comes from `AIVYRA_*` environment variables.

use aivyra_client::{logging, AivyraClient, ClientConfig, Resource};
use anyhow::Context as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("aivyra_client=info");

    let config = ClientConfig::from_env().context("loading client configuration")?;
    let client = AivyraClient::connect(&config)
        .await
        .context("building API client")?;

    let session = client.session().snapshot().await;
    if !session.is_logged_in {
        println!("Not logged in (session file: {})", config.store_path.display());
        return Ok(());
    }

    println!(
        "Logged in as {} ({})",
        session.user_email.as_deref().unwrap_or("unknown"),
        session.user_id.as_deref().unwrap_or("unknown"),
    );

    match client.conversations.conversations(None).await {
        Resource::Success(conversations) if conversations.is_empty() => {
            println!("No conversations yet");
        }
        Resource::Success(conversations) => {
            for conversation in conversations {
                let visibility = if conversation.is_public { "public" } else { "private" };
                println!("  {}  {} [{}]", conversation.id, conversation.title, visibility);
            }
        }
        Resource::Error(message) => anyhow::bail!("failed to list conversations: {message}"),
        Resource::Loading => {}
    }

    Ok(())
}
