use anyhow::{Context, Result};
use std::io::Write;

use crate::client::{DeepClaw, Transport};

use super::output::write_json;
use super::Commands;

/// Handle a CLI subcommand: issue its request and print the result
pub async fn handle_command<T, W>(command: &Commands, client: &DeepClaw<T>, out: &mut W) -> Result<()>
where
    T: Transport,
    W: Write,
{
    let result = match command {
        Commands::Join { name, bio, invited } => client.join(name, bio.as_deref(), *invited).await,
        Commands::Post { content, key } => client.post(key, content).await,
        Commands::Comment {
            post_id,
            content,
            key,
            parent,
        } => client.comment(key, post_id, content, parent.as_deref()).await,
        Commands::Vote { post_id, value, key } => client.vote(key, post_id, *value).await,
        Commands::Feed { limit } => client.feed(*limit).await,
        Commands::Get { post_id } => client.get_post(post_id).await,
        Commands::Agents => client.agents().await,
        Commands::Agent { name } => client.agent(name).await,
        Commands::Info => client.info().await,
        Commands::Docs => client.docs().await,
    }
    .context("DeepClaw request failed")?;

    write_json(out, &result).context("Failed to write result")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ApiRequest, MockTransport, Vote};
    use crate::utils::DeepClawError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn run(command: Commands, expected: ApiRequest, response: serde_json::Value) -> String {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(move |request| *request == expected)
            .times(1)
            .returning(move |_| Ok(response.clone()));

        let client = DeepClaw::new(transport);
        let mut out = Vec::new();
        handle_command(&command, &client, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_feed_prints_pretty_json() {
        let out = run(
            Commands::Feed { limit: 5 },
            ApiRequest::get("/feed?limit=5"),
            json!({"posts": [], "limit": 5}),
        )
        .await;
        assert_eq!(out, "{\n  \"posts\": [],\n  \"limit\": 5\n}\n");
    }

    #[tokio::test]
    async fn test_error_payload_printed_like_success() {
        let out = run(
            Commands::Get {
                post_id: "missing".to_string(),
            },
            ApiRequest::get("/posts/missing"),
            json!({"error": "Post not found"}),
        )
        .await;
        assert_eq!(out, "{\n  \"error\": \"Post not found\"\n}\n");
    }

    #[tokio::test]
    async fn test_vote_dispatch() {
        run(
            Commands::Vote {
                post_id: "42".to_string(),
                value: Vote::Clear,
                key: "k1".to_string(),
            },
            ApiRequest::post("/posts/42/vote", json!({"value": 0})).with_key("k1"),
            json!({"post_id": "42", "your_vote": 0, "score": 0}),
        )
        .await;
    }

    #[tokio::test]
    async fn test_comment_dispatch() {
        run(
            Commands::Comment {
                post_id: "42".to_string(),
                content: "hi".to_string(),
                key: "k1".to_string(),
                parent: Some("7".to_string()),
            },
            ApiRequest::post("/posts/42/comments", json!({"content": "hi", "parent_id": "7"}))
                .with_key("k1"),
            json!({"id": "c1"}),
        )
        .await;
    }

    #[tokio::test]
    async fn test_join_and_post_dispatch() {
        run(
            Commands::Join {
                name: "Ada".to_string(),
                bio: None,
                invited: true,
            },
            ApiRequest::post("/agents", json!({"name": "Ada", "invited": true})),
            json!({"id": "a1"}),
        )
        .await;

        run(
            Commands::Post {
                content: "hello".to_string(),
                key: "k1".to_string(),
            },
            ApiRequest::post("/posts", json!({"content": "hello"})).with_key("k1"),
            json!({"id": "p1"}),
        )
        .await;
    }

    #[tokio::test]
    async fn test_docs_dispatch() {
        let out = run(
            Commands::Docs,
            ApiRequest::get("/docs"),
            json!({"auth": "Include X-API-Key header"}),
        )
        .await;
        assert_eq!(out, "{\n  \"auth\": \"Include X-API-Key header\"\n}\n");
    }

    #[tokio::test]
    async fn test_transport_failure_writes_nothing() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Err(DeepClawError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "refused",
            )))
        });

        let client = DeepClaw::new(transport);
        let mut out = Vec::new();
        let err = handle_command(&Commands::Info, &client, &mut out).await.unwrap_err();
        assert!(format!("{:#}", err).contains("refused"));
        assert!(out.is_empty());
    }
}
