//! Hubz CLI
//!
//! Signs in to the Hubz analytics API, prints the attachment leaderboard and
//! signs out. Configuration comes from environment variables:
//! - HUBZ_API_URL: Base URL of the analytics API (default http://localhost:8080)
//! - HUBZ_EMAIL / HUBZ_PASSWORD: Portal credentials
//! - HUBZ_FORMAT: `text` (default) or `json`

mod client;
mod session;

use std::future::Future;

use anyhow::{Context, Result};
use client::{HubzClient, OutputFormat};
use session::SessionState;
use tracing_subscriber::EnvFilter;

struct CliConfig {
    api_url: String,
    email: String,
    password: String,
    format: OutputFormat,
}

impl CliConfig {
    fn from_env() -> Result<Self> {
        let email = std::env::var("HUBZ_EMAIL").context("HUBZ_EMAIL not set")?;
        let password = std::env::var("HUBZ_PASSWORD").context("HUBZ_PASSWORD not set")?;
        let api_url = std::env::var("HUBZ_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let format = match std::env::var("HUBZ_FORMAT") {
            Ok(raw) => raw.parse().map_err(anyhow::Error::msg)?,
            Err(_) => OutputFormat::Text,
        };

        Ok(Self {
            api_url,
            email,
            password,
            format,
        })
    }
}

/// Await `fetch` unless `interrupt` fires first, then end the session in
/// every outcome. An interrupted fetch is dropped and yields `None`.
async fn fetch_then_logout<F, I>(client: &HubzClient, fetch: F, interrupt: I) -> Result<Option<String>>
where
    F: Future<Output = Result<String>>,
    I: Future,
{
    let outcome = tokio::select! {
        result = fetch => result.map(Some),
        _ = interrupt => {
            tracing::warn!("Interrupted; abandoning leaderboard request");
            Ok(None)
        }
    };

    if let Some(ended) = client.logout() {
        tracing::info!(user = %ended.name, "Signed out");
    }

    outcome
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the leaderboard
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env()?;
    let session = SessionState::new();
    let client = HubzClient::new(&config.api_url, session.clone())?;

    let signed_in = client.login(&config.email, &config.password).await?;
    tracing::info!(
        user_id = signed_in.user_id,
        user = %signed_in.name,
        email = %signed_in.email,
        role = %signed_in.role,
        landing = signed_in.role.landing_view(),
        "Signed in"
    );

    let outcome = fetch_then_logout(
        &client,
        client.get_leaderboard(config.format),
        tokio::signal::ctrl_c(),
    )
    .await?;

    if let Some(board) = outcome {
        println!("{}", board);
    }

    Ok(())
}
