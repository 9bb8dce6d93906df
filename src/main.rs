use std::env;

use anyhow::Result;
use dotenv::dotenv;
use recruit_api_client::{RecruitingClient, api::models::AuthStatus};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = RecruitingClient::from_env()?;
    info!(api_root = client.gateway().api_root(), "probing recruiting backend");

    // Optional login so the session-protected routes can be checked too
    if let (Ok(email), Ok(password)) = (env::var("RECRUIT_API_EMAIL"), env::var("RECRUIT_API_PASSWORD")) {
        client.login(&email, &password).await?;
    }

    let auth: AuthStatus = serde_json::from_value(client.check_auth().await?)?;
    println!("{}", serde_json::to_string_pretty(&auth)?);

    if auth.authenticated {
        let stats = client.get_dashboard_stats().await?;
        println!("{}", serde_json::to_string_pretty(&stats)?);
        client.logout().await?;
    } else {
        warn!("not authenticated, skipping dashboard stats");
    }

    Ok(())
}
