mod config;
mod errors;
mod matching;
mod routes;
mod state;
mod taxonomy;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::taxonomy::SkillTaxonomy;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting match service v{}", env!("CARGO_PKG_VERSION"));

    let taxonomy = match &config.skill_taxonomy_path {
        Some(path) => SkillTaxonomy::load(path)
            .with_context(|| format!("Failed to load skill taxonomy from {}", path.display()))?,
        None => SkillTaxonomy::builtin().context("Built-in skill taxonomy is invalid")?,
    };
    info!(
        "Skill taxonomy loaded: {} categories, {} skills",
        taxonomy.categories().len(),
        taxonomy.total_skills()
    );

    let state = AppState::new(config.clone(), taxonomy).context("Failed to compile skill patterns")?;
    info!("Match scorer initialized (backend: {})", state.scorer.backend());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
