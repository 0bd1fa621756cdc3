use anyhow::{Context, Result};
use clap::Parser;
use liveassist::{
    build_provider, create_router, llm, AppState, Cli, Command, Config, TranscriptAggregator,
};
use std::sync::Arc;
use tracing::info;

/// System instruction for the `pitch` command.
const PITCH_SYSTEM_PROMPT: &str =
    "You are a professional mutual fund sales representative \
with expertise in writing compelling scripts for negotiation and deal recommendation. \
Respond to the user with a great narrative they can build with the customer. \
Also describe what the future of that mutual fund could look like.";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Serve {
        bind: None,
        port: None,
    }) {
        Command::Serve { bind, port } => {
            if let Some(bind) = bind {
                cfg.service.http.bind = bind;
            }
            if let Some(port) = port {
                cfg.service.http.port = port;
            }
            serve(cfg).await
        }
        Command::Pitch { prompt } => pitch(&cfg, &prompt).await,
    }
}

async fn serve(cfg: Config) -> Result<()> {
    let provider = build_provider(&cfg.llm)?;
    let state = AppState::new(
        TranscriptAggregator::new(cfg.session.clone()),
        Arc::from(provider),
    );
    let app = create_router(state);

    let addr = cfg.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("HTTP server listening on {}", addr);
    info!("LLM: {} ({})", cfg.llm.provider, cfg.llm.model);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn pitch(cfg: &Config, prompt: &str) -> Result<()> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        println!("Please enter a valid prompt.");
        return Ok(());
    }

    let provider = build_provider(&cfg.llm)?;
    let reply = llm::generate(provider.as_ref(), PITCH_SYSTEM_PROMPT, prompt).await;

    println!("There you go:\n");
    println!("{}", reply);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
