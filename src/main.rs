use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use scoped_search::history::handlers::{handle_clear_history, handle_list_history};
use scoped_search::history::memory::HistoryStore;
use scoped_search::provider::client::{HttpSearchProvider, SearchProvider};
use scoped_search::search::handlers::{handle_advanced_search, handle_basic_search};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} --bind <addr:port> --provider-url <url> [--api-key <key>]",
            args[0]
        );
        eprintln!(
            "Example: {} --bind 127.0.0.1:3000 --provider-url https://api.searchprovider.test/search",
            args[0]
        );

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut provider_url: Option<String> = None;
    let mut api_key: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--provider-url" => {
                provider_url = Some(args[i + 1].clone());
                i += 2;
            }
            "--api-key" => {
                api_key = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.expect("--bind is required");
    let provider_url = provider_url.expect("--provider-url is required");

    tracing::info!("Starting search service on {}", bind_addr);
    tracing::info!("Upstream provider: {}", provider_url);
    if api_key.is_some() {
        tracing::info!("Provider API key configured");
    }

    // 1. Injected collaborators:
    let provider: Arc<dyn SearchProvider> =
        Arc::new(HttpSearchProvider::new(provider_url, api_key));
    let history = Arc::new(HistoryStore::new());

    // 2. HTTP Router:
    let app = Router::new()
        .route("/search", get(handle_basic_search))
        .route("/search/advanced", post(handle_advanced_search))
        .route(
            "/history/:user",
            get(handle_list_history).delete(handle_clear_history),
        )
        .layer(Extension(provider))
        .layer(Extension(history));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
