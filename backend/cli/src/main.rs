mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use clap::{Parser, Subcommand};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use ocrelay_core::OcrProvider;
use ocrelay_function::function_router;
use ocrelay_gateway::{build_router, start_server, GatewayState};
use ocrelay_vision::{GoogleVisionClient, VisionCredentials};

use config::Config;

#[derive(Parser)]
#[command(name = "ocrelay")]
#[command(about = "OCR Relay — HTTP front for Google Cloud Vision text detection")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the persistent gateway service
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Start the function-style surface (fresh client per request)
    Function {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Query the local gateway health endpoint
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_gateway(config).await?;
        }
        Commands::Function { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_function(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("OCR relay is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

/// Build the Vision client once at startup. A missing credential is not
/// fatal: the gateway starts anyway and reports itself unhealthy.
fn init_provider() -> Option<Arc<dyn OcrProvider>> {
    info!("Initializing Google Vision API client");
    match VisionCredentials::from_env() {
        Some(credentials) => {
            info!("Google Vision API client initialized");
            Some(Arc::new(GoogleVisionClient::new(credentials)))
        }
        None => {
            warn!(
                "No Vision credentials found. Set GOOGLE_VISION_API_KEY or \
                 GOOGLE_VISION_ACCESS_TOKEN."
            );
            None
        }
    }
}

async fn run_gateway(config: Config) -> Result<()> {
    info!(
        port = config.port,
        bind = %config.bind_address,
        origin = %config.allowed_origin,
        "Starting OCR relay gateway"
    );

    let state = GatewayState {
        provider: init_provider(),
    };

    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let router = build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
    start_server(addr, router).await
}

async fn run_function(config: Config) -> Result<()> {
    info!(
        port = config.port,
        bind = %config.bind_address,
        "Starting OCR relay function surface"
    );

    // The function surface reflects any origin, like its serverless host would.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let router = function_router()
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
    start_server(addr, router).await
}
