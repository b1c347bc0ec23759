/// Playlist Server - playlist management HTTP API
use clap::{Parser, Subcommand};
use playlist_core::{CreateVideo, UserId};
use playlist_server::{create_router, config::ServerConfig, AppState, AuthService};
use playlist_storage::SqliteStore;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "playlist-server")]
#[command(about = "Playlist management HTTP server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print an access token for a user (development only)
    IssueToken {
        /// User ID (UUID) to put in the token subject
        #[arg(short, long)]
        user_id: String,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Register a video record that playlists can reference
    AddVideo {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
        /// Owning user ID (UUID)
        #[arg(short, long)]
        owner: String,
        /// Duration in seconds
        #[arg(long)]
        duration: Option<i64>,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playlist_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::IssueToken { user_id, config } => {
            issue_token(&user_id, config)?;
        }
        Commands::AddVideo {
            title,
            description,
            owner,
            duration,
            config,
        } => {
            add_video(title, description, &owner, duration, config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Playlist Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = SqliteStore::connect(&config.storage.database_url).await?;
    tracing::info!("Database connected");

    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    ));

    let app_state = AppState::new(Arc::new(store), auth_service);
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn issue_token(user_id: &str, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let user_id = UserId::parse(user_id)?;

    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    );
    let token = auth_service.create_access_token(&user_id)?;

    println!("{}", token);
    Ok(())
}

async fn add_video(
    title: String,
    description: String,
    owner: &str,
    duration_seconds: Option<i64>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let owner = UserId::parse(owner)?;

    let store = SqliteStore::connect(&config.storage.database_url).await?;
    let video = playlist_storage::videos::create(
        store.pool(),
        CreateVideo {
            title,
            description,
            duration_seconds,
            owner,
        },
    )
    .await?;

    tracing::info!(video_id = %video.id, "Video registered");
    println!("{}", video.id);
    Ok(())
}
