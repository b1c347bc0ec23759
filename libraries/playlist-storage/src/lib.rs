//! Playlist Storage
//!
//! `SQLite` persistence for playlists and the video records they reference.
//!
//! Each playlist is stored as one logical document: a `playlists` row plus
//! its ordered `playlist_videos` entries. Every mutation runs in a single
//! transaction, so video add/remove are atomic append-if-absent and pull
//! operations rather than read/modify/write-back.
//!
//! # Example
//!
//! ```rust,no_run
//! use playlist_core::{CreatePlaylist, PlaylistStore, UserId};
//! use playlist_storage::SqliteStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::connect("sqlite://playlists.db").await?;
//!
//! let playlist = store
//!     .create_playlist(CreatePlaylist {
//!         name: "Mornings".to_string(),
//!         description: "Slow start".to_string(),
//!         created_by: UserId::generate(),
//!     })
//!     .await?;
//! assert!(playlist.videos.is_empty());
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod playlists;
pub mod videos;

pub use context::SqliteStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://playlists.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool created");

    Ok(pool)
}
