use crate::error::Result as StorageResult;
use crate::{create_pool, playlists, run_migrations};
use async_trait::async_trait;
use playlist_core::{
    error::Result, CreatePlaylist, Playlist, PlaylistId, PlaylistStore, PlaylistWithVideos,
    UpdatePlaylist, UserId, VideoChange, VideoId,
};
use sqlx::SqlitePool;

/// Playlist store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database and apply migrations
    pub async fn connect(database_url: &str) -> StorageResult<Self> {
        let pool = create_pool(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PlaylistStore for SqliteStore {
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist> {
        playlists::create(&self.pool, playlist).await
    }

    async fn get_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_by_id(&self.pool, id).await
    }

    async fn get_playlist_with_videos(
        &self,
        id: &PlaylistId,
    ) -> Result<Option<PlaylistWithVideos>> {
        playlists::get_with_videos(&self.pool, id).await
    }

    async fn get_playlists_by_owner(&self, owner: &UserId) -> Result<Vec<Playlist>> {
        playlists::get_by_owner(&self.pool, owner).await
    }

    async fn add_video(&self, id: &PlaylistId, video_id: &VideoId) -> Result<Option<VideoChange>> {
        playlists::add_video(&self.pool, id, video_id).await
    }

    async fn remove_video(
        &self,
        id: &PlaylistId,
        video_id: &VideoId,
    ) -> Result<Option<VideoChange>> {
        playlists::remove_video(&self.pool, id, video_id).await
    }

    async fn update_playlist(
        &self,
        id: &PlaylistId,
        update: UpdatePlaylist,
    ) -> Result<Option<Playlist>> {
        playlists::update(&self.pool, id, update).await
    }

    async fn delete_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        playlists::delete(&self.pool, id).await
    }
}
