//! Store trait for playlist persistence

use crate::error::Result;
use crate::types::{CreatePlaylist, Playlist, PlaylistId, PlaylistWithVideos, UpdatePlaylist, UserId, VideoId};
use async_trait::async_trait;

/// Outcome of an atomic video add/remove on an existing playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoChange {
    /// The playlist was modified; carries the new state
    Applied(Playlist),
    /// Nothing to do (already present on add, absent on remove); carries the current state
    Unchanged(Playlist),
}

/// Access to the playlist collection
///
/// Every method is a single logical store action. Lookups that miss return
/// `Ok(None)`; `Err` is reserved for store faults.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Insert a new playlist with an empty video list
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist>;

    /// Get playlist by ID
    async fn get_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Get playlist by ID with video references resolved
    async fn get_playlist_with_videos(&self, id: &PlaylistId)
        -> Result<Option<PlaylistWithVideos>>;

    /// All playlists owned by a user, newest first
    async fn get_playlists_by_owner(&self, owner: &UserId) -> Result<Vec<Playlist>>;

    /// Append a video unless it is already referenced
    ///
    /// Returns `None` if the playlist does not exist.
    async fn add_video(&self, id: &PlaylistId, video_id: &VideoId) -> Result<Option<VideoChange>>;

    /// Remove a video reference, keeping the order of the others
    ///
    /// Returns `None` if the playlist does not exist.
    async fn remove_video(
        &self,
        id: &PlaylistId,
        video_id: &VideoId,
    ) -> Result<Option<VideoChange>>;

    /// Replace name and description, returning the post-update state
    async fn update_playlist(
        &self,
        id: &PlaylistId,
        update: UpdatePlaylist,
    ) -> Result<Option<Playlist>>;

    /// Delete a playlist, returning the deleted record
    async fn delete_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;
}
