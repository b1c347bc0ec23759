//! Playlist domain types

use super::ids::{PlaylistId, UserId, VideoId};
use super::video::Video;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-owned, ordered collection of video references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,
    /// Display name (stored trimmed)
    pub name: String,
    /// Free-text description (stored trimmed)
    pub description: String,

    /// Owner; set from the authenticated caller at creation and never changed
    pub created_by: UserId,

    /// Video references in playlist order, each at most once
    pub videos: Vec<VideoId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Whether the given user owns this playlist
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }
}

/// Playlist with its video references resolved to full records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistWithVideos {
    /// Unique playlist identifier
    pub id: PlaylistId,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Owner
    pub created_by: UserId,

    /// Resolved videos in playlist order; references without a record are omitted
    pub videos: Vec<Video>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl PlaylistWithVideos {
    /// Combine a playlist with the records its references resolve to
    pub fn from_parts(playlist: Playlist, videos: Vec<Video>) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            description: playlist.description,
            created_by: playlist.created_by,
            videos,
            created_at: playlist.created_at,
            updated_at: playlist.updated_at,
        }
    }
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    /// Playlist name
    pub name: String,
    /// Playlist description
    pub description: String,
    /// Owner user ID
    pub created_by: UserId,
}

/// Replacement name and description for an existing playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlaylist {
    /// New name
    pub name: String,
    /// New description
    pub description: String,
}
