//! Video records referenced by playlists
//!
//! Videos are owned by a separate collaborator; the playlist service only
//! reads them to resolve references.

use super::ids::{UserId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Unique video identifier
    pub id: VideoId,
    /// Video title
    pub title: String,
    /// Video description
    pub description: String,
    /// Duration in seconds, if known
    pub duration_seconds: Option<i64>,
    /// Uploading user
    pub owner: UserId,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

/// Data for registering a video record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideo {
    /// Video title
    pub title: String,
    /// Video description
    pub description: String,
    /// Duration in seconds, if known
    pub duration_seconds: Option<i64>,
    /// Uploading user
    pub owner: UserId,
}
