//! Video record queries
//!
//! Playlists only hold references; these queries resolve them. `create` is
//! used for seeding from the CLI and in tests.

use chrono::{DateTime, Utc};
use playlist_core::{
    error::{CoreError, Result},
    CreateVideo, PlaylistId, UserId, Video, VideoId,
};
use sqlx::{SqliteConnection, SqlitePool};

#[derive(sqlx::FromRow)]
struct VideoRow {
    id: VideoId,
    title: String,
    description: String,
    duration_seconds: Option<i64>,
    owner: UserId,
    created_at: DateTime<Utc>,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Video {
            id: row.id,
            title: row.title,
            description: row.description,
            duration_seconds: row.duration_seconds,
            owner: row.owner,
            created_at: row.created_at,
        }
    }
}

/// Register a video record
pub async fn create(pool: &SqlitePool, video: CreateVideo) -> Result<Video> {
    let id = VideoId::generate();

    sqlx::query(
        r#"
        INSERT INTO videos (id, title, description, duration_seconds, owner, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&video.title)
    .bind(&video.description)
    .bind(video.duration_seconds)
    .bind(&video.owner)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    get_by_id(pool, &id)
        .await?
        .ok_or_else(|| CoreError::storage("Failed to retrieve created video"))
}

/// Get video by ID
pub async fn get_by_id(pool: &SqlitePool, id: &VideoId) -> Result<Option<Video>> {
    let row = sqlx::query_as::<_, VideoRow>(
        r#"
        SELECT id, title, description, duration_seconds, owner, created_at
        FROM videos
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Video::from))
}

/// Resolve a playlist's references in playlist order, skipping unknown videos
pub(crate) async fn get_for_playlist(
    conn: &mut SqliteConnection,
    playlist_id: &PlaylistId,
) -> Result<Vec<Video>> {
    let rows = sqlx::query_as::<_, VideoRow>(
        r#"
        SELECT v.id, v.title, v.description, v.duration_seconds, v.owner, v.created_at
        FROM playlist_videos pv
        INNER JOIN videos v ON v.id = pv.video_id
        WHERE pv.playlist_id = ?
        ORDER BY pv.position
        "#,
    )
    .bind(playlist_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(Video::from).collect())
}
