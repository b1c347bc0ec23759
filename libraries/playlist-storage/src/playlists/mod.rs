use crate::videos;
use chrono::{DateTime, Utc};
use playlist_core::{
    error::{CoreError, Result},
    CreatePlaylist, Playlist, PlaylistId, PlaylistWithVideos, UpdatePlaylist, UserId,
    VideoChange, VideoId,
};
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;

#[derive(sqlx::FromRow)]
struct PlaylistRow {
    id: PlaylistId,
    name: String,
    description: String,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlaylistRow {
    fn into_playlist(self, videos: Vec<VideoId>) -> Playlist {
        Playlist {
            id: self.id,
            name: self.name,
            description: self.description,
            created_by: self.created_by,
            videos,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Video references of a playlist in position order
async fn load_video_ids(conn: &mut SqliteConnection, id: &PlaylistId) -> Result<Vec<VideoId>> {
    let ids = sqlx::query_scalar::<_, VideoId>(
        "SELECT video_id FROM playlist_videos WHERE playlist_id = ? ORDER BY position",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(ids)
}

async fn fetch_playlist(conn: &mut SqliteConnection, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query_as::<_, PlaylistRow>(
        r#"
        SELECT id, name, description, created_by, created_at, updated_at
        FROM playlists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let videos = load_video_ids(conn, id).await?;
    Ok(Some(row.into_playlist(videos)))
}

/// Bump `updated_at`; returns `false` when the playlist does not exist.
///
/// Issued first inside mutating transactions so the write lock is taken
/// before anything is read.
async fn touch(conn: &mut SqliteConnection, id: &PlaylistId) -> Result<bool> {
    let result = sqlx::query("UPDATE playlists SET updated_at = ? WHERE id = ?")
        .bind(Utc::now())
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Get playlist by ID
pub async fn get_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let mut conn = pool.acquire().await?;
    fetch_playlist(&mut conn, id).await
}

/// Get playlist with its video references resolved to video records
pub async fn get_with_videos(
    pool: &SqlitePool,
    id: &PlaylistId,
) -> Result<Option<PlaylistWithVideos>> {
    let mut tx = pool.begin().await?;

    let Some(playlist) = fetch_playlist(&mut tx, id).await? else {
        return Ok(None);
    };
    let videos = videos::get_for_playlist(&mut tx, id).await?;

    tx.commit().await?;

    Ok(Some(PlaylistWithVideos::from_parts(playlist, videos)))
}

/// Get all playlists owned by a user, newest first
pub async fn get_by_owner(pool: &SqlitePool, owner: &UserId) -> Result<Vec<Playlist>> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query_as::<_, PlaylistRow>(
        r#"
        SELECT id, name, description, created_by, created_at, updated_at
        FROM playlists
        WHERE created_by = ?
        ORDER BY created_at DESC, seq DESC
        "#,
    )
    .bind(owner)
    .fetch_all(&mut *tx)
    .await?;

    let entries = sqlx::query_as::<_, (PlaylistId, VideoId)>(
        r#"
        SELECT pv.playlist_id, pv.video_id
        FROM playlist_videos pv
        INNER JOIN playlists p ON p.id = pv.playlist_id
        WHERE p.created_by = ?
        ORDER BY pv.playlist_id, pv.position
        "#,
    )
    .bind(owner)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    let mut videos_by_playlist: HashMap<PlaylistId, Vec<VideoId>> = HashMap::new();
    for (playlist_id, video_id) in entries {
        videos_by_playlist.entry(playlist_id).or_default().push(video_id);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let videos = videos_by_playlist.remove(&row.id).unwrap_or_default();
            row.into_playlist(videos)
        })
        .collect())
}

/// Create new playlist with an empty video list
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    let id = PlaylistId::generate();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO playlists (id, name, description, created_by, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&playlist.name)
    .bind(&playlist.description)
    .bind(&playlist.created_by)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    get_by_id(pool, &id)
        .await?
        .ok_or_else(|| CoreError::storage("Failed to retrieve created playlist"))
}

/// Append a video to the end of a playlist unless already present
pub async fn add_video(
    pool: &SqlitePool,
    id: &PlaylistId,
    video_id: &VideoId,
) -> Result<Option<VideoChange>> {
    let mut tx = pool.begin().await?;

    if !touch(&mut tx, id).await? {
        return Ok(None);
    }

    let inserted = sqlx::query(
        r#"
        INSERT OR IGNORE INTO playlist_videos (playlist_id, video_id, position)
        SELECT ?, ?, COALESCE(MAX(position), 0) + 1
        FROM playlist_videos
        WHERE playlist_id = ?
        "#,
    )
    .bind(id)
    .bind(video_id)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if inserted == 0 {
        tx.rollback().await?;
        return Ok(get_by_id(pool, id).await?.map(VideoChange::Unchanged));
    }

    let playlist = fetch_playlist(&mut tx, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Playlist", id.as_str()))?;
    tx.commit().await?;

    Ok(Some(VideoChange::Applied(playlist)))
}

/// Remove a video from a playlist; remaining videos keep their order
pub async fn remove_video(
    pool: &SqlitePool,
    id: &PlaylistId,
    video_id: &VideoId,
) -> Result<Option<VideoChange>> {
    let mut tx = pool.begin().await?;

    if !touch(&mut tx, id).await? {
        return Ok(None);
    }

    let removed = sqlx::query("DELETE FROM playlist_videos WHERE playlist_id = ? AND video_id = ?")
        .bind(id)
        .bind(video_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if removed == 0 {
        tx.rollback().await?;
        return Ok(get_by_id(pool, id).await?.map(VideoChange::Unchanged));
    }

    let playlist = fetch_playlist(&mut tx, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Playlist", id.as_str()))?;
    tx.commit().await?;

    Ok(Some(VideoChange::Applied(playlist)))
}

/// Replace name and description, returning the updated playlist
pub async fn update(
    pool: &SqlitePool,
    id: &PlaylistId,
    update: UpdatePlaylist,
) -> Result<Option<Playlist>> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, PlaylistRow>(
        r#"
        UPDATE playlists
        SET name = ?, description = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, name, description, created_by, created_at, updated_at
        "#,
    )
    .bind(&update.name)
    .bind(&update.description)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let videos = load_video_ids(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Some(row.into_playlist(videos)))
}

/// Delete playlist and its video references, returning the deleted playlist
pub async fn delete(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let mut tx = pool.begin().await?;

    let mut entries = sqlx::query_as::<_, (VideoId, i64)>(
        "DELETE FROM playlist_videos WHERE playlist_id = ? RETURNING video_id, position",
    )
    .bind(id)
    .fetch_all(&mut *tx)
    .await?;

    let row = sqlx::query_as::<_, PlaylistRow>(
        r#"
        DELETE FROM playlists
        WHERE id = ?
        RETURNING id, name, description, created_by, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(row) = row else {
        tx.rollback().await?;
        return Ok(None);
    };

    tx.commit().await?;

    entries.sort_by_key(|(_, position)| *position);
    let videos = entries.into_iter().map(|(video_id, _)| video_id).collect();

    Ok(Some(row.into_playlist(videos)))
}
