/// Playlists API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    response::ApiResponse,
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use playlist_core::{
    validate::{is_valid_identifier, non_blank},
    CoreError, CreatePlaylist, Playlist, PlaylistId, PlaylistWithVideos,
    UpdatePlaylist, UserId, VideoChange, VideoId,
};
use serde::Deserialize;
use std::str::FromStr;

/// Body of create and update requests; both fields must be non-blank
#[derive(Debug, Default, Deserialize)]
pub struct PlaylistDetailsRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl PlaylistDetailsRequest {
    /// Trimmed name and description, or `None` if either is missing or blank
    fn details(&self) -> Option<(String, String)> {
        let name = non_blank(self.name.as_deref())?;
        let description = non_blank(self.description.as_deref())?;
        Some((name.to_string(), description.to_string()))
    }

    /// A body that is missing or does not parse counts as empty
    fn from_body(body: std::result::Result<Json<Self>, JsonRejection>) -> Self {
        match body {
            Ok(Json(req)) => req,
            Err(rejection) => {
                tracing::debug!("Unusable request body: {}", rejection.body_text());
                Self::default()
            }
        }
    }
}

/// Parse an identifier path parameter: blank and malformed values are both 400
fn path_id<T>(raw: &str, field: &str) -> Result<T>
where
    T: FromStr<Err = CoreError>,
{
    if raw.trim().is_empty() {
        return Err(ServerError::bad_request(format!("{} is required", field)));
    }
    let invalid = || ServerError::bad_request(format!("{} is invalid", field));
    if !is_valid_identifier(raw) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}

fn playlist_not_found() -> ServerError {
    ServerError::not_found("Playlist not found")
}

/// POST /api/playlists
/// Create a playlist owned by the caller
pub async fn create_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    body: std::result::Result<Json<PlaylistDetailsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Playlist>>)> {
    let req = PlaylistDetailsRequest::from_body(body);
    let (name, description) = req.details().ok_or_else(|| {
        ServerError::bad_request("Playlist name and description are required")
    })?;

    let playlist = app_state
        .store
        .create_playlist(CreatePlaylist {
            name,
            description,
            created_by: auth.user_id().clone(),
        })
        .await?;

    tracing::debug!(playlist_id = %playlist.id, owner = %playlist.created_by, "Playlist created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Playlist created successfully", playlist)),
    ))
}

/// GET /api/users/:user_id/playlists
/// All playlists owned by a user, newest first
pub async fn get_user_playlists(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Playlist>>>> {
    let Path(user_id) = path?;
    let user_id: UserId = path_id(&user_id, "userId")?;

    let playlists = app_state.store.get_playlists_by_owner(&user_id).await?;
    if playlists.is_empty() {
        return Err(ServerError::not_found("No playlists found for this user"));
    }

    Ok(Json(ApiResponse::ok(
        "User playlists fetched successfully",
        playlists,
    )))
}

/// GET /api/playlists/:playlist_id
/// Get playlist details with videos resolved
pub async fn get_playlist_by_id(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<PlaylistWithVideos>>> {
    let Path(playlist_id) = path?;
    let playlist_id: PlaylistId = path_id(&playlist_id, "playlistId")?;

    let playlist = app_state
        .store
        .get_playlist_with_videos(&playlist_id)
        .await?
        .ok_or_else(playlist_not_found)?;

    Ok(Json(ApiResponse::ok("Playlist fetched successfully", playlist)))
}

/// POST /api/playlists/:playlist_id/videos/:video_id
/// Append a video to a playlist
pub async fn add_video_to_playlist(
    path: std::result::Result<Path<(String, String)>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Playlist>>> {
    let Path((playlist_id, video_id)) = path?;
    let playlist_id: PlaylistId = path_id(&playlist_id, "playlistId")?;
    let video_id: VideoId = path_id(&video_id, "videoId")?;

    match app_state.store.add_video(&playlist_id, &video_id).await? {
        Some(VideoChange::Applied(playlist)) => {
            tracing::debug!(%playlist_id, %video_id, "Video added to playlist");
            Ok(Json(ApiResponse::ok(
                "Video added to playlist successfully",
                playlist,
            )))
        }
        Some(VideoChange::Unchanged(_)) => Err(ServerError::bad_request(
            "Video already exists in the playlist",
        )),
        None => Err(playlist_not_found()),
    }
}

/// DELETE /api/playlists/:playlist_id/videos/:video_id
/// Remove a video from a playlist
pub async fn remove_video_from_playlist(
    path: std::result::Result<Path<(String, String)>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Playlist>>> {
    let Path((playlist_id, video_id)) = path?;
    let playlist_id: PlaylistId = path_id(&playlist_id, "playlistId")?;
    let video_id: VideoId = path_id(&video_id, "videoId")?;

    match app_state.store.remove_video(&playlist_id, &video_id).await? {
        Some(VideoChange::Applied(playlist)) => {
            tracing::debug!(%playlist_id, %video_id, "Video removed from playlist");
            Ok(Json(ApiResponse::ok(
                "Video removed from playlist successfully",
                playlist,
            )))
        }
        Some(VideoChange::Unchanged(_)) => Err(ServerError::bad_request(
            "Video does not exist in the playlist",
        )),
        None => Err(playlist_not_found()),
    }
}

/// PATCH /api/playlists/:playlist_id
/// Update playlist name and description
pub async fn update_playlist(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
    body: std::result::Result<Json<PlaylistDetailsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Playlist>>> {
    let Path(playlist_id) = path?;
    let details = PlaylistDetailsRequest::from_body(body).details();
    let Some((name, description)) = details.filter(|_| !playlist_id.trim().is_empty()) else {
        return Err(ServerError::bad_request(
            "playlistId, name and description are required",
        ));
    };
    let playlist_id: PlaylistId = path_id(&playlist_id, "playlistId")?;

    let playlist = app_state
        .store
        .update_playlist(&playlist_id, UpdatePlaylist { name, description })
        .await?
        .ok_or_else(playlist_not_found)?;

    Ok(Json(ApiResponse::ok("Playlist updated successfully", playlist)))
}

/// DELETE /api/playlists/:playlist_id
/// Delete a playlist; only its owner may do so
pub async fn delete_playlist(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<Playlist>>> {
    let Path(playlist_id) = path?;
    let playlist_id: PlaylistId = path_id(&playlist_id, "playlistId")?;

    let playlist = app_state
        .store
        .get_playlist(&playlist_id)
        .await?
        .ok_or_else(playlist_not_found)?;

    if !playlist.is_owned_by(auth.user_id()) {
        tracing::warn!(
            %playlist_id,
            caller = %auth.user_id(),
            "Rejected delete of playlist owned by another user"
        );
        return Err(ServerError::bad_request(
            "User is not authorized to delete this playlist",
        ));
    }

    let deleted = app_state
        .store
        .delete_playlist(&playlist_id)
        .await?
        .ok_or_else(playlist_not_found)?;

    tracing::debug!(%playlist_id, "Playlist deleted");

    Ok(Json(ApiResponse::ok("Playlist deleted successfully", deleted)))
}
