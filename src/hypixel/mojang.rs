use super::error::ApiError;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use uuid::Uuid;

const MOJANG_PROFILE_URL: &str = "https://api.mojang.com/users/profiles/minecraft";

#[derive(Deserialize)]
struct ProfileResponse {
    id: Uuid,
}

/// Profile endpoint for `name`, with the name percent-encoded as one path segment
fn profile_url(name: &str) -> Result<Url, ApiError> {
    let mut url =
        Url::parse(MOJANG_PROFILE_URL).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(MOJANG_PROFILE_URL.to_string()))?
        .push(name);
    Ok(url)
}

/// Looks up the UUID for a Minecraft username, `None` if no account has it.
pub async fn resolve_uuid(client: &Client, name: &str) -> Result<Option<Uuid>, ApiError> {
    let response = client.get(profile_url(name)?).send().await?;

    if matches!(response.status(), StatusCode::NOT_FOUND | StatusCode::NO_CONTENT) {
        return Ok(None);
    }

    let profile: ProfileResponse = response.error_for_status()?.json().await?;
    Ok(Some(profile.id))
}
