use std::{env, fs, path::PathBuf};

use serde::Deserialize;
use tauri::{AppHandle, Manager};
use url::Url;

use crate::{DEFAULT_RELEASE_FEED_URL, RELEASE_FEED_URL_ENV};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReleaseAsset {
    pub(crate) name: String,
    pub(crate) browser_download_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReleaseMetadata {
    pub(crate) tag_name: String,
    #[serde(default)]
    pub(crate) assets: Vec<ReleaseAsset>,
}

fn feed_base_url() -> String {
    normalize_feed_url(
        &env::var(RELEASE_FEED_URL_ENV).unwrap_or_else(|_| DEFAULT_RELEASE_FEED_URL.to_string()),
    )
}

fn normalize_feed_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_RELEASE_FEED_URL.to_string();
    }

    match Url::parse(trimmed) {
        Ok(_) => trimmed.to_string(),
        Err(_) => DEFAULT_RELEASE_FEED_URL.to_string(),
    }
}

fn feed_client() -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .user_agent(concat!("messages-desktop/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|error| format!("Failed to build release feed client: {error}"))
}

async fn fetch_latest_release_payload() -> Result<ReleaseMetadata, String> {
    let url = format!("{}/releases/latest", feed_base_url());
    let response = feed_client()?
        .get(&url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .map_err(|error| format!("Release feed request to {url} failed: {error}"))?;
    if !response.status().is_success() {
        return Err(format!(
            "Release feed request to {url} returned status {}",
            response.status()
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|error| format!("Failed to read release feed response from {url}: {error}"))?;
    serde_json::from_str(&body)
        .map_err(|error| format!("Failed to parse release feed payload from {url}: {error}"))
}

/// The latest published version identifier, as tagged on the feed.
pub(crate) async fn latest_version() -> Result<String, String> {
    Ok(fetch_latest_release_payload().await?.tag_name)
}

/// Full metadata of the latest release, including downloadable assets.
pub(crate) async fn latest_release() -> Result<ReleaseMetadata, String> {
    fetch_latest_release_payload().await
}

/// Fetches a release artifact into the user's download directory and returns
/// the written path.
pub(crate) async fn download_latest_version(
    app_handle: &AppHandle,
    download_url: &str,
) -> Result<PathBuf, String> {
    let parsed =
        Url::parse(download_url).map_err(|error| format!("Invalid download url {download_url}: {error}"))?;
    let file_name = artifact_file_name(&parsed);

    let target_dir = app_handle
        .path()
        .download_dir()
        .map_err(|error| format!("Failed to resolve download directory: {error}"))?;
    let target_path = target_dir.join(file_name);

    let response = feed_client()?
        .get(parsed)
        .send()
        .await
        .map_err(|error| format!("Download request to {download_url} failed: {error}"))?;
    if !response.status().is_success() {
        return Err(format!(
            "Download request to {download_url} returned status {}",
            response.status()
        ));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|error| format!("Failed to read download body from {download_url}: {error}"))?;

    fs::create_dir_all(&target_dir).map_err(|error| {
        format!(
            "Failed to create download directory {}: {}",
            target_dir.display(),
            error
        )
    })?;
    fs::write(&target_path, &bytes).map_err(|error| {
        format!(
            "Failed to write update artifact {}: {}",
            target_path.display(),
            error
        )
    })?;

    Ok(target_path)
}

fn artifact_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| {
            segments
                .rev()
                .find(|segment| !segment.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "update-artifact".to_string())
}
