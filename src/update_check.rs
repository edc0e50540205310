use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::{
    append_update_log, release_feed, update_platform, AtomicFlagGuard, UpdateCheckState,
    UPDATE_PROMPT_DELAY, UPDATE_PROMPT_MESSAGE, UPDATE_PROMPT_TITLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdateDecision {
    UpToDate,
    Offer,
    RejectUnparsableTag,
}

/// The running build is compared to the fetched identifier by exact string
/// equality; ordering is irrelevant because the feed only publishes forward.
pub(crate) fn decide_update(current_version: &str, latest_tag: &str) -> UpdateDecision {
    let normalized = normalize_version_tag(latest_tag);
    if semver::Version::parse(normalized).is_err() {
        return UpdateDecision::RejectUnparsableTag;
    }

    if normalized == current_version {
        UpdateDecision::UpToDate
    } else {
        UpdateDecision::Offer
    }
}

/// Feed tags historically carry a `v` prefix the build version does not.
pub(crate) fn normalize_version_tag(tag: &str) -> &str {
    let trimmed = tag.trim();
    trimmed.strip_prefix('v').unwrap_or(trimmed)
}

pub(crate) fn find_platform_asset<'a>(
    assets: &'a [release_feed::ReleaseAsset],
    platform_token: &str,
) -> Option<&'a release_feed::ReleaseAsset> {
    assets
        .iter()
        .find(|asset| asset.browser_download_url.contains(platform_token))
}

/// Startup-time check, honoring the persisted auto-check toggle.
pub(crate) fn spawn_startup_update_check(app_handle: &AppHandle) {
    let state = app_handle.state::<UpdateCheckState>();
    if !state.is_enabled() {
        append_update_log("automatic update check is disabled, skipping startup check");
        return;
    }

    spawn_update_check(app_handle);
}

/// On-demand check (menu action); ignores the startup toggle.
pub(crate) fn spawn_update_check(app_handle: &AppHandle) {
    let app_handle = app_handle.clone();
    tauri::async_runtime::spawn(async move {
        run_update_check(app_handle).await;
    });
}

async fn run_update_check(app_handle: AppHandle) {
    let state = app_handle.state::<UpdateCheckState>();
    let Some(_guard) = AtomicFlagGuard::try_set(&state.check_in_flight) else {
        append_update_log("update check already in flight, skipping");
        return;
    };

    let current_version = app_handle.package_info().version.to_string();
    append_update_log(&format!(
        "checking release feed, current_version={current_version}"
    ));

    let latest_tag = match release_feed::latest_version().await {
        Ok(tag) => tag,
        Err(error) => {
            append_update_log(&format!("failed to fetch latest version: {error}"));
            return;
        }
    };

    match decide_update(&current_version, &latest_tag) {
        UpdateDecision::UpToDate => {
            append_update_log(&format!("already up to date, latest_version={latest_tag}"));
            return;
        }
        UpdateDecision::RejectUnparsableTag => {
            append_update_log(&format!(
                "release feed returned unparsable version tag '{latest_tag}', skipping"
            ));
            return;
        }
        UpdateDecision::Offer => {}
    }

    let release = match release_feed::latest_release().await {
        Ok(release) => release,
        Err(error) => {
            append_update_log(&format!("failed to fetch latest release: {error}"));
            return;
        }
    };

    let platform_token = update_platform::release_platform_token();
    let Some(asset) = find_platform_asset(&release.assets, platform_token) else {
        append_update_log(&format!(
            "release {} has no asset for platform token {platform_token}",
            release.tag_name
        ));
        return;
    };
    let download_url = asset.browser_download_url.clone();

    append_update_log(&format!(
        "update {} available ({}), prompting after delay",
        normalize_version_tag(&latest_tag),
        asset.name
    ));
    tokio::time::sleep(UPDATE_PROMPT_DELAY).await;

    prompt_and_download(&app_handle, &download_url).await;
}

async fn prompt_and_download(app_handle: &AppHandle, download_url: &str) {
    let accepted = app_handle
        .dialog()
        .message(UPDATE_PROMPT_MESSAGE)
        .title(UPDATE_PROMPT_TITLE)
        .kind(MessageDialogKind::Info)
        .buttons(MessageDialogButtons::OkCancelCustom(
            "Download".to_string(),
            "Cancel".to_string(),
        ))
        .blocking_show();

    if !accepted {
        append_update_log("update declined");
        return;
    }

    match release_feed::download_latest_version(app_handle, download_url).await {
        Ok(path) => append_update_log(&format!(
            "update artifact downloaded to {}",
            path.display()
        )),
        Err(error) => append_update_log(&format!("update download failed: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use crate::release_feed::ReleaseAsset;

    use super::{decide_update, find_platform_asset, normalize_version_tag, UpdateDecision};

    fn asset(url: &str) -> ReleaseAsset {
        ReleaseAsset {
            name: url.rsplit('/').next().unwrap_or_default().to_string(),
            browser_download_url: url.to_string(),
        }
    }

    #[test]
    fn matching_versions_stay_silent() {
        assert_eq!(decide_update("1.2.0", "1.2.0"), UpdateDecision::UpToDate);
        assert_eq!(decide_update("1.2.0", "v1.2.0"), UpdateDecision::UpToDate);
    }

    #[test]
    fn differing_versions_offer_an_update() {
        assert_eq!(decide_update("1.2.0", "1.3.0"), UpdateDecision::Offer);
        assert_eq!(decide_update("1.2.0", "v1.3.0"), UpdateDecision::Offer);
    }

    #[test]
    fn unparsable_tags_never_prompt() {
        assert_eq!(
            decide_update("1.2.0", "nightly"),
            UpdateDecision::RejectUnparsableTag
        );
        assert_eq!(
            decide_update("1.2.0", ""),
            UpdateDecision::RejectUnparsableTag
        );
    }

    #[test]
    fn version_tags_are_normalized() {
        assert_eq!(normalize_version_tag("v1.3.0"), "1.3.0");
        assert_eq!(normalize_version_tag(" 1.3.0 "), "1.3.0");
    }

    #[test]
    fn platform_asset_scan_matches_on_token() {
        let assets = vec![
            asset("https://example.com/app-1.3.0-darwin.dmg"),
            asset("https://example.com/app-1.3.0-win32.zip"),
            asset("https://example.com/app-1.3.0-linux.AppImage"),
        ];

        let found = find_platform_asset(&assets, "win32").expect("win32 asset");
        assert_eq!(
            found.browser_download_url,
            "https://example.com/app-1.3.0-win32.zip"
        );
        assert!(find_platform_asset(&assets, "sunos").is_none());
    }

    #[test]
    fn no_assets_means_no_match() {
        assert!(find_platform_asset(&[], "linux").is_none());
    }
}
