/// Release artifacts are named with the feed's historical platform tokens, so
/// the running OS has to be mapped onto that vocabulary before scanning asset
/// URLs.
pub(crate) fn release_platform_token() -> &'static str {
    platform_token_for_os(std::env::consts::OS)
}

pub(crate) fn platform_token_for_os(os: &str) -> &'static str {
    match os {
        "macos" => "darwin",
        "windows" => "win32",
        _ => "linux",
    }
}
