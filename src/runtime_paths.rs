use std::{env, path::PathBuf};

use crate::{ROOT_DIR_ENV, ROOT_DIR_NAME};

/// Root directory for everything this shell persists (logs, desktop state,
/// downloaded update artifacts). Overridable for development and tests.
pub(crate) fn default_root_dir() -> Option<PathBuf> {
    root_dir_from(env::var(ROOT_DIR_ENV).ok().as_deref(), home::home_dir())
}

fn root_dir_from(env_value: Option<&str>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(raw) = env_value {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home_dir.map(|home| home.join(ROOT_DIR_NAME))
}
