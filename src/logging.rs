use std::{
    fs,
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
};

use crate::{runtime_paths, DESKTOP_LOG_FILE};

pub(crate) fn resolve_desktop_log_path() -> Option<PathBuf> {
    runtime_paths::default_root_dir().map(|root| root.join("logs").join(DESKTOP_LOG_FILE))
}

fn append_log(tag: &str, message: &str) {
    let line = format!(
        "[{}] [{tag}] {message}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
    );

    let Some(log_path) = resolve_desktop_log_path() else {
        eprintln!("{line}");
        return;
    };

    if let Some(parent_dir) = log_path.parent() {
        if fs::create_dir_all(parent_dir).is_err() {
            eprintln!("{line}");
            return;
        }
    }

    match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(mut file) => {
            if writeln!(file, "{line}").is_err() {
                eprintln!("{line}");
            }
        }
        Err(_) => eprintln!("{line}"),
    }
}

pub(crate) fn append_startup_log(message: &str) {
    append_log("startup", message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_log("desktop", message);
}

pub(crate) fn append_update_log(message: &str) {
    append_log("update", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_log("shutdown", message);
}
