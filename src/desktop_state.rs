use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::{runtime_paths, DESKTOP_STATE_FILE};

const AUTO_UPDATE_CHECK_FIELD: &str = "auto_update_check_enabled";

fn empty_state_object() -> Value {
    Value::Object(Map::new())
}

fn desktop_state_path() -> Option<PathBuf> {
    runtime_paths::default_root_dir().map(|root| root.join(DESKTOP_STATE_FILE))
}

pub(crate) fn read_cached_auto_update_check_enabled() -> Option<bool> {
    read_auto_update_toggle(&desktop_state_path()?)
}

pub(crate) fn write_cached_auto_update_check_enabled(enabled: bool) -> Result<(), String> {
    let Some(state_path) = desktop_state_path() else {
        crate::append_desktop_log(
            "desktop state path is unavailable; skipping auto update toggle persistence",
        );
        return Ok(());
    };

    write_auto_update_toggle(&state_path, enabled)
}

fn read_auto_update_toggle(state_path: &Path) -> Option<bool> {
    let raw = fs::read_to_string(state_path).ok()?;
    let parsed: Value = serde_json::from_str(&raw).ok()?;
    parsed.get(AUTO_UPDATE_CHECK_FIELD)?.as_bool()
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if let Value::Object(map) = value {
        return map;
    }

    *value = empty_state_object();
    // Safe because `value` was just replaced with an object.
    value
        .as_object_mut()
        .expect("value was just normalized into a JSON object")
}

fn write_auto_update_toggle(state_path: &Path, enabled: bool) -> Result<(), String> {
    if let Some(parent_dir) = state_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create desktop state directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut parsed = match fs::read_to_string(state_path) {
        Ok(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(error) => {
                crate::append_desktop_log(&format!(
                    "failed to parse desktop state {}: {}. resetting state file",
                    state_path.display(),
                    error
                ));
                empty_state_object()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => empty_state_object(),
        Err(error) => {
            return Err(format!(
                "Failed to read desktop state {}: {}",
                state_path.display(),
                error
            ));
        }
    };
    if !parsed.is_object() {
        crate::append_desktop_log(&format!(
            "desktop state {} has non-object root; resetting state file",
            state_path.display()
        ));
    }
    let object = ensure_object(&mut parsed);
    object.insert(AUTO_UPDATE_CHECK_FIELD.to_string(), Value::Bool(enabled));

    let serialized = serde_json::to_string_pretty(&parsed)
        .map_err(|error| format!("Failed to serialize desktop state: {error}"))?;
    fs::write(state_path, serialized).map_err(|error| {
        format!(
            "Failed to write desktop state {}: {}",
            state_path.display(),
            error
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{read_auto_update_toggle, write_auto_update_toggle};

    #[test]
    fn toggle_round_trips_through_the_state_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state_path = dir.path().join("desktop_state.json");

        write_auto_update_toggle(&state_path, false).expect("write toggle");
        assert_eq!(read_auto_update_toggle(&state_path), Some(false));

        write_auto_update_toggle(&state_path, true).expect("rewrite toggle");
        assert_eq!(read_auto_update_toggle(&state_path), Some(true));
    }

    #[test]
    fn missing_state_file_reads_as_unset() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(
            read_auto_update_toggle(&dir.path().join("desktop_state.json")),
            None
        );
    }

    #[test]
    fn unrelated_fields_survive_a_toggle_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state_path = dir.path().join("desktop_state.json");
        fs::write(&state_path, r#"{"other":"kept"}"#).expect("seed state");

        write_auto_update_toggle(&state_path, true).expect("write toggle");

        let raw = fs::read_to_string(&state_path).expect("read state");
        let parsed: serde_json::Value = serde_json::from_str(&raw).expect("parse state");
        assert_eq!(parsed.get("other").and_then(|v| v.as_str()), Some("kept"));
        assert_eq!(
            parsed.get("auto_update_check_enabled").and_then(|v| v.as_bool()),
            Some(true)
        );
    }

    #[test]
    fn non_object_state_is_reset_to_an_object() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state_path = dir.path().join("desktop_state.json");
        fs::write(&state_path, "[1, 2, 3]").expect("seed state");

        write_auto_update_toggle(&state_path, false).expect("write toggle");
        assert_eq!(read_auto_update_toggle(&state_path), Some(false));
    }
}
