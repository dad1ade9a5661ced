use crate::settings::{Progress, Settings, LOCALSTORAGE_PROGRESS_KEY, LOCALSTORAGE_SETTINGS_KEY};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn local_storage_set_string(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        if s.set_item(key, value).is_err() {
            log::warn!("localStorage: failed to write {key}");
        }
    }
}

pub(super) fn load_settings() -> Settings {
    Settings::from_json(local_storage_get_string(LOCALSTORAGE_SETTINGS_KEY).as_deref())
}

pub(super) fn load_progress() -> Progress {
    Progress::from_json(local_storage_get_string(LOCALSTORAGE_PROGRESS_KEY).as_deref())
}

pub(super) fn save_progress(progress: &Progress) {
    match serde_json::to_string(progress) {
        Ok(raw) => local_storage_set_string(LOCALSTORAGE_PROGRESS_KEY, &raw),
        Err(e) => log::warn!("progress not saved: {e}"),
    }
}
