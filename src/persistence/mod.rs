use std::{
    fs,
    path::PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    EntryStore,
    KanshuError,
};

const APP_NAME: &str = "kanshu";
const STORE_FILE: &str = "store.json";

/// Starter dataset used on first run or when the saved one cannot be read.
const DEFAULT_CURRICULUM: &str = include_str!("../../assets/default_curriculum.json");

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), KanshuError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)
        .map_err(|e| KanshuError::StorageUnavailable(format!("{}: {}", file_path.display(), e)))
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    filename: &str,
) -> Result<T, KanshuError> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

pub fn default_store() -> EntryStore {
    EntryStore::from_json(DEFAULT_CURRICULUM).expect("bundled curriculum is well-formed")
}

/// Durable snapshot if present and well-formed, bundled curriculum otherwise.
/// Never fails; a broken saved file is reported and left in place.
pub fn load_store() -> EntryStore {
    let path = get_data_file_path(STORE_FILE);

    if !path.exists() {
        return default_store();
    }

    let loaded = fs::read_to_string(&path)
        .map_err(KanshuError::from)
        .and_then(|text| EntryStore::from_json(&text));

    match loaded {
        Ok(store) => {
            println!("Dataset loaded from: {}", path.display());
            store
        }
        Err(e) => {
            eprintln!(
                "Failed to load {}: {}. Falling back to the bundled curriculum.",
                path.display(),
                e
            );
            default_store()
        }
    }
}

pub fn save_store(store: &EntryStore) -> Result<(), KanshuError> {
    let path = get_data_file_path(STORE_FILE);
    let text = store.to_json_pretty()?;
    fs::write(&path, text)
        .map_err(|e| KanshuError::StorageUnavailable(format!("{}: {}", path.display(), e)))
}

/// Suggested name for a one-shot export, e.g. `kanshu_20260831_141503.json`.
pub fn export_file_name() -> String {
    format!("kanshu_{}.json", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_curriculum_is_well_formed() {
        let store = default_store();
        assert!(!store.is_empty());
        // At least one starter entry should already carry a related word so
        // the learned-only filter has something to show.
        assert!(!store.filtered().is_empty());
    }

    #[test]
    fn export_file_name_embeds_a_timestamp() {
        let name = export_file_name();
        assert!(name.starts_with("kanshu_"));
        assert!(name.ends_with(".json"));
        // kanshu_YYYYMMDD_HHMMSS.json
        assert_eq!(name.len(), "kanshu_00000000_000000.json".len());
        let stamp = &name["kanshu_".len()..name.len() - ".json".len()];
        assert!(stamp.chars().all(|c| c.is_ascii_digit() || c == '_'));
    }
}
