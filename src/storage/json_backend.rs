use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::utils::ensure_dir;
use crate::errors::Result;

use super::KeyValueStore;

const BLOB_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem medium: one JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(key), BLOB_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        replace_file(&self.blob_path(key), value)
    }
}

fn canonical_name(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "state".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Stages `data` next to `path` and renames it into place.
pub(crate) fn replace_file(path: &Path, data: &str) -> Result<()> {
    let tmp = tmp_path(path);
    write_atomic(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("store")).unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn set_overwrites_whole_blob_and_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf()).unwrap();
        store.set("smart-expense-tracker-data", "{\"a\":1}").unwrap();
        store.set("smart-expense-tracker-data", "{}").unwrap();
        assert_eq!(store.get("smart-expense-tracker-data").unwrap().as_deref(), Some("{}"));
        let path = store.blob_path("smart-expense-tracker-data");
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("smart-expense-tracker-data.json")
        );
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn keys_are_sanitized_into_file_names() {
        assert_eq!(canonical_name("My Key/../x"), "my_key____x");
        assert_eq!(canonical_name("  "), "state");
    }
}
