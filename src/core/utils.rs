use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "MONEYMIND_HOME";

const DEFAULT_DIR_NAME: &str = ".moneymind";
const STORE_DIR: &str = "store";
const CONFIG_FILE: &str = "config.json";

/// Resolves where configuration and the state blob live.
pub struct PathResolver;

impl PathResolver {
    /// `$MONEYMIND_HOME`, else `~/.moneymind`, else `./.moneymind`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn resolve_base(custom: Option<PathBuf>) -> PathBuf {
        custom.unwrap_or_else(Self::base_dir)
    }

    pub fn store_dir_in(base: &Path) -> PathBuf {
        base.join(STORE_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_wins() {
        let base = PathResolver::resolve_base(Some(PathBuf::from("/tmp/mm")));
        assert_eq!(base, PathBuf::from("/tmp/mm"));
        assert_eq!(PathResolver::store_dir_in(&base), PathBuf::from("/tmp/mm/store"));
        assert_eq!(PathResolver::config_file_in(&base), PathBuf::from("/tmp/mm/config.json"));
    }
}
