use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Root directory of the vault served by `FsVault`
    pub const VAULT_DIR: &str = "GLOSSARY_VAULT_DIR";
    /// Override for the settings file location
    pub const SETTINGS_PATH: &str = "GLOSSARY_SETTINGS_PATH";
}

/// Default values
pub mod defaults {
    pub const VAULT_DIR: &str = ".";
    /// Host-private config directory inside the vault (hidden from scans)
    pub const CONFIG_DIR: &str = ".glossary";
    pub const SETTINGS_FILE: &str = "settings.ron";
}

/// Where the engine finds its vault and settings
#[derive(Clone, Debug)]
pub struct Config {
    pub vault_dir: PathBuf,
    pub settings_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let vault_dir = env::var(env_vars::VAULT_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(defaults::VAULT_DIR));

        let settings_path = env::var(env_vars::SETTINGS_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_settings_path(&vault_dir));

        Self {
            vault_dir,
            settings_path,
        }
    }

    /// Config rooted at `vault_dir` with the default settings location
    pub fn for_vault(vault_dir: impl Into<PathBuf>) -> Self {
        let vault_dir = vault_dir.into();
        let settings_path = default_settings_path(&vault_dir);
        Self {
            vault_dir,
            settings_path,
        }
    }
}

/// `<vault>/.glossary/settings.ron`
pub fn default_settings_path(vault_dir: &std::path::Path) -> PathBuf {
    vault_dir.join(defaults::CONFIG_DIR).join(defaults::SETTINGS_FILE)
}
