use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;
use crate::ledger::{CheckingLimits, DEFAULT_BRANCH};

const DEFAULT_DIR_NAME: &str = ".bank_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.bank_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BANK_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Branch and account-limit settings applied when the directory opens accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankConfig {
    #[serde(default = "BankConfig::default_branch_code")]
    pub branch_code: String,
    #[serde(default = "BankConfig::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub checking: CheckingLimits,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch_code: Self::default_branch_code(),
            currency_symbol: Self::default_currency_symbol(),
            checking: CheckingLimits::default(),
        }
    }
}

impl BankConfig {
    pub fn default_branch_code() -> String {
        DEFAULT_BRANCH.into()
    }

    pub fn default_currency_symbol() -> String {
        "R$".into()
    }
}

/// Handles persistence for [`BankConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Manager for `base/config.json`; the directory is created on first save.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self::new(base.join(CONFIG_FILE))
    }

    /// Manager rooted at [`app_data_dir`].
    pub fn from_env() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<BankConfig, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(BankConfig::default())
        }
    }

    pub fn save(&self, config: &BankConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
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

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        let config = manager.load().unwrap();
        assert_eq!(config, BankConfig::default());
        assert_eq!(config.checking.withdrawal_ceiling, dec!(500));
        assert_eq!(config.checking.max_withdrawals, 3);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        fs::write(manager.config_path(), r#"{ "branch_code": "0777" }"#).unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.branch_code, "0777");
        assert_eq!(config.currency_symbol, "R$");
        assert_eq!(config.checking, CheckingLimits::default());
    }

    #[test]
    fn loading_does_not_create_the_base_dir() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("never-written");
        let manager = ConfigManager::with_base_dir(base.clone());

        assert_eq!(manager.load().unwrap(), BankConfig::default());
        assert!(!base.exists());

        manager.save(&BankConfig::default()).unwrap();
        assert!(manager.config_path().exists());
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/x/config.json"));
        assert_eq!(tmp, PathBuf::from("/x/config.json.tmp"));
    }
}
