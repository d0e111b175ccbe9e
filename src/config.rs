use crate::global_variables::{
    DEFAULT_AUDIT_LOG_PATH, DEFAULT_CURRENCY_SYMBOL, DEFAULT_SNAPSHOT_PATH, ENV_AUDIT_LOG_PATH,
    ENV_CURRENCY_SYMBOL, ENV_SNAPSHOT_PATH,
};
use std::path::{Path, PathBuf};

/// Where the ledger keeps its files and how it renders money.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Full JSON snapshot, rewritten on every mutation.
    pub snapshot_path: PathBuf,
    /// Append-only text trail of create/cancel events.
    pub audit_log_path: PathBuf,
    pub currency_symbol: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            audit_log_path: PathBuf::from(DEFAULT_AUDIT_LOG_PATH),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Default file names placed under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            snapshot_path: dir.join(DEFAULT_SNAPSHOT_PATH),
            audit_log_path: dir.join(DEFAULT_AUDIT_LOG_PATH),
            ..Self::default()
        }
    }

    /// Defaults, overridden by `BOOKING_SNAPSHOT_PATH`,
    /// `BOOKING_AUDIT_LOG_PATH` and `BOOKING_CURRENCY_SYMBOL` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_SNAPSHOT_PATH).filter(|v| !v.is_empty()) {
            config.snapshot_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_AUDIT_LOG_PATH).filter(|v| !v.is_empty()) {
            config.audit_log_path = PathBuf::from(path);
        }
        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }
        config
    }
}
