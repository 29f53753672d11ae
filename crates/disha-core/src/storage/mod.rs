//! Persistent state: data directory resolution and the session store.
//!
//! The only state that survives a restart is one small JSON document
//! holding the logged-in flag and the user profile, the stand-in for the
//! original app's two browser localStorage keys.

mod config;
mod session_store;

pub use config::{AssistantConfig, Config, UiConfig};
pub use session_store::{Session, SessionStore};

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Returns `~/.config/disha[-dev]/` based on DISHA_ENV.
///
/// Set DISHA_ENV=dev to use a development data directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DISHA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("disha-dev")
    } else {
        base_dir.join("disha")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::WriteFailed {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
