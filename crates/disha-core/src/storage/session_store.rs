//! JSON-backed login session storage.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};
use crate::session::UserProfile;

/// On-disk document: the logged-in flag plus the profile blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    logged_in: bool,
    profile: Option<UserProfile>,
}

/// In-memory view of the current session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Option<UserProfile>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }
}

/// Reads and writes the session document.
///
/// Loading is lenient by design: malformed or incomplete stored state is
/// silently discarded (the file is removed) and the user is treated as
/// logged out. Writing is strict: a profile is validated before it is
/// persisted.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location under the app data dir.
    pub fn open_default() -> Result<Self> {
        Ok(Self::at(super::data_dir()?.join("session.json")))
    }

    /// Store at an explicit path (used by tests).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load and validate the stored session.
    ///
    /// Returns a logged-out session when no file exists, when the file
    /// cannot be parsed, when the logged-in flag is unset, or when the
    /// stored profile fails validation. All but the first case also clear
    /// the stored state.
    pub fn load(&self) -> Session {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Session::logged_out(),
        };

        let file: SessionFile = match serde_json::from_str(&content) {
            Ok(file) => file,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "discarding unparseable session");
                self.discard();
                return Session::logged_out();
            }
        };

        match file {
            SessionFile {
                logged_in: true,
                profile: Some(profile),
            } => match profile.validate() {
                Ok(()) => Session {
                    profile: Some(profile),
                },
                Err(err) => {
                    tracing::debug!(%err, "discarding invalid stored profile");
                    self.discard();
                    Session::logged_out()
                }
            },
            _ => {
                // Flag unset or profile missing: incomplete state.
                self.discard();
                Session::logged_out()
            }
        }
    }

    /// Validate and persist a login.
    ///
    /// # Errors
    ///
    /// Returns a validation error without touching stored state when the
    /// profile is incomplete, or a storage error if the write fails.
    pub fn login(&self, profile: &UserProfile) -> Result<Session> {
        profile.validate()?;
        let file = SessionFile {
            logged_in: true,
            profile: Some(profile.clone()),
        };
        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(Session {
            profile: Some(profile.clone()),
        })
    }

    /// Clear the stored session.
    pub fn logout(&self) -> Session {
        self.discard();
        Session::logged_out()
    }

    fn discard(&self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        (dir, store)
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            education_level: "12th Standard".to_string(),
            institution: "DPS RK Puram".to_string(),
            state: "Delhi".to_string(),
            city: "New Delhi".to_string(),
        }
    }

    #[test]
    fn missing_file_means_logged_out() {
        let (_dir, store) = store();
        assert!(!store.load().is_logged_in());
    }

    #[test]
    fn login_then_load_roundtrips_profile() {
        let (_dir, store) = store();
        store.login(&profile()).unwrap();
        let session = store.load();
        assert!(session.is_logged_in());
        assert_eq!(session.profile().unwrap(), &profile());
    }

    #[test]
    fn invalid_profile_is_rejected_and_nothing_persisted() {
        let (_dir, store) = store();
        let mut p = profile();
        p.name = String::new();
        assert!(store.login(&p).is_err());
        assert!(!store.load().is_logged_in());
    }

    #[test]
    fn corrupt_file_is_discarded_on_load() {
        let (dir, store) = store();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(!store.load().is_logged_in());
        assert!(!path.exists(), "corrupt file should be removed");
    }

    #[test]
    fn incomplete_stored_profile_is_discarded_on_load() {
        let (dir, store) = store();
        let path = dir.path().join("session.json");
        // Flag set but profile missing a required field.
        std::fs::write(
            &path,
            r#"{"logged_in":true,"profile":{"name":"","email":"a@b.com","education_level":"12th Standard","state":"Delhi"}}"#,
        )
        .unwrap();
        assert!(!store.load().is_logged_in());
        assert!(!path.exists(), "invalid session should be cleared");
    }

    #[test]
    fn unset_flag_is_treated_as_logged_out() {
        let (dir, store) = store();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"logged_in":false,"profile":null}"#).unwrap();
        assert!(!store.load().is_logged_in());
    }

    #[test]
    fn logout_clears_stored_state() {
        let (dir, store) = store();
        store.login(&profile()).unwrap();
        let session = store.logout();
        assert!(!session.is_logged_in());
        assert!(!dir.path().join("session.json").exists());
        assert!(!store.load().is_logged_in());
    }
}
