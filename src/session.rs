//! Durable holder for the session token, the desktop analog of the browser's
//! local storage. One instance process-wide; login/signup write it, logout
//! clears it, everything else only reads.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub struct SessionStore {
    path: PathBuf,
    token: Option<String>,
}

impl SessionStore {
    /// Loads whatever token survived the last run. A missing or empty file is
    /// simply "no session"; an unreadable one is logged and treated the same.
    pub fn load(path: PathBuf) -> Self {
        let token = match fs::read_to_string(&path) {
            Ok(raw) => {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("Could not read session file {}: {}", path.display(), err);
                None
            }
        };
        Self { path, token }
    }

    pub fn save(&mut self, token: &str) -> Result<()> {
        fs::write(&self.path, token)
            .with_context(|| format!("write session file {}", self.path.display()))?;
        self.token = Some(token.to_string());
        Ok(())
    }

    pub fn get(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.token = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("remove session file {}", self.path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("zentrader_session_{}_{}", std::process::id(), tag))
    }

    #[test]
    fn token_survives_a_reload() {
        let path = temp_session_path("reload");
        let _ = fs::remove_file(&path);

        let mut store = SessionStore::load(path.clone());
        assert!(store.get().is_none());
        store.save("tok-42").unwrap();
        assert_eq!(store.get(), Some("tok-42"));

        // A fresh store over the same path sees the saved token.
        let reloaded = SessionStore::load(path.clone());
        assert_eq!(reloaded.get(), Some("tok-42"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn clear_removes_token_and_file() {
        let path = temp_session_path("clear");
        let mut store = SessionStore::load(path.clone());
        store.save("tok").unwrap();
        store.clear().unwrap();
        assert!(store.get().is_none());
        assert!(SessionStore::load(path.clone()).get().is_none());
        // Clearing an already-clear store is fine.
        store.clear().unwrap();
    }
}
