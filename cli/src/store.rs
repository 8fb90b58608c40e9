//! File-backed session store for the terminal client.
//!
//! The token lives in a small JSON document, `{"token": "..."}`. A missing
//! file means logged out. Clearing removes the file.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use portal::session::{SessionStore, TOKEN_KEY};
use serde::{Deserialize, Serialize};

const DEFAULT_FILE: &str = ".portal-session.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("session file {} is not valid JSON: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Session file under the home directory, or the working directory when no
/// home is set.
pub fn default_session_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => Path::new(&home).join(DEFAULT_FILE),
        _ => PathBuf::from(DEFAULT_FILE),
    }
}

#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored token, `None` when the file does not exist.
    pub fn load(&self) -> Result<Option<String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };
        let file: SessionFile =
            serde_json::from_str(&raw).map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        Ok(file.token.filter(|token| !token.is_empty()))
    }

    pub fn persist(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let file = SessionFile { token: Some(token.to_owned()) };
        let rendered = serde_json::to_string_pretty(&file)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        write_private(&self.path, &rendered).map_err(|source| self.io_error(source))
    }

    /// Remove the session file. Removing a missing file succeeds.
    pub fn remove(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }
}

/// Write `content` readable by the owner only (0600 on Unix).
fn write_private(path: &Path, content: &str) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        // `mode` only applies on create; tighten files left by older runs.
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file.write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        fs::write(path, content)?;
    }

    Ok(())
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str) {
        if let Err(e) = self.persist(token) {
            tracing::warn!(error = %e, key = TOKEN_KEY, "could not persist session token");
        }
    }

    fn read(&self) -> Option<String> {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable session file");
            None
        })
    }

    fn clear(&self) {
        if let Err(e) = self.remove() {
            tracing::warn!(error = %e, "could not remove session file");
        }
    }
}
