//! Single-slot store with best-effort JSON persistence (temp file + rename).

use super::Session;
use crate::error::{ServiceError, ServiceResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

pub const LATEST_SESSION_FILE: &str = "latest_session.json";

/// Holds the most recent scored session. The in-memory slot is authoritative;
/// the file copy only serves reads after a restart.
pub struct SessionStore {
    slot: Mutex<Option<Session>>,
    path: PathBuf,
}

impl SessionStore {
    /// Store persisting to `latest_session.json` under `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            slot: Mutex::new(None),
            path: data_dir.join(LATEST_SESSION_FILE),
        }
    }

    /// Replace the latest session. The durable write runs after the slot lock
    /// is released; a write failure logs a warning and never fails the caller.
    pub fn put(&self, session: Session) {
        {
            let mut slot = self.slot.lock().expect("lock");
            *slot = Some(session.clone());
        }
        if let Err(e) = self.persist(&session) {
            warn!(
                session_id = %session.session_id,
                error = %e,
                "session persistence failed; in-memory state still authoritative"
            );
        }
    }

    /// Latest session: in-memory slot first, else the last persisted session.
    pub fn get(&self) -> ServiceResult<Session> {
        if let Some(s) = self.slot.lock().expect("lock").clone() {
            return Ok(s);
        }
        self.load_persisted().ok_or(ServiceError::NoSession)
    }

    fn persist(&self, session: &Session) -> std::io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string(session)?;
        // Per-write temp path (session ids are unique), renamed into place:
        // concurrent writers cannot interleave bytes and readers only ever
        // see a complete file.
        let tmp = self
            .path
            .with_extension(format!("{}.tmp", session.session_id));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "latest session persisted");
        Ok(())
    }

    fn load_persisted(&self) -> Option<Session> {
        let data = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&data) {
            Ok(s) => Some(s),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "persisted session unreadable");
                None
            }
        }
    }
}
