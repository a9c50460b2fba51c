use crate::error::Result;
use crate::models::user::Session;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::{info, warn};

/// Storage for the signed-in user's session. Implementations must be safe to
/// share across tasks.
pub trait SessionStore: Send + Sync {
    /// The session currently in effect, if any.
    fn current(&self) -> Option<Session>;

    /// Persist a fresh session, replacing any previous one.
    fn establish(&self, session: Session) -> Result<()>;

    /// Drop the session from memory and from the backing store.
    fn clear(&self) -> Result<()>;

    /// Reload from the backing store, e.g. on startup.
    fn restore(&self) -> Result<Option<Session>>;
}

/// File-backed store. The session is mirrored in memory so reads never touch
/// disk; writes go through a temp file and rename so a crash mid-write cannot
/// leave a half-written session behind.
pub struct FileSessionStore {
    path: PathBuf,
    cached: RwLock<Option<Session>>,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cached: RwLock::new(None),
        }
    }

    fn read_disk(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Discarding unreadable session file: {}", e);
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn current(&self) -> Option<Session> {
        self.cached
            .read()
            .expect("session cache lock poisoned")
            .clone()
    }

    fn establish(&self, session: Session) -> Result<()> {
        let encoded = serde_json::to_string_pretty(&session)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        *self.cached.write().expect("session cache lock poisoned") = Some(session);
        info!("Session established");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        *self.cached.write().expect("session cache lock poisoned") = None;
        info!("Session cleared");
        Ok(())
    }

    fn restore(&self) -> Result<Option<Session>> {
        let session = self.read_disk();
        *self.cached.write().expect("session cache lock poisoned") = session.clone();
        Ok(session)
    }
}

/// In-memory store for tests and short-lived tools.
#[derive(Default)]
pub struct MemorySessionStore {
    cached: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn current(&self) -> Option<Session> {
        self.cached
            .read()
            .expect("session cache lock poisoned")
            .clone()
    }

    fn establish(&self, session: Session) -> Result<()> {
        *self.cached.write().expect("session cache lock poisoned") = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.cached.write().expect("session cache lock poisoned") = None;
        Ok(())
    }

    fn restore(&self) -> Result<Option<Session>> {
        Ok(self.current())
    }
}
