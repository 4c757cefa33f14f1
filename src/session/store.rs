/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/

//! Persisted client state: the credential token and the disclaimer flag

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Everything the client persists between runs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoredState {
    /// Credential token, `None` when logged out
    #[serde(default)]
    pub token: Option<String>,
    /// Whether the user accepted the disclaimer
    #[serde(default)]
    pub disclaimer_accepted: bool,
}

/// Storage for the credential token and the disclaimer flag
pub trait TokenStore: Send + Sync {
    /// Stored token, if any
    fn token(&self) -> Option<String>;

    /// Stores `token`, replacing any previous one
    fn set_token(&self, token: &str) -> Result<(), AppError>;

    /// Removes the token
    fn clear_token(&self) -> Result<(), AppError>;

    /// Whether the disclaimer was accepted
    fn disclaimer_accepted(&self) -> bool;

    /// Records disclaimer acceptance
    fn accept_disclaimer(&self) -> Result<(), AppError>;
}

fn read_state(lock: &RwLock<StoredState>) -> StoredState {
    match lock.read() {
        Ok(state) => state.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn write_state<F>(lock: &RwLock<StoredState>, f: F)
where
    F: FnOnce(&mut StoredState),
{
    let mut guard = match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard);
}

/// In-memory store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    state: RwLock<StoredState>,
}

impl MemoryTokenStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already holding `token`
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            state: RwLock::new(StoredState {
                token: Some(token.to_string()),
                disclaimer_accepted: false,
            }),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        read_state(&self.state).token
    }

    fn set_token(&self, token: &str) -> Result<(), AppError> {
        write_state(&self.state, |s| s.token = Some(token.to_string()));
        Ok(())
    }

    fn clear_token(&self) -> Result<(), AppError> {
        write_state(&self.state, |s| s.token = None);
        Ok(())
    }

    fn disclaimer_accepted(&self) -> bool {
        read_state(&self.state).disclaimer_accepted
    }

    fn accept_disclaimer(&self) -> Result<(), AppError> {
        write_state(&self.state, |s| s.disclaimer_accepted = true);
        Ok(())
    }
}

/// Store persisted as a small JSON file
///
/// The file is read once on open and rewritten on every change. A change that
/// cannot be written is not applied in memory either.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    state: RwLock<StoredState>,
}

impl FileTokenStore {
    /// Opens the store at `path`; a missing or unreadable file starts empty
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring corrupt session file {}: {}", path.display(), e);
                StoredState::default()
            })
        } else {
            StoredState::default()
        };
        debug!("Session store opened at {}", path.display());

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `state` to a sibling temp file, then renames it over the session file
    ///
    /// On unix the file is created with mode `0600`.
    fn persist(&self, state: &StoredState) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let written = options.open(&tmp).and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// Applies `f` to a copy of the state and commits it only once persisted
    fn update<F>(&self, f: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut StoredState),
    {
        let mut guard = match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut next = guard.clone();
        f(&mut next);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        read_state(&self.state).token
    }

    fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.update(|s| s.token = Some(token.to_string()))
    }

    fn clear_token(&self) -> Result<(), AppError> {
        self.update(|s| s.token = None)
    }

    fn disclaimer_accepted(&self) -> bool {
        read_state(&self.state).disclaimer_accepted
    }

    fn accept_disclaimer(&self) -> Result<(), AppError> {
        self.update(|s| s.disclaimer_accepted = true)
    }
}
