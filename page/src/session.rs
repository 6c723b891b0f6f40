//! Session-scoped storage and navigation.
//!
//! Starting a social verification leaves the quest page for the identity
//! app. The identity token is stored under [`TOKEN_ID_KEY`] first so the
//! destination can pick the verification up.

use crate::error::PageError;
use quest_types::Felt;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key under which the active identity token is handed over.
pub const TOKEN_ID_KEY: &str = "tokenId";

/// String key-value storage living as long as the browsing session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
    fn remove(&self, key: &str) -> Result<(), PageError>;
}

/// Moves the user to another page.
pub trait Navigator {
    fn push(&self, link: &str) -> Result<(), PageError>;
}

/// Persist `token_id` for the destination page, then navigate to `link`.
pub fn start_verification<S: SessionStore, N: Navigator>(
    session: &S,
    navigator: &N,
    token_id: &Felt,
    link: &str,
) -> Result<(), PageError> {
    session.set(TOKEN_ID_KEY, &token_id.to_decimal())?;
    tracing::info!(%token_id, link, "starting social verification");
    navigator.push(link)
}

/// The token a verification was started for, if any.
pub fn pending_verification<S: SessionStore>(session: &S) -> Result<Option<Felt>, PageError> {
    match session.get(TOKEN_ID_KEY)? {
        Some(raw) => Felt::parse(&raw)
            .map(Some)
            .map_err(|e| PageError::Session(format!("stored token id: {e}"))),
        None => Ok(None),
    }
}

/// In-memory session store.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Session store backed by a JSON object in a file.
///
/// A missing file is an empty session.
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

    fn load(&self) -> Result<BTreeMap<String, String>, PageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| PageError::Session(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), PageError> {
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| PageError::Session(e.to_string()))?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// End the session.
    pub fn clear(&self) -> Result<(), PageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), PageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn push(&self, link: &str) -> Result<(), PageError> {
            self.visited.borrow_mut().push(link.to_string());
            Ok(())
        }
    }

    #[test]
    fn start_verification_stores_token_then_navigates() {
        let session = MemorySessionStore::new();
        let navigator = RecordingNavigator::default();

        start_verification(
            &session,
            &navigator,
            &Felt::from_u64(42),
            "https://app.starknet.id/identities",
        )
        .unwrap();

        assert_eq!(session.get(TOKEN_ID_KEY).unwrap(), Some("42".to_string()));
        assert_eq!(
            *navigator.visited.borrow(),
            vec!["https://app.starknet.id/identities".to_string()]
        );
        assert_eq!(
            pending_verification(&session).unwrap(),
            Some(Felt::from_u64(42))
        );
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");

        FileSessionStore::new(&path).set(TOKEN_ID_KEY, "7").unwrap();
        let reopened = FileSessionStore::new(&path);
        assert_eq!(reopened.get(TOKEN_ID_KEY).unwrap(), Some("7".to_string()));

        reopened.remove(TOKEN_ID_KEY).unwrap();
        assert_eq!(reopened.get(TOKEN_ID_KEY).unwrap(), None);
    }

    #[test]
    fn missing_file_is_empty_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileSessionStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get(TOKEN_ID_KEY).unwrap(), None);
        assert_eq!(pending_verification(&store).unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_session_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let err = FileSessionStore::new(&path).get(TOKEN_ID_KEY).unwrap_err();
        assert!(matches!(err, PageError::Session(_)));
    }
}
