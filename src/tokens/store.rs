//! Mirror token list persisted under a single storage key
//!
//! The whole list is one JSON array. Every mutation reads it, changes it and
//! writes it back in full; there is no protection against concurrent writers.

use super::traits::{KeyValueStore, StorageError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key holding the token array.
pub const STORAGE_KEY: &str = "cogniLexiconMirrorTokens";

/// A user-named shortcut to a previously explored concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorToken {
    /// Identity key, unique ignoring case
    pub name: String,
    /// Query replayed when the token is loaded
    pub concept: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl MirrorToken {
    pub fn new(name: impl Into<String>, concept: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            concept: concept.into(),
            saved_at: None,
        }
    }

    /// Stamp the token with the current time.
    pub fn saved_now(mut self) -> Self {
        self.saved_at = Some(Utc::now());
        self
    }

    fn same_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Errors from token store operations
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("A mirror token named \"{0}\" already exists.")]
    AlreadyExists(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Owned token list over a key/value backend.
pub struct MirrorTokenStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> MirrorTokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Access the underlying backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All stored tokens, in insertion order.
    ///
    /// An absent key yields an empty list. So does a value that fails to
    /// parse; that case is logged and otherwise ignored.
    pub fn load_all(&self) -> Result<Vec<MirrorToken>, TokenError> {
        let Some(raw) = self.storage.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<MirrorToken>>(&raw) {
            Ok(tokens) => Ok(tokens),
            Err(e) => {
                warn!(error = %e, "error loading mirror tokens; starting from an empty list");
                Ok(Vec::new())
            }
        }
    }

    /// Look up a token by name, ignoring case.
    pub fn find(&self, name: &str) -> Result<Option<MirrorToken>, TokenError> {
        Ok(self.load_all()?.into_iter().find(|t| t.same_name(name)))
    }

    /// Append a token unless one with the same name (ignoring case) exists.
    pub fn add(&self, token: MirrorToken) -> Result<(), TokenError> {
        let mut tokens = self.load_all()?;
        if tokens.iter().any(|t| t.same_name(&token.name)) {
            return Err(TokenError::AlreadyExists(token.name));
        }
        debug!(name = %token.name, concept = %token.concept, "adding mirror token");
        tokens.push(token);
        self.save(&tokens)
    }

    /// Remove the token whose name matches exactly.
    ///
    /// Returns whether a token was removed. The list is rewritten either way.
    pub fn remove(&self, name: &str) -> Result<bool, TokenError> {
        let mut tokens = self.load_all()?;
        let before = tokens.len();
        tokens.retain(|t| t.name != name);
        let removed = tokens.len() != before;
        self.save(&tokens)?;
        Ok(removed)
    }

    fn save(&self, tokens: &[MirrorToken]) -> Result<(), TokenError> {
        let json = serde_json::to_string(tokens).map_err(StorageError::from)?;
        self.storage.set(STORAGE_KEY, &json)?;
        Ok(())
    }
}
