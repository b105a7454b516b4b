// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Token lookup capability backing private-repository badges.
//!
//! Deployment dashboards keep per-project settings in an external key-value
//! service. This module models the one slice the column plugins need, a
//! keyed string lookup, behind the [`TokenStore`] trait so rendering stays
//! testable without the service. [`MemoryStore`] is the map-backed
//! implementation used by tests and by the CLI, which seeds it from a JSON
//! object file.

use std::{collections::HashMap, fs, path::Path};

use async_trait::async_trait;

use crate::error::{self, Error, StoreError};

/// Prefix under which per-project settings are stored.
const PROJECTS_PREFIX: &str = "/projects";
/// Leaf key holding the CI access token of a project.
const TRAVIS_TOKEN_KEY: &str = "travis_token";

/// Builds the store key holding a project's CI access token.
///
/// # Examples
///
/// ```
/// use shipboard::travis_token_key;
///
/// assert_eq!(travis_token_key("billing"), "/projects/billing/travis_token");
/// ```
pub fn travis_token_key(project_name: &str) -> String {
    format!("{PROJECTS_PREFIX}/{project_name}/{TRAVIS_TOKEN_KEY}")
}

/// Keyed string lookup consulted during token resolution.
///
/// Implementations distinguish a missing key from a failed lookup: absence
/// is a definitive answer while a transport failure leaves the answer
/// unknown.
///
/// # Examples
///
/// ```
/// use shipboard::{MemoryStore, StoreError, TokenStore, travis_token_key};
///
/// # async fn example() -> Result<(), StoreError> {
/// let mut store = MemoryStore::new();
/// store.insert(travis_token_key("billing"), "secret");
/// let token = store.get(&travis_token_key("billing")).await?;
/// assert_eq!(token, "secret");
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Fetches the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the key is absent and
    /// [`StoreError::Transport`] when the store cannot answer.
    async fn get(&self, key: &str) -> Result<String, StoreError>;
}

/// In-memory token store backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a JSON file mapping keys to token values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Validation`] when the document is not a flat JSON object of
    /// strings.
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
        let entries: HashMap<String, String> = serde_json::from_str(&contents)
            .map_err(|source| Error::validation(format!("invalid token document: {source}")))?;
        Ok(entries.into_iter().collect())
    }

    /// Inserts a key-value pair, replacing any previous value.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for MemoryStore {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<String, StoreError> {
        self.entries.get(key).cloned().ok_or_else(|| StoreError::not_found(key))
    }
}
