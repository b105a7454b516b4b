// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Configuration document types describing dashboard projects.
//!
//! The types in this module mirror the structure of the YAML documents
//! consumed by the dashboard CLI. Entries deliberately tolerate unknown
//! fields: the same document configures other dashboard integrations, and
//! this crate reads only the keys it needs.

use serde::{Deserialize, Serialize};

/// Root configuration document listing every project shown on the dashboard.
///
/// # Examples
///
/// ```
/// use shipboard::ProjectsConfig;
///
/// let yaml = r#"
/// projects:
///   - name: website
///     owner: acme
///     repo: website
/// "#;
/// let config: ProjectsConfig = serde_yaml::from_str(yaml).expect("valid configuration");
/// assert_eq!(config.projects.len(), 1);
/// ```
#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectsConfig {
    /// Collection of projects rendered as dashboard rows.
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

/// Raw configuration entry describing a single project before normalization.
///
/// Instances are typically created by deserializing YAML documents. The
/// aliases accept the shorthand keys used by hand-written configuration
/// files alongside the canonical names.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectEntry {
    /// Dashboard name of the project; also keys token store lookups.
    pub name: String,

    /// Account that owns the repository the project deploys from.
    #[serde(alias = "owner")]
    pub repo_owner: String,

    /// Repository the project deploys from.
    #[serde(alias = "repo")]
    pub repo_name: String,

    /// Optional CI access token. Absent or blank means the project is
    /// public and badge URLs carry no token.
    #[serde(default, alias = "token")]
    pub travis_token: Option<String>,
}

impl ProjectEntry {
    /// Returns the effective access token with surrounding whitespace
    /// removed.
    ///
    /// An absent or blank token resolves to the empty string, which marks
    /// the project as public throughout the crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use shipboard::ProjectEntry;
    ///
    /// let entry = ProjectEntry {
    ///     name:         "website".to_owned(),
    ///     repo_owner:   "acme".to_owned(),
    ///     repo_name:    "website".to_owned(),
    ///     travis_token: None,
    /// };
    /// assert_eq!(entry.resolved_token(), "");
    /// ```
    pub fn resolved_token(&self) -> String {
        self.travis_token
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned()
    }
}
