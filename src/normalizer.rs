// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Transformation logic that converts raw configuration entries into
//! normalized dashboard projects.
//!
//! Normalization trims and validates the identifiers that later appear in
//! badge URLs and token store keys, and rejects duplicate project names so
//! every row resolves to a distinct token lookup. The resulting structures
//! are ready for plugin application and serialization.

use std::{collections::HashSet, fs, path::Path};

use serde::Serialize;

use crate::{
    config::{ProjectEntry, ProjectsConfig},
    error::{self, Error},
};

/// Normalized representation of a dashboard project.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique dashboard name; also keys token store lookups.
    pub name:         String,
    /// Account that owns the repository.
    pub repo_owner:   String,
    /// Repository the project deploys from.
    pub repo_name:    String,
    /// CI access token; empty when the project is public.
    pub travis_token: String,
}

impl Project {
    /// Reports whether the project is public.
    ///
    /// Public projects carry no token and render badge URLs without
    /// authentication parameters.
    pub fn is_public(&self) -> bool {
        self.travis_token.is_empty()
    }
}

/// Document containing all normalized projects.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ProjectsDocument {
    /// Aggregated projects derived from the configuration.
    pub projects: Vec<Project>,
}

/// Loads projects from the provided YAML configuration file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or the configuration violates invariants during
/// normalization.
pub fn load_projects(path: &Path) -> Result<ProjectsDocument, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_projects(&contents)
}

/// Parses projects from the provided YAML document string.
///
/// This function is suitable for unit tests and higher-level callers that
/// already obtained the configuration contents.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// and [`Error::Validation`](Error::Validation) when required entries are
/// missing.
pub fn parse_projects(contents: &str) -> Result<ProjectsDocument, Error> {
    let config: ProjectsConfig = serde_yaml::from_str(contents)?;
    if config.projects.is_empty() {
        return Err(Error::validation("configuration must include at least one project"));
    }

    normalize_projects(&config.projects)
}

/// Normalizes raw configuration entries into a deduplicated document.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when two entries share a
/// project name.
fn normalize_projects(entries: &[ProjectEntry]) -> Result<ProjectsDocument, Error> {
    let mut normalized = Vec::with_capacity(entries.len());
    let mut seen_names = HashSet::with_capacity(entries.len());

    for entry in entries {
        let project = normalize_entry(entry)?;

        if !seen_names.insert(project.name.clone()) {
            return Err(Error::validation(format!("duplicate project '{}'", project.name)));
        }

        normalized.push(project);
    }

    Ok(ProjectsDocument {
        projects: normalized,
    })
}

/// Converts a raw configuration entry into a normalized project.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when required fields are
/// missing or contain disallowed characters.
fn normalize_entry(entry: &ProjectEntry) -> Result<Project, Error> {
    let name = normalize_identifier(&entry.name, "name")?;
    let repo_owner = normalize_identifier(&entry.repo_owner, "repo_owner")?;
    let repo_name = normalize_identifier(&entry.repo_name, "repo_name")?;
    let travis_token = entry.resolved_token();

    Ok(Project {
        name,
        repo_owner,
        repo_name,
        travis_token,
    })
}

/// Validates identifier-like fields such as names, owners and repositories.
///
/// Identifiers end up verbatim in badge URLs and store keys, so whitespace
/// is rejected rather than encoded.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when the value is empty
/// or contains whitespace.
fn normalize_identifier(input: &str, field: &str) -> Result<String, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty")));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(Error::validation(format!("{field} cannot contain whitespace")));
    }
    Ok(trimmed.to_owned())
}
