#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the dashboard crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the configuration loader, plugins and CLI.
///
/// Each variant captures sufficient context for diagnostics while avoiding
/// accidental exposure of sensitive data; access tokens never appear in error
/// messages. Instances are typically constructed through the [`io_error`]
/// helper or by converting from serde and store error types via the provided
/// `From` implementations.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading configuration files.
    #[error("failed to read configuration from {path:?}: {source}")]
    Io {
        /// Location of the configuration file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when the configuration violates invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps serialization errors when writing normalized output.
    #[error("failed to serialize projects: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Returned when a column template cannot be rendered.
    #[error("failed to render column: {message}")]
    Render {
        /// Human readable message describing the render failure.
        message: String
    },
    /// Wraps token store failures that persist after retries.
    #[error("token lookup failed: {source}")]
    Store {
        /// Underlying store error.
        source: StoreError
    },
    /// Wraps I/O errors that occur while emitting rendered output.
    #[error("failed to write rendered output: {source}")]
    Output {
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a render error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the render failure.
    pub fn render<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Render {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

impl From<StoreError> for Error {
    fn from(source: StoreError) -> Self {
        Self::Store {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the configuration file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Errors surfaced by token store lookups.
///
/// Absence and transport failure are deliberately distinct variants: a
/// missing key is an answer (the project has no token and stays public),
/// while a transport failure means the true answer is unknown and the lookup
/// may be retried.
#[derive(Debug, masterror::Error)]
pub enum StoreError {
    /// The requested key does not exist in the store.
    #[error("key not found: {key}")]
    NotFound {
        /// Key that was requested.
        key: String
    },
    /// The store could not be reached or answered abnormally.
    #[error("store transport failure: {message}")]
    Transport {
        /// Human readable description of the transport problem.
        message: String
    }
}

impl StoreError {
    /// Constructs a [`StoreError::NotFound`] for the requested key.
    ///
    /// # Parameters
    ///
    /// * `key` - Key whose lookup produced no value.
    pub fn not_found<K>(key: K) -> Self
    where
        K: Into<String>
    {
        Self::NotFound {
            key: key.into()
        }
    }

    /// Constructs a [`StoreError::Transport`] from the provided message.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the transport problem.
    pub fn transport<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Transport {
            message: message.into()
        }
    }

    /// Reports whether the failure is transient and worth retrying.
    ///
    /// Only transport failures qualify; a missing key is a definitive
    /// answer and retrying it would never change the outcome.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
