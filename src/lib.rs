// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Pluggable status columns for deployment dashboards.
//!
//! The library loads YAML configuration files describing dashboard projects,
//! normalizes them, optionally fills CI access tokens from an injectable
//! token store, and renders the projects as an HTML table composed from
//! column plugins. The shipped plugin contributes a Travis CI build-status
//! badge column; further integrations implement [`ColumnPlugin`] and
//! register with the [`PluginRegistry`]. All public APIs are documented with
//! invariants, error semantics, and minimal examples.

mod column;
mod config;
mod error;
mod normalizer;
mod plugin;
mod resolve;
mod retry;
mod store;
mod table;
mod travis;

pub use column::{Column, Html};
pub use config::{ProjectEntry, ProjectsConfig};
pub use error::{Error, StoreError, io_error};
pub use normalizer::{Project, ProjectsDocument, load_projects, parse_projects};
pub use plugin::{ColumnPlugin, PluginRegistry};
pub use resolve::{resolve_tokens, resolve_tokens_with};
pub use retry::{RetryConfig, retry_with_backoff};
pub use store::{MemoryStore, TokenStore, travis_token_key};
pub use table::render_table;
pub use travis::{TravisColumn, TravisPlugin};
