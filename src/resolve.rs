// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Token resolution for dashboard projects.
//!
//! Fills empty project tokens from a [`TokenStore`] before rendering.
//! Projects that already carry a token are left untouched. A missing key
//! leaves the project public, while transport failures are retried with
//! backoff and surfaced once they persist.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::{
    error::{Error, StoreError},
    normalizer::Project,
    retry::{RetryConfig, retry_with_backoff},
    store::{TokenStore, travis_token_key},
};

/// Fills empty project tokens from the store using default retry settings.
///
/// Returns the number of tokens that were filled.
///
/// # Arguments
///
/// * `store` - Token store consulted for each project without a token
/// * `projects` - Normalized projects to update in place
///
/// # Errors
///
/// Returns [`Error::Store`] when a lookup keeps failing after retries. A
/// missing key is not an error; the affected project simply stays public.
///
/// # Examples
///
/// ```no_run
/// use shipboard::{MemoryStore, Project, resolve_tokens};
///
/// # async fn example() -> Result<(), shipboard::Error> {
/// let store = MemoryStore::new();
/// let mut projects = vec![Project {
///     name:         "billing".to_owned(),
///     repo_owner:   "acme".to_owned(),
///     repo_name:    "billing-service".to_owned(),
///     travis_token: String::new(),
/// }];
/// let filled = resolve_tokens(&store, &mut projects).await?;
/// assert_eq!(filled, 0);
/// # Ok(())
/// # }
/// ```
pub async fn resolve_tokens<S>(store: &S, projects: &mut [Project]) -> Result<usize, Error>
where
    S: TokenStore + ?Sized,
{
    resolve_tokens_with(store, projects, &RetryConfig::default()).await
}

/// Fills empty project tokens from the store with explicit retry settings.
///
/// # Errors
///
/// Returns [`Error::Store`] when a lookup keeps failing after retries.
pub async fn resolve_tokens_with<S>(
    store: &S,
    projects: &mut [Project],
    retry: &RetryConfig,
) -> Result<usize, Error>
where
    S: TokenStore + ?Sized,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} [{elapsed_precise}] {msg}")
            .expect("valid template"),
    );

    info!("Resolving tokens for {} projects", projects.len());
    let mut filled = 0;

    for project in projects.iter_mut() {
        if !project.travis_token.is_empty() {
            debug!("Skipping {}: token already configured", project.name);
            continue;
        }

        let key = travis_token_key(&project.name);
        pb.set_message(format!("Looking up {key}..."));
        debug!("Looking up {}", key);

        match retry_with_backoff(retry, "token lookup", || store.get(&key)).await {
            Ok(token) => {
                project.travis_token = token;
                filled += 1;
            }
            Err(StoreError::NotFound {
                ..
            }) => {
                debug!("No token for {}; project stays public", project.name);
            }
            Err(error) => return Err(Error::from(error)),
        }
    }

    if filled > 0 {
        pb.finish_with_message(format!("Token resolution complete: {filled} tokens filled"));
        info!("Filled {} tokens from store", filled);
    } else {
        pb.finish_with_message("Token resolution complete: no tokens filled");
        debug!("No tokens filled from store");
    }

    Ok(filled)
}
