// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CI build-status column plugin.
//!
//! Renders one badge cell per project linking to the Travis CI status page
//! for the backing repository. Public repositories use the open host while
//! token-holding projects are routed to the authenticated host with the
//! token embedded in the badge query. The `onerror` handler hides the badge
//! image when the CI service has no build for the repository.

use crate::{
    column::{Column, Html},
    error::Error,
    normalizer::Project,
    plugin::ColumnPlugin,
};

/// Host serving status pages and badges for public repositories.
const PUBLIC_HOST: &str = "https://travis-ci.org";
/// Host serving status pages and badges for private repositories.
const PRIVATE_HOST: &str = "https://magnum.travis-ci.com";
/// Branch pinned in badge queries.
const BADGE_BRANCH: &str = "master";
/// Fixed header cell emitted once at the top of the column.
const HEADER_FRAGMENT: &str = r#"<th style="min-width: 100px">Build Status</th>"#;

/// Column value carrying the build-status badge of one project.
///
/// Instances are plain data mapped from a normalized [`Project`] and are
/// recreated on every render pass. An empty [`token`](Self::token) marks the
/// repository as public.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravisColumn {
    /// Organization that owns the repository.
    pub organization: String,
    /// Repository the badge reports on.
    pub project:      String,
    /// Access token; empty for public repositories.
    pub token:        String,
}

impl TravisColumn {
    /// Maps a normalized project onto its build-status column value.
    ///
    /// The column addresses the backing repository, so the owner and
    /// repository name are taken over while the dashboard name of the
    /// project plays no part in badge URLs.
    ///
    /// # Examples
    ///
    /// ```
    /// use shipboard::{Project, TravisColumn};
    ///
    /// let project = Project {
    ///     name:         "frontend".to_owned(),
    ///     repo_owner:   "acme".to_owned(),
    ///     repo_name:    "frontend-app".to_owned(),
    ///     travis_token: String::new(),
    /// };
    /// let column = TravisColumn::for_project(&project);
    /// assert_eq!(column.organization, "acme");
    /// assert_eq!(column.project, "frontend-app");
    /// assert!(column.token.is_empty());
    /// ```
    pub fn for_project(project: &Project) -> Self {
        Self {
            organization: project.repo_owner.clone(),
            project:      project.repo_name.clone(),
            token:        project.travis_token.clone(),
        }
    }

    /// Returns the status page URL the badge links to.
    fn status_url(&self) -> String {
        let host = if self.token.is_empty() { PUBLIC_HOST } else { PRIVATE_HOST };
        format!("{host}/{}/{}", self.organization, self.project)
    }

    /// Returns the badge image URL, embedding the token for private
    /// repositories.
    fn badge_url(&self) -> String {
        if self.token.is_empty() {
            format!(
                "{PUBLIC_HOST}/{}/{}.svg?branch={BADGE_BRANCH}",
                self.organization, self.project
            )
        } else {
            format!(
                "{PRIVATE_HOST}/{}/{}.svg?token={}&branch={BADGE_BRANCH}",
                self.organization, self.project, self.token
            )
        }
    }
}

impl Column for TravisColumn {
    /// Renders the fixed header cell shared by every project row.
    ///
    /// The template is constant, so this never fails in practice; the error
    /// channel exists for interface uniformity with other columns.
    fn render_header(&self) -> Result<Html, Error> {
        Ok(Html::new(HEADER_FRAGMENT))
    }

    /// Renders the badge cell for this column's repository.
    fn render_detail(&self) -> Result<Html, Error> {
        let status_url = self.status_url();
        let badge_url = self.badge_url();
        Ok(Html::new(format!(
            r#"<td><a target=_blank href={status_url}><img src={badge_url} onerror='this.style.display = "none"'></img></a></td>"#
        )))
    }
}

/// Plugin contributing the build-status column to the dashboard table.
#[derive(Debug, Default, Clone, Copy)]
pub struct TravisPlugin;

impl ColumnPlugin for TravisPlugin {
    fn name(&self) -> &'static str {
        "travis"
    }

    /// Contributes exactly one [`TravisColumn`] per project.
    fn apply(&self, project: &Project) -> Result<Vec<Box<dyn Column>>, Error> {
        Ok(vec![Box::new(TravisColumn::for_project(project))])
    }
}
