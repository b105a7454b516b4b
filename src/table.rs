// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dashboard table assembly.
//!
//! Composes the columns contributed by a [`PluginRegistry`] into the HTML
//! table the dashboard embeds: one header row and one body row per project.
//! Column cells are emitted verbatim (they are finished [`Html`] fragments);
//! project names are escaped because they originate from configuration.
//!
//! [`Html`]: crate::column::Html

use tracing::debug;

use crate::{error::Error, normalizer::Project, plugin::PluginRegistry};

/// Placeholder emitted when the dashboard has no projects to show.
const EMPTY_PLACEHOLDER: &str = "<p>\n  No projects registered yet.\n</p>";

/// Renders the dashboard table for the given projects.
///
/// The header row consists of a fixed `Project` cell followed by the header
/// of each column contributed to the first project; plugins must yield the
/// same column shape for every project. Each body row carries the escaped
/// project name in `<code>` followed by the column detail cells.
///
/// # Errors
///
/// Propagates plugin and column render failures unmodified.
///
/// # Examples
///
/// ```
/// use shipboard::{PluginRegistry, Project, render_table};
///
/// let registry = PluginRegistry::with_defaults();
/// let projects = vec![Project {
///     name:         "website".to_owned(),
///     repo_owner:   "acme".to_owned(),
///     repo_name:    "website".to_owned(),
///     travis_token: String::new(),
/// }];
/// let table = render_table(&registry, &projects).expect("table renders");
/// assert!(table.contains("Build Status"));
/// ```
pub fn render_table(registry: &PluginRegistry, projects: &[Project]) -> Result<String, Error> {
    if projects.is_empty() {
        debug!("No projects to render; emitting placeholder");
        return Ok(EMPTY_PLACEHOLDER.to_owned());
    }

    let mut table = String::from("<table>\n  <thead>\n    <tr>\n      <th>Project</th>");

    let first_columns = registry.apply_all(&projects[0])?;
    for column in &first_columns {
        table.push_str("\n      ");
        table.push_str(column.render_header()?.as_str());
    }
    table.push_str("\n    </tr>\n  </thead>\n  <tbody>");

    for project in projects {
        debug!("Rendering row for {}", project.name);
        table.push_str(&format!(
            "\n    <tr>\n      <td><code>{}</code></td>",
            escape_html(&project.name)
        ));
        for column in registry.apply_all(project)? {
            table.push_str("\n      ");
            table.push_str(column.render_detail()?.as_str());
        }
        table.push_str("\n    </tr>");
    }

    table.push_str("\n  </tbody>\n</table>");
    Ok(table)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
