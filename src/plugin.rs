// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Plugin contract and registry for dashboard columns.
//!
//! Integrations register a [`ColumnPlugin`] that maps every project onto
//! the columns it contributes. The registry owns its plugins and applies
//! them in registration order, so the column layout of the table is
//! deterministic.

use std::fmt;

use crate::{column::Column, error::Error, normalizer::Project, travis::TravisPlugin};

/// Capability implemented by every dashboard column integration.
pub trait ColumnPlugin: Send + Sync {
    /// Short identifier used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Maps a project onto the columns this plugin contributes to its row.
    ///
    /// # Errors
    ///
    /// Plugins deriving columns from plain configuration data never fail;
    /// the error channel exists for plugins whose mapping can.
    fn apply(&self, project: &Project) -> Result<Vec<Box<dyn Column>>, Error>;
}

/// Ordered collection of plugins applied to every project row.
///
/// # Examples
///
/// ```
/// use shipboard::PluginRegistry;
///
/// let registry = PluginRegistry::with_defaults();
/// assert_eq!(registry.names(), ["travis"]);
/// ```
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn ColumnPlugin>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Creates a registry seeded with the built-in plugins.
    ///
    /// Currently this registers the build-status column.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TravisPlugin));
        registry
    }

    /// Appends a plugin; its columns render after previously registered
    /// ones.
    pub fn register(&mut self, plugin: Box<dyn ColumnPlugin>) {
        self.plugins.push(plugin);
    }

    /// Returns the registered plugin names in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Reports whether the registry holds no plugins.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Applies every registered plugin to the project in registration
    /// order and collects the contributed columns.
    ///
    /// # Errors
    ///
    /// Propagates the first plugin failure unmodified.
    pub fn apply_all(&self, project: &Project) -> Result<Vec<Box<dyn Column>>, Error> {
        let mut columns = Vec::with_capacity(self.plugins.len());
        for plugin in &self.plugins {
            columns.extend(plugin.apply(project)?);
        }
        Ok(columns)
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry").field("plugins", &self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnPlugin, PluginRegistry};
    use crate::{
        column::{Column, Html},
        error::Error,
        normalizer::Project,
    };

    struct FixedColumn;

    impl Column for FixedColumn {
        fn render_header(&self) -> Result<Html, Error> {
            Ok(Html::new("<th>Fixed</th>"))
        }

        fn render_detail(&self) -> Result<Html, Error> {
            Ok(Html::new("<td>fixed</td>"))
        }
    }

    struct FixedPlugin;

    impl ColumnPlugin for FixedPlugin {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn apply(&self, _project: &Project) -> Result<Vec<Box<dyn Column>>, Error> {
            Ok(vec![Box::new(FixedColumn)])
        }
    }

    struct FailingPlugin;

    impl ColumnPlugin for FailingPlugin {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn apply(&self, _project: &Project) -> Result<Vec<Box<dyn Column>>, Error> {
            Err(Error::render("plugin blew up"))
        }
    }

    fn sample_project() -> Project {
        Project {
            name:         "website".to_owned(),
            repo_owner:   "acme".to_owned(),
            repo_name:    "website".to_owned(),
            travis_token: String::new(),
        }
    }

    #[test]
    fn with_defaults_registers_build_status_column() {
        let registry = PluginRegistry::with_defaults();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), ["travis"]);
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }

    #[test]
    fn register_appends_in_application_order() {
        let mut registry = PluginRegistry::with_defaults();
        registry.register(Box::new(FixedPlugin));
        assert_eq!(registry.names(), ["travis", "fixed"]);
    }

    #[test]
    fn apply_all_collects_columns_in_registration_order() {
        let mut registry = PluginRegistry::with_defaults();
        registry.register(Box::new(FixedPlugin));

        let columns = registry.apply_all(&sample_project()).expect("expected plugins to apply");
        assert_eq!(columns.len(), 2);

        let first = columns[0].render_header().expect("expected header to render");
        assert!(first.as_str().contains("Build Status"));
        let second = columns[1].render_header().expect("expected header to render");
        assert_eq!(second, "<th>Fixed</th>");
    }

    #[test]
    fn apply_all_propagates_plugin_failures() {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(FailingPlugin));

        let error = registry.apply_all(&sample_project()).expect_err("expected plugin failure");
        match error {
            Error::Render {
                message,
            } => {
                assert_eq!(message, "plugin blew up");
            }
            other => panic!("expected render error, got {other:?}"),
        }
    }

    #[test]
    fn debug_output_lists_plugin_names() {
        let registry = PluginRegistry::with_defaults();
        let rendered = format!("{registry:?}");
        assert!(rendered.contains("travis"));
    }
}
