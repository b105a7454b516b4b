// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column capability shared by dashboard plugins.
//!
//! Every integration contributes table columns: a header cell rendered once
//! at the top of the table and a detail cell rendered for each project row.
//! Rendered output is carried in [`Html`], a marker type distinguishing
//! finished fragments from plain strings.

use std::fmt;

use crate::error::Error;

/// HTML fragment produced by a column renderer.
///
/// The wrapper marks strings that are ready to be embedded into the
/// dashboard page verbatim. Renderers produce complete fragments in one
/// step; there is no incremental builder API.
///
/// # Examples
///
/// ```
/// use shipboard::Html;
///
/// let cell = Html::new("<td>ok</td>");
/// assert_eq!(cell.as_str(), "<td>ok</td>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    /// Wraps a finished HTML fragment.
    pub fn new<F>(fragment: F) -> Self
    where
        F: Into<String>,
    {
        Self(fragment.into())
    }

    /// Borrows the fragment as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Html {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Capability implemented by every value that renders as a dashboard column.
///
/// Implementations are plain data mapped from project configuration. Both
/// render methods are pure: they may be called any number of times in any
/// order and always produce the same fragment for the same value.
pub trait Column {
    /// Renders the header cell emitted once at the top of the column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] when the header template cannot be
    /// produced. Columns with fixed headers never fail.
    fn render_header(&self) -> Result<Html, Error>;

    /// Renders the detail cell for the project row this column belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] when the detail template cannot be
    /// produced.
    fn render_detail(&self) -> Result<Html, Error>;
}

impl fmt::Debug for dyn Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn Column")
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, Html};
    use crate::error::Error;

    struct StaticColumn;

    impl Column for StaticColumn {
        fn render_header(&self) -> Result<Html, Error> {
            Ok(Html::new("<th>Static</th>"))
        }

        fn render_detail(&self) -> Result<Html, Error> {
            Ok(Html::new("<td>static</td>"))
        }
    }

    #[test]
    fn html_preserves_fragment_verbatim() {
        let cell = Html::new("<td><code>demo</code></td>");
        assert_eq!(cell.as_str(), "<td><code>demo</code></td>");
    }

    #[test]
    fn html_display_matches_fragment() {
        let cell = Html::new("<th>Build Status</th>");
        assert_eq!(format!("{cell}"), "<th>Build Status</th>");
    }

    #[test]
    fn html_into_string_returns_inner_value() {
        let cell = Html::new("<td></td>");
        assert_eq!(cell.into_string(), String::from("<td></td>"));
    }

    #[test]
    fn html_compares_against_string_slices() {
        let cell = Html::new("<td>42</td>");
        assert_eq!(cell, "<td>42</td>");
    }

    #[test]
    fn html_clones_compare_equal() {
        let cell = Html::new("<td>42</td>");
        assert_eq!(cell.clone(), cell);
    }

    #[test]
    fn columns_are_usable_as_trait_objects() {
        let column: Box<dyn Column> = Box::new(StaticColumn);
        assert_eq!(column.render_header().expect("header renders"), "<th>Static</th>");
        assert_eq!(column.render_detail().expect("detail renders"), "<td>static</td>");
    }

    #[test]
    fn render_is_repeatable() {
        let column = StaticColumn;
        let first = column.render_detail().expect("first render");
        let second = column.render_detail().expect("second render");
        assert_eq!(first, second);
    }
}
