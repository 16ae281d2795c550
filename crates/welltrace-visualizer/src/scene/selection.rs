//! Well selection from rendered-series interactions.
//!
//! Derived series are namespaced `"{well or collector} | {suffix}"`;
//! clicking any series resolves its base name, and if that names a
//! well, toggles isolation. Double-click clears the isolation.

use welltrace_core::Wells;

/// Separator between the base entity name and a series suffix.
pub const SERIES_NAME_SEPARATOR: &str = " | ";

/// Compose a namespaced series name from its parts. The builders use
/// this so composed names always resolve back via [`base_series_name`].
pub fn series_name(parts: &[&str]) -> String {
    parts.join(SERIES_NAME_SEPARATOR)
}

/// The base entity name of a rendered series.
pub fn base_series_name(series_name: &str) -> &str {
    series_name
        .split(SERIES_NAME_SEPARATOR)
        .next()
        .unwrap_or(series_name)
}

/// Tracks which well, if any, is visually isolated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WellSelection {
    selected: Option<String>,
}

impl WellSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Handle a click on a rendered series. Toggles isolation when the
    /// base name is a known well; clicks on collector or decoration
    /// series are ignored. Returns true when the selection changed.
    pub fn click(&mut self, series_name: &str, wells: &Wells) -> bool {
        let base = base_series_name(series_name);
        if base.is_empty() || !wells.contains_key(base) {
            return false;
        }

        if self.selected.as_deref() == Some(base) {
            self.selected = None;
        } else {
            self.selected = Some(base.to_string());
        }
        true
    }

    /// Handle a double-click anywhere: clear the isolation.
    pub fn double_click(&mut self) {
        self.selected = None;
    }
}
