//! Root presentation context mirrored by the host UI.
//!
//! Holds what the host would otherwise set on its document root: a set of
//! style markers (the root "class list") and the window title. State
//! containers write here; the host reads it back after each call.

use std::collections::BTreeSet;

use clinic_board_nav::Route;

/// Marker set on the root while dark mode is active.
pub const DARK_MARKER: &str = "dark";

/// Markers and title applied to the root of the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresentationContext {
    markers: BTreeSet<String>,
    title: String,
}

impl PresentationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker. Adding twice is a no-op.
    pub fn add_marker(&mut self, marker: &str) {
        if !self.markers.contains(marker) {
            self.markers.insert(marker.to_string());
        }
    }

    /// Remove a marker. Removing an absent marker is a no-op.
    pub fn remove_marker(&mut self, marker: &str) {
        self.markers.remove(marker);
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    /// Markers in sorted order.
    pub fn markers(&self) -> Vec<String> {
        self.markers.iter().cloned().collect()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title for a route after navigation.
    pub fn apply_route(&mut self, route: &Route, suffix: &str) {
        self.set_title(route.document_title(suffix));
        tracing::debug!(path = route.path, title = %self.title, "navigated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_board_nav::{resolve, DEFAULT_TITLE_SUFFIX};

    #[test]
    fn test_markers_are_a_set() {
        let mut ctx = PresentationContext::new();
        ctx.add_marker(DARK_MARKER);
        ctx.add_marker(DARK_MARKER);
        assert_eq!(ctx.markers(), vec!["dark".to_string()]);

        ctx.remove_marker(DARK_MARKER);
        ctx.remove_marker(DARK_MARKER);
        assert!(!ctx.has_marker(DARK_MARKER));
        assert!(ctx.markers().is_empty());
    }

    #[test]
    fn test_apply_route_sets_title() {
        let mut ctx = PresentationContext::new();
        ctx.apply_route(resolve("/daftar-pasien").unwrap(), DEFAULT_TITLE_SUFFIX);
        assert_eq!(ctx.title(), "Daftar Pasien | Healthcare App");
    }
}
