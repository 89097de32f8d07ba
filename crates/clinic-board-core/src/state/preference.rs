//! Display preference: the dark-mode flag.

use std::sync::mpsc::Receiver;

use super::{ChangeEvent, Notifier, StateResult};
use crate::db::Database;
use crate::presentation::{PresentationContext, DARK_MARKER};

/// Storage key for the dark-mode flag (JSON boolean).
pub const DARK_MODE_KEY: &str = "healthcare_darkMode";

/// Dark-mode preference.
///
/// After every toggle the stored flag and the root [`DARK_MARKER`] agree.
#[derive(Debug, Default)]
pub struct PreferenceState {
    is_dark_mode: bool,
    notifier: Notifier,
}

impl PreferenceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        self.notifier.subscribe()
    }

    /// Load the flag at startup and apply it.
    ///
    /// Uses the stored flag when there is one, else the system's color
    /// scheme (`None` when the host can't tell, which counts as light).
    /// A stored value that isn't a JSON boolean is an error.
    pub fn initialize_dark_mode(
        &mut self,
        db: &Database,
        ctx: &mut PresentationContext,
        system_prefers_dark: Option<bool>,
    ) -> StateResult<bool> {
        self.is_dark_mode = match db.get_json::<bool>(DARK_MODE_KEY)? {
            Some(saved) => saved,
            None => {
                tracing::debug!(?system_prefers_dark, "no saved dark mode, using system");
                system_prefers_dark.unwrap_or(false)
            }
        };
        self.apply_dark_mode(ctx);
        tracing::info!(is_dark_mode = self.is_dark_mode, "dark mode initialized");
        Ok(self.is_dark_mode)
    }

    /// Flip the flag, persist it and re-apply. Returns the new value.
    pub fn toggle_dark_mode(
        &mut self,
        db: &Database,
        ctx: &mut PresentationContext,
    ) -> StateResult<bool> {
        let next = !self.is_dark_mode;
        db.set_json(DARK_MODE_KEY, &next)?;

        self.is_dark_mode = next;
        self.apply_dark_mode(ctx);
        tracing::info!(is_dark_mode = next, "dark mode toggled");
        Ok(next)
    }

    /// Return to light mode and clear the marker. Storage is left alone.
    pub fn reset(&mut self, ctx: &mut PresentationContext) {
        self.is_dark_mode = false;
        self.apply_dark_mode(ctx);
    }

    fn apply_dark_mode(&mut self, ctx: &mut PresentationContext) {
        if self.is_dark_mode {
            ctx.add_marker(DARK_MARKER);
        } else {
            ctx.remove_marker(DARK_MARKER);
        }
        self.notifier.notify(ChangeEvent::DarkModeChanged {
            is_dark_mode: self.is_dark_mode,
        });
    }
}
