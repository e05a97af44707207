//! Committed article settings.
//!
//! The store holds the settings currently driving the article surface.
//! All operations are total; callers only ever pass settings built from the
//! enumerated option lists.

use crate::params::ArticleSettings;

#[derive(Debug, Default)]
pub struct SettingsStore {
    current: ArticleSettings,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed settings.
    pub fn current(&self) -> ArticleSettings {
        self.current
    }

    /// Replace the committed settings unconditionally.
    pub fn apply(&mut self, new: ArticleSettings) {
        tracing::debug!(?new, "apply settings");
        self.current = new;
    }

    /// Restore the committed settings to the defaults.
    pub fn reset(&mut self) {
        tracing::debug!("reset settings");
        self.current = ArticleSettings::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{SettingsField, CONTENT_WIDTH_OPTIONS, FONT_SIZE_OPTIONS};

    #[test]
    fn test_initial_state_is_default() {
        let store = SettingsStore::new();
        assert_eq!(store.current(), ArticleSettings::default());
    }

    #[test]
    fn test_apply_round_trip() {
        let mut store = SettingsStore::new();
        let mut settings = ArticleSettings::default();
        SettingsField::FontSize.set(&mut settings, FONT_SIZE_OPTIONS[2]);
        SettingsField::ContentWidth.set(&mut settings, CONTENT_WIDTH_OPTIONS[1]);

        store.apply(settings);
        assert_eq!(store.current(), settings);
    }

    #[test]
    fn test_reset_returns_defaults_regardless_of_prior_state() {
        let mut store = SettingsStore::new();
        let mut settings = ArticleSettings::default();
        SettingsField::FontSize.set(&mut settings, FONT_SIZE_OPTIONS[1]);
        store.apply(settings);

        store.reset();
        assert_eq!(store.current(), ArticleSettings::default());
    }
}
