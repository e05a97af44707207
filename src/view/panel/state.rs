//! Settings panel state.
//!
//! Tracks visibility, the draft settings, and keyboard focus. Visibility
//! and the draft are independent axes: closing the panel never touches the
//! draft, and opening reseeds it from the committed settings.

use crate::params::{ArticleSettings, SettingsField, StyleOption};

#[derive(Debug)]
pub struct PanelState {
    visible: bool,
    /// Working copy of the settings, edited locally until applied
    draft: ArticleSettings,
    /// Keyboard-focused field row, an index into `SettingsField::ALL`
    pub selected_field: usize,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            visible: false,
            draft: ArticleSettings::default(),
            selected_field: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn draft(&self) -> ArticleSettings {
        self.draft
    }

    /// Open the panel, seeding the draft from the committed settings.
    pub fn open(&mut self, committed: ArticleSettings) {
        self.visible = true;
        self.draft = committed;
        self.selected_field = 0;
    }

    /// Close the panel. The draft is left as-is.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Toggle open/closed.
    pub fn toggle(&mut self, committed: ArticleSettings) {
        if self.visible {
            self.close();
        } else {
            self.open(committed);
        }
    }

    /// Replace exactly one field of the draft.
    pub fn set_field(&mut self, field: SettingsField, option: StyleOption) {
        field.set(&mut self.draft, option);
    }

    /// Set the draft back to the default settings.
    pub fn reset_draft(&mut self) {
        self.draft = ArticleSettings::default();
    }

    /// Move keyboard focus to `field`'s row.
    pub fn select_field(&mut self, field: SettingsField) {
        self.selected_field = field.index();
    }

    pub fn select_prev_field(&mut self) {
        if self.selected_field > 0 {
            self.selected_field -= 1;
        }
    }

    pub fn select_next_field(&mut self) {
        if self.selected_field + 1 < SettingsField::ALL.len() {
            self.selected_field += 1;
        }
    }

    /// Cycle the focused row's option by `delta`, wrapping at both ends.
    pub fn cycle_selected(&mut self, delta: isize) {
        let field = SettingsField::ALL[self.selected_field];
        let options = field.options();
        let current = field.get(&self.draft);
        let index = options.iter().position(|o| *o == current).unwrap_or(0);
        let next = (index as isize + delta).rem_euclid(options.len() as isize) as usize;
        self.set_field(field, options[next]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CONTENT_WIDTH_OPTIONS, FONT_SIZE_OPTIONS};

    #[test]
    fn test_initially_closed() {
        let state = PanelState::new();
        assert!(!state.is_open());
    }

    #[test]
    fn test_open_seeds_draft_from_committed() {
        let mut committed = ArticleSettings::default();
        SettingsField::FontSize.set(&mut committed, FONT_SIZE_OPTIONS[2]);

        let mut state = PanelState::new();
        state.open(committed);
        assert!(state.is_open());
        assert_eq!(state.draft(), committed);
    }

    #[test]
    fn test_edit_changes_only_one_field() {
        let mut state = PanelState::new();
        state.open(ArticleSettings::default());
        let before = state.draft();

        state.set_field(SettingsField::ContentWidth, CONTENT_WIDTH_OPTIONS[2]);
        let after = state.draft();

        assert_eq!(after.content_width, CONTENT_WIDTH_OPTIONS[2]);
        for field in SettingsField::ALL {
            if field != SettingsField::ContentWidth {
                assert_eq!(field.get(&after), field.get(&before));
            }
        }
    }

    #[test]
    fn test_close_keeps_draft_and_reopen_reseeds() {
        let mut state = PanelState::new();
        state.open(ArticleSettings::default());
        state.set_field(SettingsField::FontSize, FONT_SIZE_OPTIONS[2]);
        let edited = state.draft();

        state.close();
        assert!(!state.is_open());
        assert_eq!(state.draft(), edited);

        // Reopening reseeds from whatever is committed at that moment
        let committed = ArticleSettings::default();
        state.open(committed);
        assert_eq!(state.draft(), committed);
    }

    #[test]
    fn test_toggle() {
        let mut state = PanelState::new();
        let committed = ArticleSettings::default();
        state.toggle(committed);
        assert!(state.is_open());
        state.toggle(committed);
        assert!(!state.is_open());
    }

    #[test]
    fn test_reset_draft() {
        let mut state = PanelState::new();
        state.open(ArticleSettings::default());
        state.set_field(SettingsField::FontSize, FONT_SIZE_OPTIONS[1]);

        state.reset_draft();
        assert_eq!(state.draft(), ArticleSettings::default());
        assert!(state.is_open());
    }

    #[test]
    fn test_cycle_wraps_both_directions() {
        let mut state = PanelState::new();
        state.open(ArticleSettings::default());
        state.select_field(SettingsField::FontSize);

        state.cycle_selected(-1);
        assert_eq!(state.draft().font_size, FONT_SIZE_OPTIONS[2]);
        state.cycle_selected(1);
        assert_eq!(state.draft().font_size, FONT_SIZE_OPTIONS[0]);
        state.cycle_selected(1);
        assert_eq!(state.draft().font_size, FONT_SIZE_OPTIONS[1]);
    }

    #[test]
    fn test_field_focus_navigation_is_clamped() {
        let mut state = PanelState::new();
        state.open(ArticleSettings::default());

        state.select_prev_field();
        assert_eq!(state.selected_field, 0);

        for _ in 0..10 {
            state.select_next_field();
        }
        assert_eq!(state.selected_field, SettingsField::ALL.len() - 1);
    }
}
