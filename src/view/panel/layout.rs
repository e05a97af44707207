//! Hit-test layout for the panel and its toggle affordance.
//!
//! Rebuilt on every draw and cached by the reader; mouse handling resolves
//! coordinates against the most recent frame.

use crate::params::SettingsField;
use ratatui::layout::{Position, Rect};

/// Interactive regions recorded while rendering a frame.
#[derive(Debug, Clone, Default)]
pub struct PanelLayout {
    /// The toggle affordance, always present
    pub toggle_area: Rect,
    /// The panel region, present while the panel is open
    pub panel_area: Option<Rect>,
    pub rows: Vec<FieldRow>,
    pub reset_area: Option<Rect>,
    pub apply_area: Option<Rect>,
}

/// Option chip regions for one field row.
#[derive(Debug, Clone)]
pub struct FieldRow {
    pub field: SettingsField,
    /// One rect per option, parallel to `field.options()`
    pub options: Vec<Rect>,
}

/// What a mouse press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHit {
    Toggle,
    Option(SettingsField, usize),
    Reset,
    Apply,
    /// Inside the panel, not on an interactive region
    Panel,
    /// Outside both the panel and the toggle
    Outside,
}

impl PanelLayout {
    /// Classify a screen position.
    ///
    /// The toggle region is checked first: it owns its own open/close
    /// transition and is never treated as "outside" the panel.
    pub fn hit_test(&self, column: u16, row: u16) -> PanelHit {
        let pos = Position::new(column, row);
        if self.toggle_area.contains(pos) {
            return PanelHit::Toggle;
        }

        let Some(panel_area) = self.panel_area else {
            return PanelHit::Outside;
        };
        if !panel_area.contains(pos) {
            return PanelHit::Outside;
        }

        for field_row in &self.rows {
            for (index, rect) in field_row.options.iter().enumerate() {
                if rect.contains(pos) {
                    return PanelHit::Option(field_row.field, index);
                }
            }
        }
        if self.reset_area.is_some_and(|r| r.contains(pos)) {
            return PanelHit::Reset;
        }
        if self.apply_area.is_some_and(|r| r.contains(pos)) {
            return PanelHit::Apply;
        }
        PanelHit::Panel
    }
}
