//! Mouse input handling for the reader.
//!
//! Presses are resolved against the layout cached from the most recent
//! draw. The toggle affordance owns the open/close transition for presses
//! on it; the outside-press dismissal below never fires for the toggle
//! region, so a single gesture cannot close and reopen the panel.

use super::layout::PanelHit;
use crate::app::Reader;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

impl Reader {
    /// Handle one mouse event.
    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) {
        match mouse_event.kind {
            MouseEventKind::ScrollUp => {
                if !self.panel.is_open() {
                    self.scroll_up(self.config.scroll_step);
                }
            }
            MouseEventKind::ScrollDown => {
                if !self.panel.is_open() {
                    self.scroll_down(self.config.scroll_step);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_press(mouse_event.column, mouse_event.row);
            }
            _ => {}
        }
    }

    fn handle_press(&mut self, column: u16, row: u16) {
        let hit = self.layout().hit_test(column, row);
        tracing::debug!(column, row, ?hit, "mouse press");

        if hit == PanelHit::Toggle {
            self.toggle_panel();
            return;
        }
        if !self.panel.is_open() {
            return;
        }

        match hit {
            PanelHit::Option(field, index) => {
                let option = field.options()[index];
                self.panel.select_field(field);
                self.panel.set_field(field, option);
            }
            PanelHit::Apply => self.apply_draft(),
            PanelHit::Reset => self.reset_settings(),
            PanelHit::Outside => self.panel.close(),
            PanelHit::Panel | PanelHit::Toggle => {}
        }
    }
}
