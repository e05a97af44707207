//! The reader application: event loop, keyboard handling, and drawing.

use crate::article::Article;
use crate::config::Config;
use crate::params::ArticleSettings;
use crate::store::SettingsStore;
use crate::view::panel::{PanelLayout, PanelState};
use crate::view::{panel, surface};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use std::io;

pub struct Reader {
    article: Article,
    pub(crate) config: Config,
    store: SettingsStore,
    pub(crate) panel: PanelState,
    /// Hit-test layout from the most recent draw
    layout: PanelLayout,
    scroll: u16,
    content_rows: u16,
    viewport_rows: u16,
}

impl Reader {
    pub fn new(article: Article, config: Config) -> Self {
        Self {
            article,
            config,
            store: SettingsStore::new(),
            panel: PanelState::new(),
            layout: PanelLayout::default(),
            scroll: 0,
            content_rows: 0,
            viewport_rows: 0,
        }
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw_frame(frame))?;

            let event = event::read()?;
            if !self.handle_event(event) {
                return Ok(());
            }
        }
    }

    /// Draw one frame and refresh the cached hit-test layout.
    pub fn draw_frame(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.viewport_rows = area.height;
        self.clamp_scroll();

        self.content_rows = surface::render_article(
            frame,
            area,
            &self.article,
            &self.store.current(),
            self.scroll,
        );
        self.layout = panel::render::render_panel(frame, area, &self.panel, self.config.panel_width);
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// The committed settings driving the article surface.
    pub fn committed(&self) -> ArticleSettings {
        self.store.current()
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel.is_open()
    }

    /// The panel's draft settings.
    pub fn draft(&self) -> ArticleSettings {
        self.panel.draft()
    }

    /// Dispatch one event. Returns false when the reader should exit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => {
                self.handle_mouse(mouse_event);
                true
            }
            _ => true,
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => return false,

            KeyEvent {
                code: KeyCode::Char('p'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => self.toggle_panel(),

            _ if self.panel.is_open() => self.handle_panel_key(key_event),
            _ => self.handle_article_key(key_event),
        }

        true
    }

    /// Keys consumed by the open panel. Nothing falls through to article
    /// scrolling while the panel is open.
    fn handle_panel_key(&mut self, key_event: KeyEvent) {
        match key_event {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => self.panel.close(),

            KeyEvent {
                code: KeyCode::Up, ..
            } => self.panel.select_prev_field(),

            KeyEvent {
                code: KeyCode::Down,
                ..
            } => self.panel.select_next_field(),

            KeyEvent {
                code: KeyCode::Left,
                ..
            } => self.panel.cycle_selected(-1),

            KeyEvent {
                code: KeyCode::Right,
                ..
            } => self.panel.cycle_selected(1),

            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => self.apply_draft(),

            KeyEvent {
                code: KeyCode::Char('r'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => self.reset_settings(),

            _ => {}
        }
    }

    fn handle_article_key(&mut self, key_event: KeyEvent) {
        let page = self.viewport_rows.saturating_sub(1).max(1);
        match key_event {
            KeyEvent {
                code: KeyCode::Up, ..
            } => self.scroll_up(1),

            KeyEvent {
                code: KeyCode::Down,
                ..
            } => self.scroll_down(1),

            KeyEvent {
                code: KeyCode::PageUp,
                ..
            } => self.scroll_up(page),

            KeyEvent {
                code: KeyCode::PageDown,
                ..
            } => self.scroll_down(page),

            KeyEvent {
                code: KeyCode::Home,
                ..
            } => self.scroll = 0,

            KeyEvent {
                code: KeyCode::End, ..
            } => self.scroll = self.max_scroll(),

            _ => {}
        }
    }

    pub(crate) fn toggle_panel(&mut self) {
        self.panel.toggle(self.store.current());
    }

    /// Commit the draft. Visibility is unchanged.
    pub(crate) fn apply_draft(&mut self) {
        self.store.apply(self.panel.draft());
    }

    /// Restore draft and committed settings to the defaults.
    ///
    /// The store receives both the reset signal and an apply of the
    /// defaults; callers of the store observe two transitions. Visibility
    /// is unchanged.
    pub(crate) fn reset_settings(&mut self) {
        self.panel.reset_draft();
        self.store.reset();
        self.store.apply(ArticleSettings::default());
    }

    pub(crate) fn scroll_up(&mut self, delta: u16) {
        self.scroll = self.scroll.saturating_sub(delta);
    }

    pub(crate) fn scroll_down(&mut self, delta: u16) {
        self.scroll = (self.scroll + delta).min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{SettingsField, FONT_SIZE_OPTIONS};

    fn reader() -> Reader {
        Reader::new(Article::sample(), Config::default())
    }

    #[test]
    fn test_toggle_seeds_draft_from_committed() {
        let mut reader = reader();
        let mut settings = ArticleSettings::default();
        SettingsField::FontSize.set(&mut settings, FONT_SIZE_OPTIONS[2]);
        reader.store.apply(settings);

        reader.toggle_panel();
        assert!(reader.is_panel_open());
        assert_eq!(reader.draft(), settings);
    }

    #[test]
    fn test_apply_commits_draft_and_keeps_panel_open() {
        let mut reader = reader();
        reader.toggle_panel();
        reader
            .panel
            .set_field(SettingsField::FontSize, FONT_SIZE_OPTIONS[2]);

        assert_eq!(reader.committed(), ArticleSettings::default());
        reader.apply_draft();
        assert_eq!(reader.committed().font_size, FONT_SIZE_OPTIONS[2]);
        assert!(reader.is_panel_open());
    }

    #[test]
    fn test_reset_restores_defaults_everywhere() {
        let mut reader = reader();
        reader.toggle_panel();
        reader
            .panel
            .set_field(SettingsField::FontSize, FONT_SIZE_OPTIONS[1]);
        reader.apply_draft();

        reader.reset_settings();
        assert_eq!(reader.committed(), ArticleSettings::default());
        assert_eq!(reader.draft(), ArticleSettings::default());
        assert!(reader.is_panel_open());
    }

    #[test]
    fn test_quit_key() {
        let mut reader = reader();
        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(!reader.handle_event(quit));
    }

    #[test]
    fn test_panel_consumes_navigation_keys() {
        let mut reader = reader();
        reader.toggle_panel();

        let down = Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        reader.handle_event(down);
        assert_eq!(reader.panel.selected_field, 1);
        // Scroll offset untouched while the panel is open
        assert_eq!(reader.scroll, 0);
    }

    #[test]
    fn test_arrow_keys_cycle_draft_options() {
        let mut reader = reader();
        reader.toggle_panel();
        reader.panel.select_field(SettingsField::FontSize);

        let right = Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        reader.handle_event(right);
        assert_eq!(reader.draft().font_size, FONT_SIZE_OPTIONS[1]);
        assert_eq!(reader.committed(), ArticleSettings::default());
    }

    #[test]
    fn test_escape_closes_without_committing() {
        let mut reader = reader();
        reader.toggle_panel();
        reader
            .panel
            .set_field(SettingsField::FontSize, FONT_SIZE_OPTIONS[2]);

        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        reader.handle_event(esc);
        assert!(!reader.is_panel_open());
        assert_eq!(reader.committed(), ArticleSettings::default());
    }
}
