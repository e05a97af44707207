//! The article surface.
//!
//! The rendered page is a pure function of the article and the committed
//! settings: five style parameters (text face, size, text color, background
//! color, content width) are derived one-to-one from the settings' option
//! values and applied to the article column, so all content inherits them.

use crate::article::Article;
use crate::params::ArticleSettings;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Style parameters derived from the committed settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceStyle {
    /// Face modifiers plus text color
    pub text: Style,
    pub background: Color,
    /// Article column width as a percentage of the terminal width
    pub width_percent: u16,
    /// Blank rows between wrapped lines of one paragraph
    pub line_spacing: u16,
    /// Blank rows before each paragraph
    pub paragraph_spacing: u16,
}

impl SurfaceStyle {
    pub fn from_settings(settings: &ArticleSettings) -> Self {
        let text = Style::default()
            .fg(parse_color(settings.font_color.value))
            .add_modifier(face_modifier(settings.font_family.value));
        let (line_spacing, paragraph_spacing) = spacing(settings.font_size.value);

        Self {
            text,
            background: parse_color(settings.background_color.value),
            width_percent: settings.content_width.value.parse().unwrap_or(100),
            line_spacing,
            paragraph_spacing,
        }
    }

    /// Width of the article column within `total` terminal columns.
    pub fn column_width(&self, total: u16) -> u16 {
        let width = (u32::from(total) * u32::from(self.width_percent) / 100) as u16;
        width.clamp(20.min(total), total)
    }
}

/// Parse an option's color value ("reset", a name, or "#RRGGBB").
///
/// Values come from the enumerated option lists, so the fallback is
/// unreachable under correct usage.
pub fn parse_color(value: &str) -> Color {
    value.parse().unwrap_or(Color::Reset)
}

fn face_modifier(value: &str) -> Modifier {
    let mut modifier = Modifier::empty();
    for part in value.split(',') {
        modifier |= match part {
            "bold" => Modifier::BOLD,
            "italic" => Modifier::ITALIC,
            "dim" => Modifier::DIM,
            _ => Modifier::empty(),
        };
    }
    modifier
}

/// (line spacing, paragraph spacing) for a size option value.
fn spacing(value: &str) -> (u16, u16) {
    match value {
        "medium" => (1, 2),
        "large" => (2, 3),
        _ => (0, 1),
    }
}

/// Greedy word wrap honoring unicode display width.
///
/// A single word wider than `width` is kept whole on its own line.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if line_width == 0 {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Render the article into `area` using the committed settings.
///
/// Returns the total number of content rows so the caller can clamp its
/// scroll offset.
pub fn render_article(
    frame: &mut Frame,
    area: Rect,
    article: &Article,
    settings: &ArticleSettings,
    scroll: u16,
) -> u16 {
    let style = SurfaceStyle::from_settings(settings);

    frame.render_widget(
        Block::default().style(Style::default().bg(style.background)),
        area,
    );

    let column_width = style.column_width(area.width);
    let column = Rect::new(
        area.x + (area.width.saturating_sub(column_width)) / 2,
        area.y,
        column_width,
        area.height,
    );

    let mut lines: Vec<Line> = Vec::new();
    let title_style = style.text.add_modifier(Modifier::BOLD);
    for row in wrap(&article.title, column_width) {
        lines.push(Line::styled(row, title_style).centered());
    }

    for paragraph in &article.paragraphs {
        for _ in 0..style.paragraph_spacing {
            lines.push(Line::default());
        }
        let mut first = true;
        for row in wrap(paragraph, column_width) {
            if !first {
                for _ in 0..style.line_spacing {
                    lines.push(Line::default());
                }
            }
            first = false;
            lines.push(Line::styled(row, style.text));
        }
    }

    let total_rows = lines.len() as u16;
    frame.render_widget(Paragraph::new(Text::from(lines)).scroll((scroll, 0)), column);
    total_rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{SettingsField, BACKGROUND_COLORS, FONT_COLORS, FONT_SIZE_OPTIONS};

    #[test]
    fn test_parse_color_hex_and_named() {
        assert_eq!(parse_color("#FFFFFF"), Color::Rgb(255, 255, 255));
        assert_eq!(parse_color("reset"), Color::Reset);
        assert_eq!(parse_color("not a color"), Color::Reset);
    }

    #[test]
    fn test_style_derives_one_parameter_per_field() {
        let mut settings = ArticleSettings::default();
        SettingsField::FontColor.set(&mut settings, FONT_COLORS[1]);
        SettingsField::BackgroundColor.set(&mut settings, BACKGROUND_COLORS[1]);
        SettingsField::FontSize.set(&mut settings, FONT_SIZE_OPTIONS[2]);

        let style = SurfaceStyle::from_settings(&settings);
        assert_eq!(style.text.fg, Some(Color::Rgb(255, 255, 255)));
        assert_eq!(style.background, Color::Rgb(0, 0, 0));
        assert_eq!((style.line_spacing, style.paragraph_spacing), (2, 3));
    }

    #[test]
    fn test_column_width_percentages() {
        let mut settings = ArticleSettings::default();
        let style = SurfaceStyle::from_settings(&settings);
        assert_eq!(style.width_percent, 90);
        assert_eq!(style.column_width(100), 90);

        SettingsField::ContentWidth.set(&mut settings, SettingsField::ContentWidth.options()[2]);
        let style = SurfaceStyle::from_settings(&settings);
        assert_eq!(style.column_width(100), 50);
        // Never narrower than the floor, never wider than the terminal
        assert_eq!(style.column_width(30), 20);
        assert_eq!(style.column_width(10), 10);
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| UnicodeWidthStr::width(l.as_str()) <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_keeps_overlong_word_whole() {
        let lines = wrap("a incomprehensibilities b", 5);
        assert_eq!(lines, vec!["a", "incomprehensibilities", "b"]);
    }

    #[test]
    fn test_wrap_counts_display_width() {
        // CJK characters occupy two cells each
        let lines = wrap("永永 永永", 4);
        assert_eq!(lines, vec!["永永", "永永"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }
}
