//! Article appearance options.
//!
//! Every settings field draws its value from a fixed list of options.
//! Option values are plain strings; `view::surface` interprets them as
//! concrete style parameters when the article is rendered.

/// One selectable value for a settings field.
///
/// Options are immutable and enumerated: a settings field is only ever one
/// of the options from its list, never an arbitrary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOption {
    /// Display label shown in the panel
    pub name: &'static str,
    /// Applied value, interpreted by the surface style mapping
    pub value: &'static str,
    /// Optional glyph rendered in the option's own color (color fields)
    pub swatch: Option<&'static str>,
}

impl StyleOption {
    const fn new(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            value,
            swatch: None,
        }
    }

    const fn color(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            value,
            swatch: Some("■"),
        }
    }
}

pub const FONT_FAMILY_OPTIONS: &[StyleOption] = &[
    StyleOption::new("Regular", "none"),
    StyleOption::new("Bold", "bold"),
    StyleOption::new("Italic", "italic"),
    StyleOption::new("Dim", "dim"),
    StyleOption::new("Bold Italic", "bold,italic"),
];

pub const FONT_SIZE_OPTIONS: &[StyleOption] = &[
    StyleOption::new("S", "small"),
    StyleOption::new("M", "medium"),
    StyleOption::new("L", "large"),
];

pub const FONT_COLORS: &[StyleOption] = &[
    StyleOption::color("Default", "reset"),
    StyleOption::color("White", "#FFFFFF"),
    StyleOption::color("Gray", "#C4C4C4"),
    StyleOption::color("Amber", "#FCA311"),
    StyleOption::color("Pink", "#FD24AF"),
    StyleOption::color("Cyan", "#38DEF5"),
];

pub const BACKGROUND_COLORS: &[StyleOption] = &[
    StyleOption::color("Default", "reset"),
    StyleOption::color("Black", "#000000"),
    StyleOption::color("Slate", "#1B2A41"),
    StyleOption::color("Forest", "#14281D"),
    StyleOption::color("Plum", "#2B1B2C"),
];

pub const CONTENT_WIDTH_OPTIONS: &[StyleOption] = &[
    StyleOption::new("Wide", "90"),
    StyleOption::new("Medium", "70"),
    StyleOption::new("Narrow", "50"),
];

/// The five appearance settings driving the article surface.
///
/// Plain value type: a change always produces a new `ArticleSettings`,
/// untouched fields keep their option identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleSettings {
    pub font_family: StyleOption,
    pub font_size: StyleOption,
    pub font_color: StyleOption,
    pub background_color: StyleOption,
    pub content_width: StyleOption,
}

impl Default for ArticleSettings {
    fn default() -> Self {
        Self {
            font_family: FONT_FAMILY_OPTIONS[0],
            font_size: FONT_SIZE_OPTIONS[0],
            font_color: FONT_COLORS[0],
            background_color: BACKGROUND_COLORS[0],
            content_width: CONTENT_WIDTH_OPTIONS[0],
        }
    }
}

/// Names a settings field, with accessors for its option list and for
/// reading/replacing that field on an `ArticleSettings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl SettingsField {
    /// All fields, in panel render order.
    pub const ALL: [SettingsField; 5] = [
        SettingsField::FontFamily,
        SettingsField::FontSize,
        SettingsField::FontColor,
        SettingsField::BackgroundColor,
        SettingsField::ContentWidth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsField::FontFamily => "Text face",
            SettingsField::FontSize => "Text size",
            SettingsField::FontColor => "Text color",
            SettingsField::BackgroundColor => "Background",
            SettingsField::ContentWidth => "Content width",
        }
    }

    /// The fixed option list for this field.
    pub fn options(self) -> &'static [StyleOption] {
        match self {
            SettingsField::FontFamily => FONT_FAMILY_OPTIONS,
            SettingsField::FontSize => FONT_SIZE_OPTIONS,
            SettingsField::FontColor => FONT_COLORS,
            SettingsField::BackgroundColor => BACKGROUND_COLORS,
            SettingsField::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    pub fn get(self, settings: &ArticleSettings) -> StyleOption {
        match self {
            SettingsField::FontFamily => settings.font_family,
            SettingsField::FontSize => settings.font_size,
            SettingsField::FontColor => settings.font_color,
            SettingsField::BackgroundColor => settings.background_color,
            SettingsField::ContentWidth => settings.content_width,
        }
    }

    /// Replace exactly this field, leaving all other fields untouched.
    pub fn set(self, settings: &mut ArticleSettings, option: StyleOption) {
        match self {
            SettingsField::FontFamily => settings.font_family = option,
            SettingsField::FontSize => settings.font_size = option,
            SettingsField::FontColor => settings.font_color = option,
            SettingsField::BackgroundColor => settings.background_color = option,
            SettingsField::ContentWidth => settings.content_width = option,
        }
    }

    /// Position of this field in `ALL`.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|f| *f == self)
            .expect("field is in ALL")
    }
}
