//! Article content.

use anyhow::Context;
use std::path::Path;

/// A plain-text article: a title and a sequence of paragraphs.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Article {
    /// Parse an article from plain text.
    ///
    /// The first non-empty line is the title; blank lines separate
    /// paragraphs. Hard-wrapped source lines within a paragraph are joined
    /// with single spaces, so the surface can re-wrap to the content width.
    pub fn from_text(text: &str) -> Self {
        let mut lines = text.lines().map(str::trim);
        let title = lines
            .by_ref()
            .find(|line| !line.is_empty())
            .unwrap_or("Untitled")
            .to_string();

        let mut paragraphs = Vec::new();
        let mut current = String::new();
        for line in lines {
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current);
        }

        Self { title, paragraphs }
    }

    /// Load an article from a plain-text file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading article {}", path.display()))?;
        Ok(Self::from_text(&text))
    }

    /// Built-in article shown when no file is given.
    pub fn sample() -> Self {
        Self::from_text(SAMPLE_TEXT)
    }
}

const SAMPLE_TEXT: &str = "\
On Reading in a Terminal

Long-form text survives almost any rendering surface, and a grid of \
monospaced cells is no exception. What decides whether a page is pleasant \
to read is rarely the glyphs themselves: it is the measure of the line, \
the contrast between ink and paper, and the room each paragraph is given \
to breathe.

Typographers settled most of these questions long before screens existed. \
A comfortable line carries between forty-five and seventy-five characters; \
anything wider forces the eye to hunt for the start of the next line, \
anything narrower chops sentences into confetti. The reader below this \
panel respects that advice when you narrow the content column.

Color is the second lever. High contrast keeps text legible in daylight, \
while a dimmer ink on a dark ground is kinder to late-night reading. None \
of these choices is universally right, which is exactly why they belong in \
a settings panel instead of a stylesheet cast in stone.

Spacing does the quiet work. An extra blank row between lines slows the \
page down; a wider gap between paragraphs gives each thought its own \
paddock. Try the size options on the left and watch the rhythm of this \
very page change.

Everything you adjust here takes effect only when you apply it. Until \
then the panel keeps a private draft, so you can experiment freely and \
walk away by clicking anywhere on the page.";
