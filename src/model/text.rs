//! Text frames, paragraphs and runs.

use super::color::RgbColor;
use serde::{Deserialize, Serialize};

/// Character formatting shared by a run, or the default run properties of a
/// paragraph. Unset fields inherit from the layout/master.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    /// Font size in hundredths of a point (e.g., 2000 = 20pt)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Solid fill color of the glyphs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<RgbColor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl Font {
    /// Create an empty (fully inherited) font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size in whole points, clamped to
    /// [`MIN_FONT_SIZE_PT`]..=[`MAX_FONT_SIZE_PT`].
    pub fn set_size_pt(&mut self, points: u32) {
        self.size = Some(points.clamp(MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT) * 100);
    }

    /// Size in points, if set.
    pub fn size_pt(&self) -> Option<f64> {
        self.size.map(|s| s as f64 / 100.0)
    }

    /// Set a solid text color.
    pub fn set_color(&mut self, color: RgbColor) {
        self.color = Some(color);
    }

    /// Check whether every property is inherited.
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.color.is_none() && self.bold.is_none() && self.italic.is_none()
    }
}

/// A run of text sharing one set of character properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "Font::is_empty")]
    pub font: Font,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Font::default(),
        }
    }
}

/// A paragraph within a text frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Outline (indent) level, 0-8
    #[serde(default)]
    pub level: u8,

    /// Default run properties for the paragraph (`a:pPr/a:defRPr`)
    #[serde(default, skip_serializing_if = "Font::is_empty")]
    pub font: Font,

    pub runs: Vec<TextRun>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding a single run. Empty text yields no run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut para = Self::new();
        para.set_text(text);
        para
    }

    /// Replace the paragraph content with a single run.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.runs.clear();
        if !text.is_empty() {
            self.runs.push(TextRun::new(text));
        }
    }

    /// Append a run and return it for formatting.
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut TextRun {
        self.runs.push(TextRun::new(text));
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Color a run renders with: its own color, else the paragraph default.
    pub fn effective_color(&self, run: &TextRun) -> Option<RgbColor> {
        run.font.color.or(self.font.color)
    }

    /// Size a run renders with, in hundredths of a point.
    pub fn effective_size(&self, run: &TextRun) -> Option<u32> {
        run.font.size.or(self.font.size)
    }
}

/// Smallest font size a `sz` attribute can carry, in points.
pub const MIN_FONT_SIZE_PT: u32 = 1;

/// Largest font size a `sz` attribute can carry, in points.
pub const MAX_FONT_SIZE_PT: u32 = 4000;

/// The text body of a shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every paragraph.
    pub fn clear(&mut self) {
        self.paragraphs.clear();
    }

    /// Append an empty paragraph and return it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Replace the content with one paragraph per `'\n'`-separated line.
    /// Empty text leaves the frame empty.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(Paragraph::with_text).collect()
        };
    }

    /// Paragraph texts joined with `'\n'`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Iterate over every run in every paragraph.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.paragraphs.iter().flat_map(|p| p.runs.iter())
    }

    /// Iterate mutably over every run in every paragraph.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut TextRun> {
        self.paragraphs.iter_mut().flat_map(|p| p.runs.iter_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.runs.is_empty())
    }
}
