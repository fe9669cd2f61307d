//! Shapes and placeholders.

use super::text::TextFrame;
use serde::{Deserialize, Serialize};

/// The role of a placeholder inherited from a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    /// Slide title
    Title,
    /// Centered title on a title slide
    CenterTitle,
    /// Subtitle on a title slide
    Subtitle,
    /// Text body
    Body,
    /// Generic content placeholder (`type` omitted in XML, i.e. "obj")
    Content,
    /// Slide thumbnail on a notes page
    SlideImage,
}

impl PlaceholderKind {
    /// Value of the `p:ph/@type` attribute, `None` for the implicit "obj".
    pub fn xml_type(&self) -> Option<&'static str> {
        match self {
            PlaceholderKind::Title => Some("title"),
            PlaceholderKind::CenterTitle => Some("ctrTitle"),
            PlaceholderKind::Subtitle => Some("subTitle"),
            PlaceholderKind::Body => Some("body"),
            PlaceholderKind::Content => None,
            PlaceholderKind::SlideImage => Some("sldImg"),
        }
    }

    /// Map a `p:ph/@type` attribute back to a kind.
    pub fn from_xml_type(value: Option<&str>) -> Self {
        match value {
            Some("title") => PlaceholderKind::Title,
            Some("ctrTitle") => PlaceholderKind::CenterTitle,
            Some("subTitle") => PlaceholderKind::Subtitle,
            Some("body") => PlaceholderKind::Body,
            Some("sldImg") => PlaceholderKind::SlideImage,
            _ => PlaceholderKind::Content,
        }
    }

    /// Check if this placeholder holds a slide title.
    pub fn is_title(&self) -> bool {
        matches!(self, PlaceholderKind::Title | PlaceholderKind::CenterTitle)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaceholderKind::Title => "title",
            PlaceholderKind::CenterTitle => "center title",
            PlaceholderKind::Subtitle => "subtitle",
            PlaceholderKind::Body => "body",
            PlaceholderKind::Content => "content",
            PlaceholderKind::SlideImage => "slide image",
        }
    }
}

/// A placeholder reference: kind plus layout index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    /// `p:ph/@idx`; 0 for the title placeholder
    pub idx: u32,
}

impl Placeholder {
    pub fn new(kind: PlaceholderKind, idx: u32) -> Self {
        Self { kind, idx }
    }
}

/// A shape on a slide or notes page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Shape ID, unique within its slide (1 is the shape tree itself)
    pub id: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Placeholder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_frame: Option<TextFrame>,
}

impl Shape {
    /// Create a placeholder shape with an empty text frame.
    pub fn placeholder(id: u32, name: impl Into<String>, placeholder: Placeholder) -> Self {
        Self {
            id,
            name: name.into(),
            placeholder: Some(placeholder),
            text_frame: Some(TextFrame::new()),
        }
    }

    pub fn has_text_frame(&self) -> bool {
        self.text_frame.is_some()
    }

    /// Check if this shape is the slide's title placeholder.
    pub fn is_title(&self) -> bool {
        self.placeholder.is_some_and(|ph| ph.kind.is_title())
    }

    /// Shape text, empty when the shape has no text frame.
    pub fn text(&self) -> String {
        self.text_frame
            .as_ref()
            .map(TextFrame::text)
            .unwrap_or_default()
    }

    /// Replace the shape text, creating a text frame if needed.
    pub fn set_text(&mut self, text: &str) {
        self.text_frame
            .get_or_insert_with(TextFrame::new)
            .set_text(text);
    }
}
