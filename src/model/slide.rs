//! Slides, layouts, backgrounds and notes pages.

use super::color::RgbColor;
use super::shape::{Placeholder, PlaceholderKind, Shape};
use super::text::TextFrame;
use serde::{Deserialize, Serialize};

/// Slide layouts available from the built-in slide master.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    /// Centered title and subtitle
    TitleSlide,
    /// Title and a content placeholder
    #[default]
    TitleAndContent,
    /// Section title and description text
    SectionHeader,
    /// Title only
    TitleOnly,
    /// No placeholders
    Blank,
}

impl SlideLayout {
    /// All layouts, in master order.
    pub const ALL: [SlideLayout; 5] = [
        SlideLayout::TitleSlide,
        SlideLayout::TitleAndContent,
        SlideLayout::SectionHeader,
        SlideLayout::TitleOnly,
        SlideLayout::Blank,
    ];

    /// Position of the layout in the master's layout list.
    pub fn index(&self) -> usize {
        match self {
            SlideLayout::TitleSlide => 0,
            SlideLayout::TitleAndContent => 1,
            SlideLayout::SectionHeader => 2,
            SlideLayout::TitleOnly => 3,
            SlideLayout::Blank => 4,
        }
    }

    /// Look up a layout by its master position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Layout name as stored in `p:cSld/@name`.
    pub fn name(&self) -> &'static str {
        match self {
            SlideLayout::TitleSlide => "Title Slide",
            SlideLayout::TitleAndContent => "Title and Content",
            SlideLayout::SectionHeader => "Section Header",
            SlideLayout::TitleOnly => "Title Only",
            SlideLayout::Blank => "Blank",
        }
    }

    /// Look up a layout by its `p:cSld/@name`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.name() == name)
    }

    /// Package part name, e.g. "slideLayout2.xml".
    pub fn part_name(&self) -> String {
        format!("slideLayout{}.xml", self.index() + 1)
    }

    /// Placeholders a new slide receives from this layout, as
    /// (kind, idx, shape name).
    pub fn placeholders(&self) -> &'static [(PlaceholderKind, u32, &'static str)] {
        match self {
            SlideLayout::TitleSlide => &[
                (PlaceholderKind::CenterTitle, 0, "Title 1"),
                (PlaceholderKind::Subtitle, 1, "Subtitle 2"),
            ],
            SlideLayout::TitleAndContent => &[
                (PlaceholderKind::Title, 0, "Title 1"),
                (PlaceholderKind::Content, 1, "Content Placeholder 2"),
            ],
            SlideLayout::SectionHeader => &[
                (PlaceholderKind::Title, 0, "Title 1"),
                (PlaceholderKind::Body, 1, "Text Placeholder 2"),
            ],
            SlideLayout::TitleOnly => &[(PlaceholderKind::Title, 0, "Title 1")],
            SlideLayout::Blank => &[],
        }
    }
}

/// Slide background fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// Solid color fill
    Solid(RgbColor),
}

impl Background {
    /// Solid fill color.
    pub fn fill_color(&self) -> RgbColor {
        match self {
            Background::Solid(color) => *color,
        }
    }
}

/// The speaker-notes page of a slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesSlide {
    /// Text of the notes body placeholder
    pub text_frame: TextFrame,
}

impl NotesSlide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.text_frame.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text_frame.set_text(text);
    }
}

/// A single slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide ID from `p:sldId/@id` (256 and up)
    pub id: u32,
    pub layout: SlideLayout,
    pub shapes: Vec<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<NotesSlide>,
}

impl Slide {
    /// Create a slide with the placeholders of `layout`.
    pub fn new(id: u32, layout: SlideLayout) -> Self {
        // Shape id 1 belongs to the shape tree.
        let shapes = layout
            .placeholders()
            .iter()
            .zip(2u32..)
            .map(|(&(kind, idx, name), id)| {
                Shape::placeholder(id, name, Placeholder::new(kind, idx))
            })
            .collect();

        Self {
            id,
            layout,
            shapes,
            background: None,
            notes: None,
        }
    }

    /// The title placeholder, if the layout has one.
    pub fn title(&self) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.is_title())
    }

    pub fn title_mut(&mut self) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.is_title())
    }

    /// Title text, empty when there is no title placeholder.
    pub fn title_text(&self) -> String {
        self.title().map(Shape::text).unwrap_or_default()
    }

    /// Placeholder shape with the given `idx`.
    pub fn placeholder(&self, idx: u32) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|s| s.placeholder.is_some_and(|ph| ph.idx == idx))
    }

    pub fn placeholder_mut(&mut self, idx: u32) -> Option<&mut Shape> {
        self.shapes
            .iter_mut()
            .find(|s| s.placeholder.is_some_and(|ph| ph.idx == idx))
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Fill the slide background with a solid color.
    pub fn set_solid_background(&mut self, color: RgbColor) {
        self.background = Some(Background::Solid(color));
    }

    pub fn notes_slide(&self) -> Option<&NotesSlide> {
        self.notes.as_ref()
    }

    /// The notes page, created on first access.
    pub fn notes_slide_mut(&mut self) -> &mut NotesSlide {
        self.notes.get_or_insert_with(NotesSlide::new)
    }

    /// Notes text, empty when the slide has no notes page.
    pub fn notes_text(&self) -> String {
        self.notes.as_ref().map(NotesSlide::text).unwrap_or_default()
    }

    /// Force every run in every text-bearing shape to `color`.
    pub fn recolor_text(&mut self, color: RgbColor) {
        for frame in self.shapes.iter_mut().filter_map(|s| s.text_frame.as_mut()) {
            for run in frame.runs_mut() {
                run.font.set_color(color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_index_round_trip() {
        for layout in SlideLayout::ALL {
            assert_eq!(SlideLayout::from_index(layout.index()), Some(layout));
            assert_eq!(SlideLayout::from_name(layout.name()), Some(layout));
        }
        assert_eq!(SlideLayout::from_index(11), None);
        assert_eq!(SlideLayout::default(), SlideLayout::TitleAndContent);
        assert_eq!(SlideLayout::TitleAndContent.part_name(), "slideLayout2.xml");
    }

    #[test]
    fn test_new_slide_gets_layout_placeholders() {
        let slide = Slide::new(256, SlideLayout::TitleAndContent);
        assert_eq!(slide.shapes.len(), 2);
        assert_eq!(slide.shapes[0].id, 2);
        assert!(slide.title().is_some());
        assert_eq!(
            slide.placeholder(1).and_then(|s| s.placeholder).map(|ph| ph.kind),
            Some(PlaceholderKind::Content)
        );

        let blank = Slide::new(257, SlideLayout::Blank);
        assert!(blank.title().is_none());
        assert!(blank.placeholder(1).is_none());
    }

    #[test]
    fn test_recolor_text() {
        let mut slide = Slide::new(256, SlideLayout::TitleSlide);
        slide.title_mut().unwrap().set_text("Title");
        slide.placeholder_mut(1).unwrap().set_text("line one\nline two");
        slide.recolor_text(RgbColor::WHITE);

        for shape in &slide.shapes {
            let frame = shape.text_frame.as_ref().unwrap();
            assert!(frame.runs().all(|r| r.font.color == Some(RgbColor::WHITE)));
        }
    }

    #[test]
    fn test_notes_created_lazily() {
        let mut slide = Slide::new(256, SlideLayout::TitleOnly);
        assert!(slide.notes_slide().is_none());
        assert_eq!(slide.notes_text(), "");
        slide.notes_slide_mut().set_text("Speaker notes");
        assert_eq!(slide.notes_text(), "Speaker notes");
    }
}
