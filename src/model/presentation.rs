//! Presentation root model.

use super::slide::{Slide, SlideLayout};
use super::units::SlideSize;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Core document properties written to `docProps/core.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// First slide ID PowerPoint accepts in `p:sldIdLst`.
const FIRST_SLIDE_ID: u32 = 256;

/// A presentation: canvas size, metadata and an ordered slide collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub slide_size: SlideSize,
    #[serde(default)]
    pub metadata: Metadata,
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create a blank presentation with the standard 4:3 canvas.
    pub fn new() -> Self {
        Self {
            slide_size: SlideSize::STANDARD,
            metadata: Metadata::default(),
            slides: Vec::new(),
        }
    }

    pub fn slide_size(&self) -> SlideSize {
        self.slide_size
    }

    pub fn set_slide_size(&mut self, size: SlideSize) {
        self.slide_size = size;
    }

    /// Append a new slide based on `layout` and return it.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut Slide {
        let id = self
            .slides
            .iter()
            .map(|s| s.id + 1)
            .max()
            .unwrap_or(FIRST_SLIDE_ID);
        log::debug!("adding slide {} with layout '{}'", id, layout.name());
        self.slides.push(Slide::new(id, layout));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get a slide by position.
    pub fn slide(&self, index: usize) -> Result<&Slide> {
        self.slides.get(index).ok_or(Error::SlideIndex(index))
    }

    pub fn slide_mut(&mut self, index: usize) -> Result<&mut Slide> {
        self.slides.get_mut(index).ok_or(Error::SlideIndex(index))
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Serialize the presentation to PPTX bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        crate::writer::PptxWriter::new().to_bytes(self)
    }

    /// Serialize the presentation to a file, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        crate::writer::PptxWriter::new().save(self, path)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_presentation() {
        let prs = Presentation::new();
        assert_eq!(prs.slide_size(), SlideSize::STANDARD);
        assert_eq!(prs.slide_count(), 0);
    }

    #[test]
    fn test_slide_ids_increase() {
        let mut prs = Presentation::new();
        prs.add_slide(SlideLayout::TitleSlide);
        prs.add_slide(SlideLayout::TitleAndContent);
        assert_eq!(prs.slide(0).unwrap().id, 256);
        assert_eq!(prs.slide(1).unwrap().id, 257);
    }

    #[test]
    fn test_slide_index_out_of_range() {
        let prs = Presentation::new();
        assert!(matches!(prs.slide(3), Err(Error::SlideIndex(3))));
    }
}
