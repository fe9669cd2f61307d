//! # deckwright
//!
//! Builds PowerPoint (`.pptx`) decks from plain content records: slide
//! titles, bullet lists and speaker notes on a solid-colored widescreen canvas.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Build the built-in OIDC beta session deck and write it out
//! let path = deckwright::save_deck(&deckwright::DeckOptions::default())?;
//! println!("Saved as {}", path.display());
//! # Ok::<(), deckwright::Error>(())
//! ```
//!
//! ## Custom Content
//!
//! ```no_run
//! use deckwright::{build_presentation, DeckOptions, SlideContent, TitleContent};
//!
//! let title = TitleContent::new("Release Review", "Platform team");
//! let slides = vec![SlideContent::new(
//!     "Highlights",
//!     ["Faster builds", "Fewer secrets"],
//!     "Keep it short.",
//! )];
//! let prs = build_presentation(&title, &slides, &DeckOptions::new())?;
//! prs.save("review.pptx")?;
//! # Ok::<(), deckwright::Error>(())
//! ```
//!
//! ## Reading Decks Back
//!
//! ```no_run
//! use deckwright::render::{to_outline, RenderOptions};
//!
//! let prs = deckwright::open_presentation("OIDC_Beta_Intro.pptx")?;
//! println!("{}", to_outline(&prs, &RenderOptions::default())?);
//! # Ok::<(), deckwright::Error>(())
//! ```

pub mod builder;
pub mod container;
pub mod content;
pub mod error;
pub mod model;
pub mod opc;
pub mod pptx;
pub mod render;
pub mod writer;

// Re-exports
pub use builder::{
    add_slide, build_deck, build_presentation, render_title_slide, save_deck, DeckOptions,
    TextStyle, DARK_BACKGROUND,
};
pub use container::{OoxmlContainer, Relationship, Relationships};
pub use content::{SlideContent, TitleContent};
pub use error::{Error, Result};
pub use model::{
    Background, Emu, Font, Metadata, NotesSlide, Paragraph, Placeholder, PlaceholderKind,
    Presentation, RgbColor, Shape, Slide, SlideLayout, SlideSize, TextFrame, TextRun,
};
pub use pptx::PptxParser;
pub use writer::PptxWriter;

use std::path::Path;

/// Read a `.pptx` file into the presentation model.
///
/// # Example
///
/// ```no_run
/// let prs = deckwright::open_presentation("OIDC_Beta_Intro.pptx")?;
/// println!("Slides: {}", prs.slide_count());
/// # Ok::<(), deckwright::Error>(())
/// ```
pub fn open_presentation(path: impl AsRef<Path>) -> Result<Presentation> {
    PptxParser::open(path)?.parse()
}

/// Read a `.pptx` package from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Presentation> {
    PptxParser::from_bytes(data.to_vec())?.parse()
}

/// Outline of a `.pptx` file: one line per slide title, indented body text
/// and notes beneath.
pub fn outline(path: impl AsRef<Path>) -> Result<String> {
    let prs = open_presentation(path)?;
    render::to_outline(&prs, &render::RenderOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes_round_trip() {
        let prs = build_deck(&DeckOptions::default()).unwrap();
        let parsed = parse_bytes(&prs.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed, prs);
    }

    #[test]
    fn test_parse_bytes_rejects_garbage() {
        assert!(matches!(parse_bytes(b"PK\x03\x04"), Err(Error::ZipArchive(_))));
    }
}
