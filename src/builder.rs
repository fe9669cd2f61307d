//! Deck assembly: slide rendering and the top-level deck build.
//!
//! [`add_slide`] turns one [`SlideContent`] record into a title-and-bullets
//! slide; [`build_deck`] strings the built-in session together behind a title
//! slide and [`save_deck`] writes it out.
//!
//! # Example
//!
//! ```no_run
//! use deckwright::builder::{save_deck, DeckOptions};
//!
//! let path = save_deck(&DeckOptions::new().with_output("intro.pptx"))?;
//! println!("Saved as {}", path.display());
//! # Ok::<(), deckwright::Error>(())
//! ```

use crate::content::{self, SlideContent, TitleContent};
use crate::error::{Error, Result};
use crate::model::{
    PlaceholderKind, Presentation, RgbColor, Slide, SlideLayout, SlideSize, MAX_FONT_SIZE_PT,
    MIN_FONT_SIZE_PT,
};
use std::path::PathBuf;

/// Background color of every slide in the built-in deck.
pub const DARK_BACKGROUND: RgbColor = RgbColor::new(24, 26, 27);

/// Placeholder index of the body / subtitle on the built-in layouts.
const BODY_IDX: u32 = 1;

/// Text formatting applied by the slide renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Color of every run on the slide
    pub color: RgbColor,
    /// Bullet size in whole points
    pub body_size_pt: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: RgbColor::WHITE,
            body_size_pt: 20,
        }
    }
}

/// Options for building a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Where [`save_deck`] writes the package
    pub output: PathBuf,
    pub slide_size: SlideSize,
    /// Solid fill of every slide
    pub background: RgbColor,
    pub text: TextStyle,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(content::DEFAULT_OUTPUT),
            slide_size: SlideSize::WIDESCREEN,
            background: DARK_BACKGROUND,
            text: TextStyle::default(),
        }
    }
}

impl DeckOptions {
    /// Create options for the built-in deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_slide_size(mut self, size: SlideSize) -> Self {
        self.slide_size = size;
        self
    }

    pub fn with_background(mut self, color: RgbColor) -> Self {
        self.background = color;
        self
    }

    pub fn with_text_color(mut self, color: RgbColor) -> Self {
        self.text.color = color;
        self
    }

    /// Set the bullet size in points, clamped to the 1-4000 pt range a
    /// package can store.
    pub fn with_body_size(mut self, points: u32) -> Self {
        self.text.body_size_pt = points.clamp(MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT);
        self
    }
}

fn missing_placeholder(layout: SlideLayout, kind: &str) -> Error {
    Error::MissingPlaceholder {
        layout: layout.name().to_string(),
        kind: kind.to_string(),
    }
}

/// Add a title-and-bullets slide and return it.
///
/// The title is set verbatim. The body placeholder is emptied and receives
/// one level-0 paragraph per bullet, sized and colored from `style`. Notes
/// are written unformatted, then every run on the slide is recolored.
///
/// `layout` defaults to [`SlideLayout::TitleAndContent`]. A layout without a
/// title or body placeholder fails with [`Error::MissingPlaceholder`].
pub fn add_slide<'a>(
    prs: &'a mut Presentation,
    content: &SlideContent,
    layout: Option<SlideLayout>,
    style: &TextStyle,
) -> Result<&'a mut Slide> {
    let layout = layout.unwrap_or_default();
    let slide = prs.add_slide(layout);

    slide
        .title_mut()
        .ok_or_else(|| missing_placeholder(layout, PlaceholderKind::Title.label()))?
        .set_text(&content.title);

    let frame = slide
        .placeholder_mut(BODY_IDX)
        .and_then(|s| s.text_frame.as_mut())
        .ok_or_else(|| missing_placeholder(layout, "body"))?;
    frame.clear();
    for bullet in &content.bullets {
        let para = frame.add_paragraph();
        para.set_text(bullet.as_str());
        para.level = 0;
        para.font.set_size_pt(style.body_size_pt);
        para.font.set_color(style.color);
    }

    slide.notes_slide_mut().set_text(&content.notes);
    slide.recolor_text(style.color);
    Ok(slide)
}

/// Add the opening title slide: centered title plus a multi-line subtitle.
pub fn render_title_slide<'a>(
    prs: &'a mut Presentation,
    title: &TitleContent,
    options: &DeckOptions,
) -> Result<&'a mut Slide> {
    let layout = SlideLayout::TitleSlide;
    let slide = prs.add_slide(layout);

    slide
        .title_mut()
        .ok_or_else(|| missing_placeholder(layout, PlaceholderKind::CenterTitle.label()))?
        .set_text(&title.title);
    slide
        .placeholder_mut(BODY_IDX)
        .ok_or_else(|| missing_placeholder(layout, PlaceholderKind::Subtitle.label()))?
        .set_text(&title.subtitle);

    slide.recolor_text(options.text.color);
    slide.set_solid_background(options.background);
    Ok(slide)
}

/// Build a deck from arbitrary content: a title slide, then one slide per
/// record, all on `options.background`.
pub fn build_presentation(
    title: &TitleContent,
    slides: &[SlideContent],
    options: &DeckOptions,
) -> Result<Presentation> {
    let mut prs = Presentation::new();
    prs.set_slide_size(options.slide_size);
    prs.metadata.title = Some(title.title.clone());

    render_title_slide(&mut prs, title, options)?;
    for content in slides {
        add_slide(&mut prs, content, None, &options.text)?
            .set_solid_background(options.background);
    }

    log::debug!("built deck with {} slides", prs.slide_count());
    Ok(prs)
}

/// Build the built-in OIDC beta session deck.
pub fn build_deck(options: &DeckOptions) -> Result<Presentation> {
    build_presentation(&content::oidc_beta_title(), &content::oidc_beta_session(), options)
}

/// Build the built-in deck and write it to `options.output`, overwriting any
/// existing file. Returns the written path.
pub fn save_deck(options: &DeckOptions) -> Result<PathBuf> {
    let prs = build_deck(options)?;
    prs.save(&options.output)?;
    Ok(options.output.clone())
}
