//! Output rendering for presentations.
//!
//! Turns a [`Presentation`](crate::model::Presentation) into something a
//! person or another tool can read: an indented plain-text outline, or JSON.
//!
//! # Example
//!
//! ```no_run
//! use deckwright::{pptx::PptxParser, render::*};
//!
//! let prs = PptxParser::open("OIDC_Beta_Intro.pptx")?.parse()?;
//!
//! // Slide-by-slide outline
//! let outline = to_outline(&prs, &RenderOptions::default())?;
//!
//! // Full model as JSON
//! let json = to_json(&prs, JsonFormat::Pretty)?;
//! # Ok::<(), deckwright::Error>(())
//! ```

mod json;
mod options;
mod text;

pub use json::{to_json, to_json_default, JsonFormat};
pub use options::RenderOptions;
pub use text::{to_outline, truncate_to_width};
