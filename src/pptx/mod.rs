//! PPTX (PowerPoint) presentation parser.
//!
//! Loads a `.pptx` package back into the [`Presentation`](crate::model::Presentation)
//! model, so written decks can be inspected and verified.

mod parser;

pub use parser::PptxParser;
