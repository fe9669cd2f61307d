//! In-memory presentation document model.
//!
//! This module defines the structures a deck is assembled from before it is
//! serialized to a PPTX package. The reader produces the same structures when
//! a package is loaded back, so a deck can be inspected exactly as it was
//! built.

mod color;
mod presentation;
mod shape;
mod slide;
mod text;
mod units;

pub use color::*;
pub use presentation::*;
pub use shape::*;
pub use slide::*;
pub use text::*;
pub use units::*;
