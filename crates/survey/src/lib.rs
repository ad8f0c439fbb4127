//! Survey data contract.
//!
//! The render core never owns surface data; it asks an implementation of
//! [`SurveySource`] whether a geographic point is covered, at what
//! resolution, and what the instruments measured there. This crate defines
//! that contract plus a grid-backed in-memory implementation for tools and
//! tests.

pub mod descriptor;
pub mod grid;
pub mod kinds;
pub mod source;

pub use descriptor::*;
pub use grid::*;
pub use kinds::*;
pub use source::*;
