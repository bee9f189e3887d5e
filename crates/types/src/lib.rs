//! Foundation types for the tagpress label engine: geometry, physical
//! units, page sizes, and the transient document model shared between the
//! generators and the PDF renderer.

pub mod dimension;
pub mod document;
pub mod geometry;

pub use dimension::{points_from_inches, Margins, PageSize, POINTS_PER_INCH};
pub use document::{
    Document, ImageFit, Label, Page, PlacedElement, PlacedImage, PlacedText, TextAlign,
};
pub use geometry::{Rect, Size};
