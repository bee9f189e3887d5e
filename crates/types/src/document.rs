//! The transient document model handed from the generators to the renderer.
//!
//! A render call builds a [`Document`] of [`Page`]s holding elements placed
//! at absolute top-down page coordinates, then discards it once the PDF
//! bytes are produced. Nothing here owns pixels: images are referenced by
//! the temp-file path that backs them for the duration of the render.

use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One print unit: an optional image plus optional price/identifier text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// How an image is scaled into its target region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    /// Fit within the region preserving aspect ratio, centered on both axes.
    Contain,
    /// Scale to the region width; height follows the aspect ratio and the
    /// region height is ignored. Anchored at the region's top-left corner.
    Width,
}

#[derive(Debug, Clone)]
pub struct PlacedImage {
    pub src: PathBuf,
    pub region: Rect,
    pub fit: ImageFit,
}

#[derive(Debug, Clone)]
pub struct PlacedText {
    pub content: String,
    /// Left edge of the text box, in points from the page's left edge.
    pub x: f32,
    /// Top of the text line, in points from the page's top edge.
    pub y: f32,
    pub size: f32,
    pub align: TextAlign,
    /// Width of the box the text is aligned within.
    pub width: f32,
}

#[derive(Debug, Clone)]
pub enum PlacedElement {
    Image(PlacedImage),
    Text(PlacedText),
}

/// Ordered elements placed on one physical page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub elements: Vec<PlacedElement>,
}

impl Page {
    pub fn push_image(&mut self, src: PathBuf, region: Rect, fit: ImageFit) {
        self.elements
            .push(PlacedElement::Image(PlacedImage { src, region, fit }));
    }

    pub fn push_text(
        &mut self,
        content: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        align: TextAlign,
        width: f32,
    ) {
        self.elements.push(PlacedElement::Text(PlacedText {
            content: content.into(),
            x,
            y,
            size,
            align,
            width,
        }));
    }
}

/// The full multi-page output for one request.
///
/// Created with one (empty) page, matching the behavior of the underlying
/// PDF writer: a document always has a first page without an explicit break.
#[derive(Debug, Clone)]
pub struct Document {
    pub page: Size,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(page: Size) -> Self {
        Self {
            page,
            pages: vec![Page::default()],
        }
    }

    pub fn start_page(&mut self) {
        self.pages.push(Page::default());
    }

    pub fn last_page_mut(&mut self) -> &mut Page {
        // `pages` is never empty: `new` seeds one and nothing removes pages.
        self.pages.last_mut().expect("document has at least one page")
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
