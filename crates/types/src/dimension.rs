//! Physical units and page geometry.
//!
//! All layout arithmetic in the engine happens in PDF points. Callers supply
//! distances in inches; conversion happens once, at option-resolution time.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

pub const POINTS_PER_INCH: f32 = 72.0;

pub fn points_from_inches(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Page margins in points, clockwise from the top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Horizontal margin total.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Vertical margin total.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// The page sizes the engine accepts as symbolic names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    #[default]
    Letter,
    Legal,
    A4,
    A3,
}

impl PageSize {
    /// Parse a page size name (e.g. "A4", "letter", "legal").
    ///
    /// Returns `None` for unrecognized symbols; the caller decides whether
    /// that is a hard error or a default.
    pub fn parse(value: &str) -> Option<PageSize> {
        match value.trim().to_ascii_lowercase().as_str() {
            "letter" => Some(PageSize::Letter),
            "legal" => Some(PageSize::Legal),
            "a4" => Some(PageSize::A4),
            "a3" => Some(PageSize::A3),
            _ => None,
        }
    }

    /// Page dimensions in points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::A4 => (595.28, 841.89),
            PageSize::A3 => (841.89, 1190.55),
        }
    }

    pub fn size(&self) -> Size {
        let (width, height) = self.dimensions();
        Size::new(width, height)
    }

    /// The names accepted by [`PageSize::parse`], for error messages.
    pub fn valid_names() -> &'static str {
        "letter, legal, A4, A3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(PageSize::parse("A4"), Some(PageSize::A4));
        assert_eq!(PageSize::parse("letter"), Some(PageSize::Letter));
        assert_eq!(PageSize::parse(" LEGAL "), Some(PageSize::Legal));
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        assert_eq!(PageSize::parse("tabloid"), None);
        assert_eq!(PageSize::parse(""), None);
    }

    #[test]
    fn letter_dimensions_in_points() {
        assert_eq!(PageSize::Letter.dimensions(), (612.0, 792.0));
    }

    #[test]
    fn inches_convert_at_72dpi() {
        assert_eq!(points_from_inches(1.0), 72.0);
        assert_eq!(points_from_inches(0.5), 36.0);
    }
}
