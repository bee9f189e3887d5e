//! Layout option resolution.
//!
//! Merges caller overrides with the default table and converts physical
//! units (inches) to device points, once per request, before any rendering
//! begins.

use crate::error::Error;
use crate::request::{GapValue, GenerationRequest, MarginSpec};
use tagpress_types::{points_from_inches, Margins, PageSize, Size};

// Default layout table, in inches.
pub const DEFAULT_COLUMN_GAP_IN: f32 = 0.15748; // 4mm
pub const DEFAULT_ROW_GAP_IN: f32 = 0.15748; // 4mm
pub const DEFAULT_TOP_MARGIN_IN: f32 = 0.472441; // 12mm
pub const DEFAULT_BOTTOM_MARGIN_IN: f32 = 0.433071; // 11mm
pub const DEFAULT_LEFT_MARGIN_IN: f32 = 0.393701; // 10mm
pub const DEFAULT_RIGHT_MARGIN_IN: f32 = 0.393701; // 10mm

/// Fallback for values that fail the lenient numeric parse.
pub const FALLBACK_GAP_IN: f32 = 0.05;

/// Resolved layout configuration in device points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub page: Size,
    pub margins: Margins,
    pub column_gap: f32,
    pub row_gap: f32,
}

impl LayoutOptions {
    /// Resolves a request into concrete point values.
    ///
    /// Fails fast with [`Error::Config`] on an unrecognized page-size
    /// symbol; malformed distance values never fail (see
    /// [`parse_or_fallback`]).
    pub fn resolve(request: &GenerationRequest) -> Result<Self, Error> {
        let page = resolve_page_size(request.page_size.as_deref())?;

        let overrides = &request.layout;
        let column_gap = gap_or(&overrides.column_gap, DEFAULT_COLUMN_GAP_IN);
        let row_gap = gap_or(&overrides.row_gap, DEFAULT_ROW_GAP_IN);
        let mut top = gap_or(&overrides.top_margin, DEFAULT_TOP_MARGIN_IN);
        let mut right = gap_or(&overrides.right_margin, DEFAULT_RIGHT_MARGIN_IN);
        let mut bottom = gap_or(&overrides.bottom_margin, DEFAULT_BOTTOM_MARGIN_IN);
        let mut left = gap_or(&overrides.left_margin, DEFAULT_LEFT_MARGIN_IN);

        if let Some(spec) = &request.margins {
            match spec {
                MarginSpec::Uniform(value) => {
                    let edge = parse_or_fallback(value);
                    top = edge;
                    right = edge;
                    bottom = edge;
                    left = edge;
                }
                MarginSpec::Edges(edges) => {
                    top = parse_or_fallback(&edges[0]);
                    right = parse_or_fallback(&edges[1]);
                    bottom = parse_or_fallback(&edges[2]);
                    left = parse_or_fallback(&edges[3]);
                }
                MarginSpec::Named {
                    top: t,
                    right: r,
                    bottom: b,
                    left: l,
                } => {
                    top = gap_or(t, top);
                    right = gap_or(r, right);
                    bottom = gap_or(b, bottom);
                    left = gap_or(l, left);
                }
            }
        }

        Ok(Self {
            page,
            margins: Margins::new(
                points_from_inches(top),
                points_from_inches(right),
                points_from_inches(bottom),
                points_from_inches(left),
            ),
            column_gap: points_from_inches(column_gap),
            row_gap: points_from_inches(row_gap),
        })
    }

    /// Width of the page inside the margins.
    pub fn usable_width(&self) -> f32 {
        self.page.width - self.margins.horizontal()
    }

    /// Height of the page inside the margins.
    pub fn usable_height(&self) -> f32 {
        self.page.height - self.margins.vertical()
    }
}

fn resolve_page_size(symbol: Option<&str>) -> Result<Size, Error> {
    match symbol {
        None => Ok(PageSize::Letter.size()),
        Some(name) => PageSize::parse(name).map(|p| p.size()).ok_or_else(|| {
            Error::Config(format!(
                "Invalid page size '{}'. Valid sizes are: {}",
                name,
                PageSize::valid_names()
            ))
        }),
    }
}

/// The lenient numeric conversion: a value that cannot be parsed as a
/// number falls back to [`FALLBACK_GAP_IN`] rather than raising.
///
/// Intentional leniency carried over from the original margin handling;
/// see DESIGN.md.
pub fn parse_or_fallback(value: &GapValue) -> f32 {
    match value {
        GapValue::Number(n) => *n as f32,
        GapValue::Text(s) => s.trim().parse::<f32>().unwrap_or(FALLBACK_GAP_IN),
    }
}

fn gap_or(value: &Option<GapValue>, default: f32) -> f32 {
    value.as_ref().map(parse_or_fallback).unwrap_or(default)
}
