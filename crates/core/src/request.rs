//! The caller-facing print request.
//!
//! A request is an explicit struct enumerating every recognized option with
//! its type and default; unrecognized input simply has nowhere to land.
//! Requests are caller-owned and immutable for the duration of a render.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tagpress_types::Label;

/// The closed set of generator variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    SingleLabel,
    Roll,
    Sheet,
    Barcode,
    BarcodeQr,
    Qr,
    QrRoll,
}

impl LabelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKind::SingleLabel => "single_label",
            LabelKind::Roll => "roll",
            LabelKind::Sheet => "sheet",
            LabelKind::Barcode => "barcode",
            LabelKind::BarcodeQr => "barcode_qr",
            LabelKind::Qr => "qr",
            LabelKind::QrRoll => "qr_roll",
        }
    }

    /// Filename prefix for generated documents of this kind.
    pub(crate) fn filename_prefix(&self) -> &'static str {
        match self {
            LabelKind::SingleLabel | LabelKind::Qr => "qr_code",
            LabelKind::Roll => "roll_labels",
            LabelKind::Sheet => "sheet",
            LabelKind::Barcode => "barcode",
            LabelKind::BarcodeQr => "barcode_qr",
            LabelKind::QrRoll => "qr_roll",
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "single_label" | "single" => Ok(LabelKind::SingleLabel),
            "roll" => Ok(LabelKind::Roll),
            "sheet" => Ok(LabelKind::Sheet),
            "barcode" => Ok(LabelKind::Barcode),
            "barcode_qr" => Ok(LabelKind::BarcodeQr),
            "qr" => Ok(LabelKind::Qr),
            "qr_roll" => Ok(LabelKind::QrRoll),
            other => Err(format!("unknown label kind '{other}'")),
        }
    }
}

/// A distance that may arrive as a number or as free-form text.
///
/// Text values go through the lenient `parse_or_fallback` conversion at
/// option-resolution time; they never fail deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GapValue {
    Number(f64),
    Text(String),
}

/// Margins in inches, in any of the three accepted forms. All three resolve
/// to identical point values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MarginSpec {
    /// A single scalar applied to all four edges.
    Uniform(GapValue),
    /// `[top, right, bottom, left]`.
    Edges([GapValue; 4]),
    /// A named map; absent edges keep their defaults.
    Named {
        #[serde(default)]
        top: Option<GapValue>,
        #[serde(default)]
        right: Option<GapValue>,
        #[serde(default)]
        bottom: Option<GapValue>,
        #[serde(default)]
        left: Option<GapValue>,
    },
}

/// Recognized layout override keys, all in inches. Anything else a caller
/// sends is ignored by construction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutOverrides {
    pub column_gap: Option<GapValue>,
    pub row_gap: Option<GapValue>,
    pub top_margin: Option<GapValue>,
    pub bottom_margin: Option<GapValue>,
    pub left_margin: Option<GapValue>,
    pub right_margin: Option<GapValue>,
}

/// Grid template for sheet printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 7,
            rows: 9,
        }
    }
}

impl GridSpec {
    /// Labels per physical page.
    pub fn per_page(&self) -> u32 {
        self.columns * self.rows
    }
}

/// A print request. See the crate documentation for which fields each
/// [`LabelKind`] requires.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub variant_identifier: Option<String>,
    pub variant_sku: Option<String>,
    pub variant_price: Option<f64>,
    pub barcode_content: Option<String>,
    pub qr_payload: Option<String>,
    /// Pre-rasterized image bytes (PNG) supplied by the caller.
    pub image_data: Option<Vec<u8>>,
    pub stock_quantity: u32,
    /// Symbolic page size; absent defaults to letter. An unrecognized
    /// symbol is a hard configuration error.
    pub page_size: Option<String>,
    pub grid: GridSpec,
    /// Explicit labels for sheet mode. When absent, sheet mode synthesizes
    /// `stock_quantity` copies from the request's image and price.
    pub labels: Option<Vec<Label>>,
    pub layout: LayoutOverrides,
    pub margins: Option<MarginSpec>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            variant_identifier: None,
            variant_sku: None,
            variant_price: None,
            barcode_content: None,
            qr_payload: None,
            image_data: None,
            stock_quantity: 1,
            page_size: None,
            grid: GridSpec::default(),
            labels: None,
            layout: LayoutOverrides::default(),
            margins: None,
        }
    }
}
