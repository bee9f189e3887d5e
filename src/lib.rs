//! # tagpress
//!
//! Label and price-tag layout engine: turns a print request (variant
//! identifier, price, SKU, barcode/QR payload) into paginated, print-ready
//! PDF bytes under four layout strategies: single label, continuous roll,
//! tiled grid sheet, and combined barcode+QR.
//!
//! This crate is the integration layer. The work happens in the member
//! crates, re-exported here:
//! - `tagpress-types`: geometry, page sizes, the transient document model
//! - `tagpress-codes`: barcode/QR content adapters
//! - `tagpress-render`: lopdf-backed PDF assembly
//! - `tagpress-core`: requests, layout resolution, generators, outcomes
//!
//! The [`services`] module carries the boundary-level catalog/inventory
//! helpers that surround label printing in a storefront deployment.

// Re-export foundation crates
pub use tagpress_codes as codes;
pub use tagpress_render as render;
pub use tagpress_types as types;

pub mod services;

// Re-export the core surface
pub use tagpress_core::{
    generate, generate_filename, DocumentMetadata, Error, GapValue, GenerationRequest, GridSpec,
    LabelKind, LayoutOptions, LayoutOverrides, MarginSpec, Outcome, Status, TempArena,
};

// Commonly used foundation types
pub use tagpress_types::{Label, Margins, PageSize, Rect, Size};
