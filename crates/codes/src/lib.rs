//! Content adapters for the tagpress label engine.
//!
//! Pure functions mapping a content string or payload to a rasterized PNG:
//! Code 128 barcodes at a configurable module width/height/margin, and QR
//! symbols that escalate their version stepwise instead of ever truncating
//! the payload.

mod barcode;
mod error;
mod qr;
mod raster;

pub use barcode::{code128_png, BarcodeOptions};
pub use error::CodeError;
pub use qr::{qr_png, QrOptions};
