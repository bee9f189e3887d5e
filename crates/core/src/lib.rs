//! # tagpress-core
//!
//! The label generation core: print requests, layout-option resolution,
//! the temp-resource arena, the generator variants, and the uniform
//! success/error envelope they all return.
//!
//! Rendering one document is synchronous and single-threaded; independent
//! calls may run concurrently; the only shared state is the read-only
//! default tables, and temp file names are unique per call.
//!
//! ```no_run
//! use tagpress_core::{generate, GenerationRequest, LabelKind};
//!
//! let request = GenerationRequest {
//!     variant_identifier: Some("sku-123".into()),
//!     variant_price: Some(4.50),
//!     qr_payload: Some("https://shop.example/p/123".into()),
//!     stock_quantity: 5,
//!     ..GenerationRequest::default()
//! };
//! let outcome = generate(LabelKind::QrRoll, &request);
//! assert!(outcome.is_success());
//! ```

pub mod error;
pub mod generators;
pub mod options;
pub mod request;
pub mod result;
pub mod temp;

pub use error::Error;
pub use generators::{generate, generate_filename};
pub use options::{parse_or_fallback, LayoutOptions, FALLBACK_GAP_IN};
pub use request::{
    GapValue, GenerationRequest, GridSpec, LabelKind, LayoutOverrides, MarginSpec,
};
pub use result::{DocumentMetadata, Outcome, Status};
pub use temp::TempArena;
