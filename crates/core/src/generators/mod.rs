//! The generator contract shared by every label variant.
//!
//! `generate` runs the same skeleton for all kinds: structural validation,
//! option resolution, the variant's render step, result wrapping, and the
//! temp-resource sweep. The sweep runs exactly once regardless of which
//! branch was taken.

mod barcode;
mod qr;
mod roll;
mod sheet;
mod single_label;

use crate::error::Error;
use crate::options::LayoutOptions;
use crate::request::{GenerationRequest, LabelKind};
use crate::result::{DocumentMetadata, Outcome, Status};
use crate::temp::TempArena;
use std::path::PathBuf;
use tagpress_codes::QrOptions;

/// Generates a document for `request`, returning the uniform envelope.
///
/// Validation and configuration failures surface as `unprocessable` with
/// their message; any other failure is logged with full context and
/// surfaced as `internal` with a generic message.
pub fn generate(kind: LabelKind, request: &GenerationRequest) -> Outcome {
    log::info!(
        "Generating {} PDF for variant {:?}",
        kind,
        request.variant_identifier
    );
    let mut arena = TempArena::new();
    let rendered = run(kind, request, &mut arena);
    let outcome = match rendered {
        Ok(bytes) => Outcome::success(bytes)
            .with_metadata(DocumentMetadata::pdf(generate_filename(kind, request))),
        Err(err) if err.is_rejection() => {
            log::error!("{kind} PDF generation rejected: {err}");
            Outcome::error(err.to_string(), Status::Unprocessable)
        }
        Err(err) => {
            log::error!("Unexpected error in {kind} PDF generation: {err:?}");
            Outcome::error("PDF generation failed", Status::Internal)
        }
    };
    arena.sweep();
    outcome
}

fn run(
    kind: LabelKind,
    request: &GenerationRequest,
    arena: &mut TempArena,
) -> Result<Vec<u8>, Error> {
    validate(kind, request)?;
    let options = LayoutOptions::resolve(request)?;
    let document = match kind {
        LabelKind::SingleLabel => single_label::render(request, arena)?,
        LabelKind::Roll => roll::render(request, arena)?,
        LabelKind::Sheet => sheet::render(request, &options, arena)?,
        LabelKind::Barcode => barcode::render(request, &options, arena)?,
        LabelKind::BarcodeQr => barcode::render_qr_tile(request, arena)?,
        LabelKind::Qr => qr::render(request, &options, arena)?,
        LabelKind::QrRoll => qr::render_roll(request, arena)?,
    };
    Ok(tagpress_render::render_document(&document)?)
}

fn validate(kind: LabelKind, request: &GenerationRequest) -> Result<(), Error> {
    if request.stock_quantity == 0 {
        return Err(Error::Validation(
            "Stock quantity must be at least 1".to_string(),
        ));
    }
    match kind {
        LabelKind::SingleLabel => require_identifier(request),
        LabelKind::Roll => {
            require_identifier(request)?;
            if request.variant_price.is_none()
                && request.image_data.is_none()
                && request.qr_payload.is_none()
            {
                return Err(Error::Validation(
                    "Either variant price or image data must be provided".to_string(),
                ));
            }
            Ok(())
        }
        LabelKind::Sheet => {
            if request.grid.columns == 0 || request.grid.rows == 0 {
                return Err(Error::Validation(
                    "Grid must have at least one column and one row".to_string(),
                ));
            }
            let explicit_empty = request
                .labels
                .as_ref()
                .is_some_and(|labels| labels.is_empty());
            if explicit_empty || (request.labels.is_none() && request.image_data.is_none()) {
                return Err(Error::Validation("No labels provided".to_string()));
            }
            Ok(())
        }
        LabelKind::Barcode => {
            require_identifier(request)?;
            if request.barcode_content.is_none() && request.qr_payload.is_none() {
                return Err(Error::Validation(
                    "Either barcode content or QR code data must be provided".to_string(),
                ));
            }
            Ok(())
        }
        LabelKind::BarcodeQr => {
            require_identifier(request)?;
            if request.qr_payload.is_none() && request.image_data.is_none() {
                return Err(Error::Validation(
                    "QR code data must be provided for barcode_qr generation".to_string(),
                ));
            }
            Ok(())
        }
        LabelKind::Qr | LabelKind::QrRoll => {
            if request.qr_payload.is_none() && request.image_data.is_none() {
                return Err(Error::Validation(
                    "QR code data must be provided".to_string(),
                ));
            }
            Ok(())
        }
    }
}

fn require_identifier(request: &GenerationRequest) -> Result<(), Error> {
    if request.variant_identifier.is_none() {
        return Err(Error::Validation(
            "Variant identifier must be provided".to_string(),
        ));
    }
    Ok(())
}

/// Deterministic filename for a request: per-kind prefix plus the slugged
/// identifier, falling back to the current unix timestamp when no
/// identifier is present. Pure apart from that clock read; computable
/// independent of render success.
pub fn generate_filename(kind: LabelKind, request: &GenerationRequest) -> String {
    let stem = match &request.variant_identifier {
        Some(identifier) => slug::slugify(identifier),
        None => chrono::Utc::now().timestamp().to_string(),
    };
    format!("{}_{}.pdf", kind.filename_prefix(), stem)
}

pub(crate) fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Resolves the request's QR-side image: caller-supplied raster bytes win,
/// otherwise a QR is synthesized from the payload. Either way the raster is
/// written to the arena once and shared by every placement.
pub(crate) fn qr_image_path(
    request: &GenerationRequest,
    arena: &mut TempArena,
) -> Result<Option<PathBuf>, Error> {
    if let Some(bytes) = &request.image_data {
        return Ok(Some(arena.add_png(bytes)?));
    }
    if let Some(payload) = &request.qr_payload {
        let png = tagpress_codes::qr_png(payload, &QrOptions::default())?;
        return Ok(Some(arena.add_png(&png)?));
    }
    Ok(None)
}
