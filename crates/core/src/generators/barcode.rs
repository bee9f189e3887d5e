//! Linear barcode label, plus the combined barcode+QR roll tile.

use crate::error::Error;
use crate::generators::{format_currency, qr_image_path, roll};
use crate::options::LayoutOptions;
use crate::request::GenerationRequest;
use crate::temp::TempArena;
use tagpress_codes::BarcodeOptions;
use tagpress_types::{Document, ImageFit, Rect, TextAlign};

/// Displayed symbol width on the page.
const DISPLAY_WIDTH: f32 = 200.0;
/// Vertical room reserved for the symbol before the detail lines.
const SYMBOL_AREA_HEIGHT: f32 = 70.0;
const DETAIL_GAP: f32 = 10.0;
const SKU_SIZE: f32 = 12.0;
const PRICE_SIZE: f32 = 16.0;
const PLACEHOLDER_SIZE: f32 = 12.0;
const LINE_GAP: f32 = 6.0;

pub(crate) fn render(
    request: &GenerationRequest,
    options: &LayoutOptions,
    arena: &mut TempArena,
) -> Result<Document, Error> {
    let mut document = Document::new(options.page);
    let margins = options.margins;
    let content_width = options.usable_width();
    let page = document.last_page_mut();

    let mut cursor = margins.top;
    if let Some(content) = &request.barcode_content {
        let png = tagpress_codes::code128_png(content, &BarcodeOptions::default())?;
        let path = arena.add_png(&png)?;
        page.push_image(
            path,
            Rect::new(margins.left, cursor, DISPLAY_WIDTH, 0.0),
            ImageFit::Width,
        );
        cursor += SYMBOL_AREA_HEIGHT + DETAIL_GAP;
    } else {
        page.push_text(
            "No Barcode Available",
            margins.left,
            margins.top + (options.usable_height() - PLACEHOLDER_SIZE) / 2.0,
            PLACEHOLDER_SIZE,
            TextAlign::Center,
            content_width,
        );
        cursor += PLACEHOLDER_SIZE + DETAIL_GAP;
    }

    if let Some(sku) = &request.variant_sku {
        page.push_text(
            format!("SKU: {sku}"),
            margins.left,
            cursor,
            SKU_SIZE,
            TextAlign::Center,
            content_width,
        );
        cursor += SKU_SIZE + LINE_GAP;
    }
    if let Some(price) = request.variant_price {
        page.push_text(
            format_currency(price),
            margins.left,
            cursor,
            PRICE_SIZE,
            TextAlign::Center,
            content_width,
        );
    }
    Ok(document)
}

/// The combined barcode+QR variant prints the QR side on a single
/// one-inch roll tile; the linear code is validated upstream and printed
/// through the sheet/barcode paths.
pub(crate) fn render_qr_tile(
    request: &GenerationRequest,
    arena: &mut TempArena,
) -> Result<Document, Error> {
    let image = qr_image_path(request, arena)?;
    Ok(roll::roll_document(
        image.as_deref(),
        request.variant_price,
        1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagpress_types::PlacedElement;

    #[test]
    fn barcode_label_places_symbol_and_details() {
        let request = GenerationRequest {
            variant_identifier: Some("v1".to_string()),
            variant_sku: Some("TP-002".to_string()),
            variant_price: Some(3.25),
            barcode_content: Some("TP-002".to_string()),
            ..GenerationRequest::default()
        };
        let options = LayoutOptions::resolve(&request).unwrap();
        let mut arena = TempArena::new();
        let document = render(&request, &options, &mut arena).unwrap();
        assert_eq!(document.page_count(), 1);
        assert_eq!(arena.len(), 1);
        let images = document.pages[0]
            .elements
            .iter()
            .filter(|e| matches!(e, PlacedElement::Image(_)))
            .count();
        assert_eq!(images, 1);
        arena.sweep();
    }

    #[test]
    fn missing_content_renders_placeholder() {
        let request = GenerationRequest {
            variant_identifier: Some("v1".to_string()),
            qr_payload: Some("fallback".to_string()),
            ..GenerationRequest::default()
        };
        let options = LayoutOptions::resolve(&request).unwrap();
        let mut arena = TempArena::new();
        let document = render(&request, &options, &mut arena).unwrap();
        let has_placeholder = document.pages[0].elements.iter().any(|e| {
            matches!(e, PlacedElement::Text(text) if text.content == "No Barcode Available")
        });
        assert!(has_placeholder);
        arena.sweep();
    }

    #[test]
    fn qr_tile_is_a_single_roll_page() {
        let request = GenerationRequest {
            variant_identifier: Some("v1".to_string()),
            variant_price: Some(9.99),
            qr_payload: Some("https://example.com/p/9".to_string()),
            stock_quantity: 40,
            ..GenerationRequest::default()
        };
        let mut arena = TempArena::new();
        let document = render_qr_tile(&request, &mut arena).unwrap();
        // One tile regardless of stock quantity.
        assert_eq!(document.page_count(), 1);
        arena.sweep();
    }
}
