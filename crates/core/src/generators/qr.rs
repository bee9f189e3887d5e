//! QR label printing: full-page label and continuous roll.

use crate::error::Error;
use crate::generators::{format_currency, qr_image_path, roll};
use crate::options::LayoutOptions;
use crate::request::GenerationRequest;
use crate::temp::TempArena;
use tagpress_types::{Document, ImageFit, Rect, TextAlign};

const IMAGE_BOX: f32 = 450.0;
const SKU_SIZE: f32 = 12.0;
const PRICE_SIZE: f32 = 16.0;
const DETAIL_GAP: f32 = 10.0;
const LINE_GAP: f32 = 6.0;

pub(crate) fn render(
    request: &GenerationRequest,
    options: &LayoutOptions,
    arena: &mut TempArena,
) -> Result<Document, Error> {
    let Some(path) = qr_image_path(request, arena)? else {
        return Err(Error::Validation("QR code data must be provided".to_string()));
    };

    let mut document = Document::new(options.page);
    let margins = options.margins;
    let content_width = options.usable_width();
    let page = document.last_page_mut();

    let box_edge = IMAGE_BOX.min(content_width);
    page.push_image(
        path,
        Rect::new(
            margins.left + (content_width - box_edge) / 2.0,
            margins.top,
            box_edge,
            box_edge,
        ),
        ImageFit::Contain,
    );

    let mut cursor = margins.top + box_edge + DETAIL_GAP;
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

/// QR roll: the synthesized symbol repeated across `stock_quantity`
/// one-inch tiles.
pub(crate) fn render_roll(
    request: &GenerationRequest,
    arena: &mut TempArena,
) -> Result<Document, Error> {
    let image = qr_image_path(request, arena)?;
    Ok(roll::roll_document(
        image.as_deref(),
        request.variant_price,
        request.stock_quantity,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagpress_types::PlacedElement;

    fn qr_request() -> GenerationRequest {
        GenerationRequest {
            variant_identifier: Some("v1".to_string()),
            variant_sku: Some("TP-003".to_string()),
            variant_price: Some(7.0),
            qr_payload: Some("https://example.com/p/3".to_string()),
            ..GenerationRequest::default()
        }
    }

    #[test]
    fn qr_label_centers_symbol_with_details() {
        let request = qr_request();
        let options = LayoutOptions::resolve(&request).unwrap();
        let mut arena = TempArena::new();
        let document = render(&request, &options, &mut arena).unwrap();
        assert_eq!(document.page_count(), 1);
        assert_eq!(document.pages[0].elements.len(), 3);
        if let PlacedElement::Image(image) = &document.pages[0].elements[0] {
            let center = image.region.x + image.region.width / 2.0;
            assert!((center - options.page.width / 2.0).abs() < 1e-3);
        } else {
            panic!("expected the QR image first");
        }
        arena.sweep();
    }

    #[test]
    fn roll_repeats_one_symbol() {
        let request = GenerationRequest {
            stock_quantity: 4,
            ..qr_request()
        };
        let mut arena = TempArena::new();
        let document = render_roll(&request, &mut arena).unwrap();
        assert_eq!(document.page_count(), 4);
        assert_eq!(arena.len(), 1);
        arena.sweep();
    }
}
