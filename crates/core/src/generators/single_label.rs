//! Single-label printing: exactly one letter page.

use crate::error::Error;
use crate::generators::{format_currency, qr_image_path};
use crate::request::GenerationRequest;
use crate::temp::TempArena;
use tagpress_types::{Document, ImageFit, PageSize, Rect, TextAlign};

const MARGIN: f32 = 40.0;
const IMAGE_BOX: f32 = 450.0;
const PLACEHOLDER_SIZE: f32 = 16.0;
const SKU_SIZE: f32 = 12.0;
const PRICE_SIZE: f32 = 16.0;
const DETAIL_GAP: f32 = 10.0;
const LINE_GAP: f32 = 6.0;

pub(crate) fn render(
    request: &GenerationRequest,
    arena: &mut TempArena,
) -> Result<Document, Error> {
    let page_size = PageSize::Letter.size();
    let content_width = page_size.width - 2.0 * MARGIN;
    let mut document = Document::new(page_size);
    let page = document.last_page_mut();

    let mut cursor = MARGIN;
    if let Some(path) = qr_image_path(request, arena)? {
        let box_edge = IMAGE_BOX.min(content_width);
        page.push_image(
            path,
            Rect::new(
                MARGIN + (content_width - box_edge) / 2.0,
                cursor,
                box_edge,
                box_edge,
            ),
            ImageFit::Contain,
        );
        cursor += box_edge + DETAIL_GAP;
    } else {
        page.push_text(
            "No QR Code Available",
            MARGIN,
            cursor,
            PLACEHOLDER_SIZE,
            TextAlign::Center,
            content_width,
        );
        cursor += PLACEHOLDER_SIZE + DETAIL_GAP;
    }

    if let Some(sku) = &request.variant_sku {
        page.push_text(
            format!("SKU: {sku}"),
            MARGIN,
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
            MARGIN,
            cursor,
            PRICE_SIZE,
            TextAlign::Center,
            content_width,
        );
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagpress_types::{PlacedElement, PlacedText};

    fn texts(document: &Document) -> Vec<&PlacedText> {
        document.pages[0]
            .elements
            .iter()
            .filter_map(|e| match e {
                PlacedElement::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bare_identifier_renders_placeholder_only() {
        let request = GenerationRequest {
            variant_identifier: Some("v1".to_string()),
            ..GenerationRequest::default()
        };
        let mut arena = TempArena::new();
        let document = render(&request, &mut arena).unwrap();
        assert_eq!(document.page_count(), 1);
        let texts = texts(&document);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].content, "No QR Code Available");
        arena.sweep();
    }

    #[test]
    fn sku_and_price_lines_follow_the_image() {
        let request = GenerationRequest {
            variant_identifier: Some("v1".to_string()),
            variant_sku: Some("TP-001".to_string()),
            variant_price: Some(12.0),
            qr_payload: Some("https://example.com/p/1".to_string()),
            ..GenerationRequest::default()
        };
        let mut arena = TempArena::new();
        let document = render(&request, &mut arena).unwrap();
        let texts = texts(&document);
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].content, "SKU: TP-001");
        assert_eq!(texts[1].content, "$12.00");
        // Details sit below the image box.
        assert!(texts[0].y >= MARGIN + IMAGE_BOX);
        assert!(texts[1].y > texts[0].y);
        arena.sweep();
    }
}
