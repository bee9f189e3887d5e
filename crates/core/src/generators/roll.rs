//! Continuous-roll printing: one label per one-inch physical page.

use crate::error::Error;
use crate::generators::{format_currency, qr_image_path};
use crate::request::GenerationRequest;
use crate::temp::TempArena;
use std::path::Path;
use tagpress_types::{Document, ImageFit, Rect, Size, TextAlign, POINTS_PER_INCH};

const PAGE_EDGE: f32 = POINTS_PER_INCH;
const MARGIN: f32 = 2.0;
/// The image occupies the top band of the usable square.
const IMAGE_HEIGHT_RATIO: f32 = 0.8;
const IMAGE_TOP_OFFSET: f32 = 2.0;
const CAPTION_SIZE: f32 = 8.0;
/// Top of the caption strip, measured from the bottom margin edge.
const CAPTION_RISE: f32 = 12.0;

pub(crate) fn render(request: &GenerationRequest, arena: &mut TempArena) -> Result<Document, Error> {
    let image = qr_image_path(request, arena)?;
    Ok(roll_document(
        image.as_deref(),
        request.variant_price,
        request.stock_quantity,
    ))
}

/// Lays out `copies` roll tiles.
///
/// The source image was synthesized exactly once by the caller; only the
/// placement repeats, so cost is O(1) synthesis plus O(copies) placement.
pub(crate) fn roll_document(image: Option<&Path>, price: Option<f64>, copies: u32) -> Document {
    let mut document = Document::new(Size::new(PAGE_EDGE, PAGE_EDGE));
    let usable = PAGE_EDGE - 2.0 * MARGIN;
    let edge = usable.min(usable * IMAGE_HEIGHT_RATIO);

    for index in 0..copies {
        if index > 0 {
            document.start_page();
        }
        let page = document.last_page_mut();
        if let Some(path) = image {
            page.push_image(
                path.to_path_buf(),
                Rect::new(
                    MARGIN + (usable - edge) / 2.0,
                    MARGIN + IMAGE_TOP_OFFSET,
                    edge,
                    edge,
                ),
                ImageFit::Contain,
            );
        }
        if let Some(price) = price {
            page.push_text(
                format_currency(price),
                MARGIN,
                PAGE_EDGE - MARGIN - CAPTION_RISE,
                CAPTION_SIZE,
                TextAlign::Center,
                usable,
            );
        }
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagpress_types::PlacedElement;

    fn roll_request(quantity: u32) -> GenerationRequest {
        GenerationRequest {
            variant_identifier: Some("v1".to_string()),
            variant_price: Some(4.5),
            qr_payload: Some("https://example.com/p/1".to_string()),
            stock_quantity: quantity,
            ..GenerationRequest::default()
        }
    }

    #[test]
    fn one_page_per_copy() {
        let mut arena = TempArena::new();
        let document = render(&roll_request(5), &mut arena).unwrap();
        assert_eq!(document.page_count(), 5);
        arena.sweep();
    }

    #[test]
    fn image_is_synthesized_once_for_any_quantity() {
        let mut arena = TempArena::new();
        let document = render(&roll_request(7), &mut arena).unwrap();
        // One temp raster, seven placements of the same path.
        assert_eq!(arena.len(), 1);
        let placements = document
            .pages
            .iter()
            .flat_map(|p| &p.elements)
            .filter(|e| matches!(e, PlacedElement::Image(_)))
            .count();
        assert_eq!(placements, 7);
        arena.sweep();
    }

    #[test]
    fn price_only_roll_still_draws_captions() {
        let request = GenerationRequest {
            qr_payload: None,
            ..roll_request(3)
        };
        let mut arena = TempArena::new();
        let document = render(&request, &mut arena).unwrap();
        assert!(arena.is_empty());
        for page in &document.pages {
            assert_eq!(page.elements.len(), 1);
            assert!(matches!(page.elements[0], PlacedElement::Text(_)));
        }
        arena.sweep();
    }

    #[test]
    fn tiles_fit_within_page_bounds() {
        let mut arena = TempArena::new();
        let document = render(&roll_request(1), &mut arena).unwrap();
        for element in &document.pages[0].elements {
            if let PlacedElement::Image(image) = element {
                assert!(image.region.x >= MARGIN);
                assert!(image.region.y >= MARGIN);
                assert!(image.region.x + image.region.width <= PAGE_EDGE - MARGIN + 1e-3);
                assert!(image.region.y + image.region.height <= PAGE_EDGE - MARGIN + 1e-3);
            }
        }
        arena.sweep();
    }
}
