//! Tiled grid-sheet printing.
//!
//! Places N labels into a fixed columns×rows template. For zero-based label
//! index i: column = i mod C, page-relative row = (i / C) mod R, and a new
//! page starts exactly when i is a positive multiple of C·R, giving
//! ceil(N / (C·R)) pages.

use crate::error::Error;
use crate::generators::format_currency;
use crate::options::LayoutOptions;
use crate::request::GenerationRequest;
use crate::temp::TempArena;
use std::path::PathBuf;
use tagpress_types::{Document, ImageFit, Page, Rect, TextAlign};

/// Share of the cell granted to the image.
const IMAGE_WIDTH_RATIO: f32 = 0.8;
const IMAGE_HEIGHT_RATIO: f32 = 0.6;
const TEXT_SIZE: f32 = 10.0;
const TEXT_GAP: f32 = 10.0;

enum CellArt {
    Image(PathBuf),
    Placeholder,
}

struct Cell {
    art: CellArt,
    price: Option<f64>,
}

pub(crate) fn render(
    request: &GenerationRequest,
    options: &LayoutOptions,
    arena: &mut TempArena,
) -> Result<Document, Error> {
    let cells = collect_cells(request, arena)?;
    let grid = request.grid;
    log::info!(
        "Placing {} labels on a {}x{} grid",
        cells.len(),
        grid.columns,
        grid.rows
    );

    let columns = grid.columns as usize;
    let per_page = grid.per_page() as usize;
    let cell_width = (options.usable_width() - (grid.columns - 1) as f32 * options.column_gap)
        / grid.columns as f32;
    let cell_height =
        (options.usable_height() - (grid.rows - 1) as f32 * options.row_gap) / grid.rows as f32;

    let rows = grid.rows as usize;
    let mut document = Document::new(options.page);
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 && index % per_page == 0 {
            document.start_page();
        }
        let column = index % columns;
        let row = (index / columns) % rows;
        let x = options.margins.left + column as f32 * (cell_width + options.column_gap);
        let y = options.margins.top + row as f32 * (cell_height + options.row_gap);
        place_cell(document.last_page_mut(), cell, x, y, cell_width, cell_height);
    }
    Ok(document)
}

fn place_cell(page: &mut Page, cell: &Cell, x: f32, y: f32, width: f32, height: f32) {
    match &cell.art {
        CellArt::Image(path) => {
            let box_width = width * IMAGE_WIDTH_RATIO;
            let box_height = height * IMAGE_HEIGHT_RATIO;
            page.push_image(
                path.clone(),
                Rect::new(x + (width - box_width) / 2.0, y, box_width, box_height),
                ImageFit::Contain,
            );
        }
        CellArt::Placeholder => {
            page.push_text(
                "No Image Available",
                x,
                y + (height - TEXT_SIZE) / 2.0,
                TEXT_SIZE,
                TextAlign::Center,
                width,
            );
        }
    }
    if let Some(price) = cell.price {
        page.push_text(
            format_currency(price),
            x,
            y + height * IMAGE_HEIGHT_RATIO + TEXT_GAP,
            TEXT_SIZE,
            TextAlign::Center,
            width,
        );
    }
}

/// Materializes the label sequence: the explicit `labels` array when
/// present, otherwise `stock_quantity` copies synthesized from the
/// request's image and price. The shared raster is written to the arena
/// once.
fn collect_cells(request: &GenerationRequest, arena: &mut TempArena) -> Result<Vec<Cell>, Error> {
    if let Some(labels) = &request.labels {
        return labels
            .iter()
            .map(|label| -> Result<Cell, Error> {
                let art = match &label.image_data {
                    Some(bytes) => CellArt::Image(arena.add_png(bytes)?),
                    None => CellArt::Placeholder,
                };
                Ok(Cell {
                    art,
                    price: label.price,
                })
            })
            .collect();
    }

    let Some(bytes) = &request.image_data else {
        return Err(Error::Validation("No labels provided".to_string()));
    };
    let path = arena.add_png(bytes)?;
    Ok((0..request.stock_quantity)
        .map(|_| Cell {
            art: CellArt::Image(path.clone()),
            price: request.variant_price,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagpress_types::Label;

    fn sheet_request(labels: Vec<Label>) -> GenerationRequest {
        GenerationRequest {
            labels: Some(labels),
            ..GenerationRequest::default()
        }
    }

    fn price_labels(count: usize) -> Vec<Label> {
        (0..count)
            .map(|i| Label {
                image_data: None,
                price: Some(1.0 + i as f64),
                identifier: None,
            })
            .collect()
    }

    #[test]
    fn seventy_labels_on_7x9_grid_take_two_pages() {
        let request = sheet_request(price_labels(70));
        let options = LayoutOptions::resolve(&request).unwrap();
        let mut arena = TempArena::new();
        let document = render(&request, &options, &mut arena).unwrap();
        assert_eq!(document.page_count(), 2);
        // 63 labels on page one, 7 on page two; placeholder + price per label.
        assert_eq!(document.pages[0].elements.len(), 63 * 2);
        assert_eq!(document.pages[1].elements.len(), 7 * 2);
        arena.sweep();
    }

    #[test]
    fn a_full_page_does_not_spill() {
        let request = sheet_request(price_labels(63));
        let options = LayoutOptions::resolve(&request).unwrap();
        let mut arena = TempArena::new();
        let document = render(&request, &options, &mut arena).unwrap();
        assert_eq!(document.page_count(), 1);
        arena.sweep();
    }

    #[test]
    fn every_cell_stays_inside_the_margins() {
        let request = sheet_request(price_labels(63));
        let options = LayoutOptions::resolve(&request).unwrap();
        let mut arena = TempArena::new();
        let document = render(&request, &options, &mut arena).unwrap();
        let right_edge = options.page.width - options.margins.right;
        let bottom_edge = options.page.height - options.margins.bottom;
        for element in document.pages.iter().flat_map(|p| &p.elements) {
            if let tagpress_types::PlacedElement::Text(text) = element {
                assert!(text.x >= options.margins.left - 1e-3);
                assert!(text.x + text.width <= right_edge + 1e-3);
                assert!(text.y + text.size <= bottom_edge + 1e-3);
            }
        }
        arena.sweep();
    }

    #[test]
    fn synthesized_labels_share_one_raster() {
        let png = tagpress_codes::qr_png("shared", &tagpress_codes::QrOptions::default()).unwrap();
        let request = GenerationRequest {
            image_data: Some(png),
            variant_price: Some(2.0),
            stock_quantity: 12,
            ..GenerationRequest::default()
        };
        let options = LayoutOptions::resolve(&request).unwrap();
        let mut arena = TempArena::new();
        let document = render(&request, &options, &mut arena).unwrap();
        assert_eq!(arena.len(), 1);
        assert_eq!(document.pages[0].elements.len(), 12 * 2);
        arena.sweep();
    }
}
