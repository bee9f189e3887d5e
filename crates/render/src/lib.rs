//! PDF rendering for the tagpress label engine.
//!
//! Consumes the transient [`Document`] model produced by the generators and
//! emits finished PDF bytes. Primitive drawing is delegated to `lopdf`;
//! this crate only assembles content streams, the page tree, and image
//! XObjects. Page coordinates in the document model are top-down; the
//! y-flip into PDF space happens here.

mod error;
mod text;
mod writer;

pub use error::RenderError;

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use tagpress_types::{
    Document, ImageFit, Page, PlacedElement, PlacedImage, PlacedText, Rect, Size, TextAlign,
};
use writer::PdfWriter;

/// Renders a document to PDF bytes.
pub fn render_document(document: &Document) -> Result<Vec<u8>, RenderError> {
    let mut writer = PdfWriter::new();
    for page in &document.pages {
        let content = page_content(&mut writer, page, document.page)?;
        let encoded = content.encode()?;
        writer.add_page(encoded, document.page)?;
    }
    writer.finish()
}

fn page_content(
    writer: &mut PdfWriter,
    page: &Page,
    page_size: Size,
) -> Result<Content, RenderError> {
    let mut operations = Vec::new();
    for element in &page.elements {
        match element {
            PlacedElement::Image(image) => {
                draw_image(writer, &mut operations, image, page_size.height)?;
            }
            PlacedElement::Text(text) => draw_text(&mut operations, text, page_size.height),
        }
    }
    Ok(Content { operations })
}

fn draw_image(
    writer: &mut PdfWriter,
    operations: &mut Vec<Operation>,
    image: &PlacedImage,
    page_height: f32,
) -> Result<(), RenderError> {
    let xobject = writer.ensure_image(&image.src)?;
    let natural = Size::new(xobject.width as f32, xobject.height as f32);
    let rect = placement_rect(image, natural);
    if rect.width <= 0.0 || rect.height <= 0.0 {
        log::warn!(
            "skipping degenerate image placement for {}",
            image.src.display()
        );
        return Ok(());
    }

    let pdf_y = page_height - (rect.y + rect.height);
    operations.push(Operation::new("q", vec![]));
    operations.push(Operation::new(
        "cm",
        vec![
            rect.width.into(),
            0.into(),
            0.into(),
            rect.height.into(),
            rect.x.into(),
            pdf_y.into(),
        ],
    ));
    operations.push(Operation::new(
        "Do",
        vec![Object::Name(xobject.name.as_bytes().to_vec())],
    ));
    operations.push(Operation::new("Q", vec![]));
    Ok(())
}

/// Resolves the final on-page rect for an image from its target region,
/// fit mode, and natural pixel dimensions.
fn placement_rect(image: &PlacedImage, natural: Size) -> Rect {
    match image.fit {
        ImageFit::Contain => image.region.center(natural.fit_within(image.region.size())),
        ImageFit::Width => {
            if natural.width <= 0.0 {
                return Rect::new(image.region.x, image.region.y, 0.0, 0.0);
            }
            let scale = image.region.width / natural.width;
            Rect::new(
                image.region.x,
                image.region.y,
                image.region.width,
                natural.height * scale,
            )
        }
    }
}

fn draw_text(operations: &mut Vec<Operation>, text: &PlacedText, page_height: f32) {
    if text.content.trim().is_empty() {
        return;
    }
    let line_x = match text.align {
        TextAlign::Left => text.x,
        TextAlign::Center => {
            let advance = text::text_width(&text.content, text.size);
            text.x + ((text.width - advance) / 2.0).max(0.0)
        }
    };
    let baseline = text.y + text.size * 0.8;
    let pdf_y = page_height - baseline;

    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![Object::Name(b"F1".to_vec()), text.size.into()],
    ));
    operations.push(Operation::new("Td", vec![line_x.into(), pdf_y.into()]));
    operations.push(Operation::new(
        "Tj",
        vec![Object::String(
            to_win_ansi(&text.content),
            StringFormat::Literal,
        )],
    ));
    operations.push(Operation::new("ET", vec![]));
}

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}
