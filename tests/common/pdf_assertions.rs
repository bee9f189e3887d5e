use lopdf::Document as LopdfDocument;

/// Parse generated bytes back into a lopdf document.
pub fn load_pdf(bytes: &[u8]) -> LopdfDocument {
    LopdfDocument::load_mem(bytes).expect("generated bytes should parse as a PDF")
}

pub fn page_count(doc: &LopdfDocument) -> usize {
    doc.get_pages().len()
}

/// Extract all text content from a PDF document.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Get page dimensions (width, height) in points.
pub fn page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let media_box = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let width = media_box[2].as_float().ok()? - media_box[0].as_float().ok()?;
    let height = media_box[3].as_float().ok()? - media_box[1].as_float().ok()?;
    Some((width, height))
}

/// Count image XObjects embedded in the document.
pub fn embedded_image_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter(|object| {
            object
                .as_stream()
                .ok()
                .and_then(|stream| stream.dict.get(b"Subtype").ok())
                .and_then(|subtype| subtype.as_name().ok())
                .is_some_and(|name| name == b"Image")
        })
        .count()
}
