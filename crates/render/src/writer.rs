//! Low-level PDF assembly on top of `lopdf`.
//!
//! The writer owns the object table, the page tree, the single built-in
//! Helvetica font, and a cache of image XObjects keyed by source path, so an
//! image synthesized once is embedded once no matter how many pages place it.

use crate::error::RenderError;
use lopdf::{dictionary, Dictionary, Document as LopdfDocument, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tagpress_types::Size;

#[derive(Debug, Clone)]
pub(crate) struct ImageXObject {
    pub name: String,
    pub width: u32,
    pub height: u32,
    id: ObjectId,
}

pub(crate) struct PdfWriter {
    doc: LopdfDocument,
    pages_id: ObjectId,
    resources_id: ObjectId,
    font_id: ObjectId,
    image_xobjects: HashMap<PathBuf, ImageXObject>,
    page_ids: Vec<ObjectId>,
}

impl PdfWriter {
    pub(crate) fn new() -> Self {
        let mut doc = LopdfDocument::with_version("1.7");
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        Self {
            doc,
            pages_id,
            resources_id,
            font_id,
            image_xobjects: HashMap::new(),
            page_ids: Vec::new(),
        }
    }

    /// Loads and embeds the image behind `path` as a grayscale XObject,
    /// returning the cached entry on subsequent calls for the same path.
    pub(crate) fn ensure_image(&mut self, path: &Path) -> Result<ImageXObject, RenderError> {
        if let Some(cached) = self.image_xobjects.get(path) {
            return Ok(cached.clone());
        }

        let raster = image::open(path)
            .map_err(|e| RenderError::Image(format!("{}: {}", path.display(), e)))?
            .to_luma8();
        let (width, height) = raster.dimensions();
        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            },
            raster.into_raw(),
        );
        let id = self.doc.add_object(Object::Stream(stream));
        let entry = ImageXObject {
            name: format!("Im{}", self.image_xobjects.len() + 1),
            width,
            height,
            id,
        };
        log::debug!(
            "embedded image xobject {} ({}x{}px) from {}",
            entry.name,
            width,
            height,
            path.display()
        );
        self.image_xobjects.insert(path.to_path_buf(), entry.clone());
        Ok(entry)
    }

    /// Appends a page with the given encoded content stream.
    pub(crate) fn add_page(&mut self, content: Vec<u8>, page: Size) -> Result<(), RenderError> {
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page.width.into(), page.height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Finalizes the page tree, catalog, and trailer and serializes the
    /// document to bytes.
    pub(crate) fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let mut font_dict = Dictionary::new();
        font_dict.set("F1", Object::Reference(self.font_id));
        let mut resources = dictionary! {
            "Font" => font_dict,
        };
        if !self.image_xobjects.is_empty() {
            let mut xobjects = Dictionary::new();
            for entry in self.image_xobjects.values() {
                xobjects.set(entry.name.as_bytes(), Object::Reference(entry.id));
            }
            resources.set("XObject", Object::Dictionary(xobjects));
        }
        self.doc
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect();
        let count = self.page_ids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut buffer = Cursor::new(Vec::new());
        self.doc.save_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }
}
