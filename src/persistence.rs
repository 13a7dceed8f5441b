//! Document persistence as JSON.
//!
//! Images are stored inline as base64 PNG, so a saved file is
//! self-contained. Writes go through a temp file in the target directory
//! and are renamed into place.
//!
//! ```text
//! { "current_page": 0,
//!   "pages": [ { "items": [ { "image_data": "<base64 PNG>",
//!       "x": .., "y": .., "width": .., "height": ..,
//!       "crop_x": .., "crop_y": .., "crop_w": .., "crop_h": .. } ] } ] }
//! ```

use crate::constants::APP_DIR_NAME;
use crate::document::{Document, Item, Page};
use crate::error::{CheatsheetError, Result};
use crate::types::{CropRect, ImageHandle, PaperSize, Rect};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const AUTOSAVE_FILE_NAME: &str = "autosave.json";

#[derive(Debug, Serialize, Deserialize)]
struct DocumentFile {
    #[serde(default)]
    current_page: i64,
    pages: Option<Vec<PageFile>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageFile {
    #[serde(default)]
    items: Vec<ItemFile>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ItemFile {
    image_data: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    crop_x: i32,
    crop_y: i32,
    crop_w: i32,
    crop_h: i32,
}

impl ItemFile {
    fn from_item(item: &Item) -> Result<Self> {
        let png = item.image().encode_png()?;
        let bounds = item.bounds();
        let crop = item.crop();
        Ok(Self {
            image_data: STANDARD.encode(png),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            crop_x: crop.x,
            crop_y: crop.y,
            crop_w: crop.width,
            crop_h: crop.height,
        })
    }

    fn decode_image(&self) -> Result<ImageHandle> {
        let bytes = STANDARD.decode(self.image_data.as_bytes())?;
        ImageHandle::from_bytes(&bytes)
    }
}

/// Serialize a document to pretty JSON text.
pub fn document_to_json(doc: &Document) -> Result<String> {
    let mut pages = Vec::with_capacity(doc.page_count());
    for (page_index, page) in doc.pages().iter().enumerate() {
        let mut items = Vec::with_capacity(page.item_count());
        for item in page.items() {
            match ItemFile::from_item(item) {
                Ok(file) => items.push(file),
                Err(e) => warn!(page = page_index, item_id = item.id(), error = %e, "Failed to encode image, skipping item"),
            }
        }
        pages.push(PageFile { items });
    }

    let file = DocumentFile {
        current_page: doc.current_page_index() as i64,
        pages: Some(pages),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Parse a document from JSON text.
///
/// Items whose image cannot be decoded are skipped; stored geometry is
/// clamped into the item invariants.
pub fn document_from_json(json: &str, paper: PaperSize) -> Result<Document> {
    let file: DocumentFile = serde_json::from_str(json)?;
    let pages = file
        .pages
        .ok_or_else(|| CheatsheetError::InvalidDocument("missing \"pages\" array".to_string()))?;

    let mut next_id = 0;
    let mut loaded = Vec::with_capacity(pages.len());
    for (page_index, page) in pages.into_iter().enumerate() {
        let mut items = Vec::with_capacity(page.items.len());
        for (item_index, entry) in page.items.into_iter().enumerate() {
            let image = match entry.decode_image() {
                Ok(image) => image,
                Err(e) => {
                    warn!(page = page_index, item = item_index, error = %e, "Failed to decode image, skipping item");
                    continue;
                }
            };
            let bounds = Rect::new(entry.x, entry.y, entry.width, entry.height);
            let crop = CropRect::new(entry.crop_x, entry.crop_y, entry.crop_w, entry.crop_h);
            items.push(Item::from_parts(next_id, image, bounds, crop));
            next_id += 1;
        }
        loaded.push(Page::from_items(items));
    }

    Ok(Document::from_pages(loaded, file.current_page, paper))
}

/// Save `doc` to `path` atomically.
pub fn save_document(doc: &Document, path: &Path) -> Result<()> {
    let json = document_to_json(doc)?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.persist(path)?;

    info!(path = %path.display(), pages = doc.page_count(), "Saved document");
    Ok(())
}

/// Load a document saved by [`save_document`]. Pages take the given paper.
pub fn load_document(path: &Path, paper: PaperSize) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    let doc = document_from_json(&json, paper)?;
    info!(path = %path.display(), pages = doc.page_count(), "Loaded document");
    Ok(doc)
}

/// `<config_dir>/cheatsheet-maker/autosave.json`; the directory is created.
pub fn autosave_path() -> Result<PathBuf> {
    let config = dirs::config_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory")
    })?;
    let dir = config.join(APP_DIR_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join(AUTOSAVE_FILE_NAME))
}
