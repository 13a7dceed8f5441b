//! Document model: pages of z-ordered image items.
//!
//! A [`Document`] always holds at least one [`Page`]. Each page owns its
//! [`Item`]s in z-order (last = front) and keeps a spatial index of their
//! bounding boxes in sync with every geometry change made through it.

use crate::constants::{DEFAULT_ITEM_WIDTH_FRACTION, MIN_ITEM_SIZE};
use crate::input::coords::crop_rect_to_page;
use crate::spatial_index::SpatialIndex;
use crate::types::{CropRect, ImageHandle, ItemId, PaperSize, Rect, Size};
use tracing::debug;

// ============================================================================
// Item
// ============================================================================

/// An image placed on a page.
///
/// `bounds` is in page points; `crop` is in source-image pixels.
#[derive(Debug)]
pub struct Item {
    id: ItemId,
    image: ImageHandle,
    bounds: Rect,
    crop: CropRect,
}

impl Item {
    /// Default placement: half the page width, aspect preserved, centered,
    /// showing the whole image.
    pub fn new(id: ItemId, image: ImageHandle, page: Size) -> Self {
        let crop = CropRect::full(image.width(), image.height());
        let size = aspect_locked_size(page.width * DEFAULT_ITEM_WIDTH_FRACTION, crop.aspect());
        let bounds = Rect::new(
            (page.width - size.width) / 2.0,
            (page.height - size.height) / 2.0,
            size.width,
            size.height,
        );

        Self {
            id,
            image,
            bounds,
            crop,
        }
    }

    /// Rebuild an item from stored geometry, clamping anything out of range.
    pub(crate) fn from_parts(id: ItemId, image: ImageHandle, bounds: Rect, crop: CropRect) -> Self {
        let crop = crop.clamped_to(image.width(), image.height());
        let bounds = Rect::new(
            bounds.x,
            bounds.y,
            bounds.width.max(MIN_ITEM_SIZE),
            bounds.height.max(MIN_ITEM_SIZE),
        );
        Self {
            id,
            image,
            bounds,
            crop,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn image(&self) -> &ImageHandle {
        &self.image
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn crop(&self) -> CropRect {
        self.crop
    }

    pub fn x(&self) -> f64 {
        self.bounds.x
    }

    pub fn y(&self) -> f64 {
        self.bounds.y
    }

    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    /// Visible crop rectangle mapped into page space.
    pub fn crop_rect_in_page_space(&self) -> Rect {
        crop_rect_to_page(self.bounds, self.crop)
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Replace the crop and re-derive the height so that
    /// `height / width == crop.height / crop.width`.
    ///
    /// Width is authoritative. If the derived height falls under the minimum
    /// item size, height is pinned to the minimum and width follows it.
    pub(crate) fn set_crop(&mut self, crop: CropRect) {
        self.crop = crop;
        let size = aspect_locked_size(self.bounds.width, crop.aspect());
        self.bounds.width = size.width;
        self.bounds.height = size.height;
    }
}

/// Size with `width / height == aspect`, keeping `width` unless the height
/// would fall under the minimum item size, in which case height is pinned.
fn aspect_locked_size(width: f64, aspect: f64) -> Size {
    let height = width / aspect;
    if height < MIN_ITEM_SIZE {
        Size::new(MIN_ITEM_SIZE * aspect, MIN_ITEM_SIZE)
    } else {
        Size::new(width, height)
    }
}

// ============================================================================
// Page
// ============================================================================

/// Ordered items of one page; last item is drawn on top.
#[derive(Debug, Default)]
pub struct Page {
    items: Vec<Item>,
    index: SpatialIndex,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_items(items: Vec<Item>) -> Self {
        let mut index = SpatialIndex::new();
        index.rebuild(items.iter().map(|item| (item.id, item.bounds)));
        Self { items, index }
    }

    /// Items back-to-front.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn get_item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Z-position of an item (0 = back).
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Append an item at the front of the z-order.
    pub fn add_item(&mut self, item: Item) {
        debug!(item_id = item.id, "add item");
        self.index.insert(item.id, item.bounds);
        self.items.push(item);
    }

    /// Remove an item, releasing its image. Returns false for unknown ids.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.position_of(id) else {
            return false;
        };
        let item = self.items.remove(pos);
        self.index.remove(item.id);
        debug!(item_id = id, "remove item");
        true
    }

    /// Move an item to the end of the sequence (front of the z-order).
    pub fn bring_to_front(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.position_of(id) else {
            return false;
        };
        if pos + 1 != self.items.len() {
            let item = self.items.remove(pos);
            self.items.push(item);
        }
        true
    }

    pub(crate) fn spatial_index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Re-sync the spatial index entry of an item after its geometry changed.
    pub(crate) fn update_spatial_index(&mut self, id: ItemId) {
        if let Some(item) = self.items.iter().find(|item| item.id == id) {
            self.index.update(id, item.bounds);
        }
    }
}

// ============================================================================
// Document
// ============================================================================

/// Pages in print order plus the current page cursor.
#[derive(Debug)]
pub struct Document {
    pages: Vec<Page>,
    current_page: usize,
    paper: PaperSize,
    next_item_id: ItemId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A4 document with one empty page.
    pub fn new() -> Self {
        Self::with_paper(PaperSize::default())
    }

    pub fn with_paper(paper: PaperSize) -> Self {
        Self {
            pages: vec![Page::new()],
            current_page: 0,
            paper,
            next_item_id: 0,
        }
    }

    /// Assemble a document from loaded pages. An empty list yields one blank
    /// page and `current_page` is clamped into range.
    pub(crate) fn from_pages(mut pages: Vec<Page>, current_page: i64, paper: PaperSize) -> Self {
        if pages.is_empty() {
            pages.push(Page::new());
        }
        let last = pages.len() as i64 - 1;
        let next_item_id = pages
            .iter()
            .flat_map(|page| page.items.iter().map(|item| item.id + 1))
            .max()
            .unwrap_or(0);

        Self {
            current_page: current_page.clamp(0, last) as usize,
            pages,
            paper,
            next_item_id,
        }
    }

    pub fn paper(&self) -> PaperSize {
        self.paper
    }

    /// Page size in points.
    pub fn page_size(&self) -> Size {
        self.paper.size()
    }

    pub(crate) fn allocate_item_id(&mut self) -> ItemId {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    /// Create an item with default geometry for this document's paper.
    /// The item is not placed on any page yet.
    pub fn create_item(&mut self, image: ImageHandle) -> Item {
        let id = self.allocate_item_id();
        Item::new(id, image, self.page_size())
    }

    /// Create an item with explicit geometry, clamped into the item
    /// invariants.
    pub fn create_item_with_geometry(&mut self, image: ImageHandle, bounds: Rect, crop: CropRect) -> Item {
        let id = self.allocate_item_id();
        Item::from_parts(id, image, bounds, crop)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.current_page]
    }

    pub fn current_page_mut(&mut self) -> &mut Page {
        &mut self.pages[self.current_page]
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn set_current_page(&mut self, index: usize) -> bool {
        if index >= self.pages.len() {
            return false;
        }
        self.current_page = index;
        true
    }

    /// Append an empty page and make it current. Returns its index.
    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::new());
        self.current_page = self.pages.len() - 1;
        debug!(page = self.current_page, "add page");
        self.current_page
    }

    /// Remove the current page unless it is the only one.
    pub fn remove_current_page(&mut self) -> bool {
        if self.pages.len() <= 1 {
            return false;
        }
        self.pages.remove(self.current_page);
        if self.current_page >= self.pages.len() {
            self.current_page = self.pages.len() - 1;
        }
        debug!(page = self.current_page, "remove page");
        true
    }

    /// Swap the current page with the previous one; the cursor follows it.
    pub fn move_page_up(&mut self) -> bool {
        if self.current_page == 0 {
            return false;
        }
        self.pages.swap(self.current_page, self.current_page - 1);
        self.current_page -= 1;
        true
    }

    /// Swap the current page with the next one; the cursor follows it.
    pub fn move_page_down(&mut self) -> bool {
        if self.current_page + 1 >= self.pages.len() {
            return false;
        }
        self.pages.swap(self.current_page, self.current_page + 1);
        self.current_page += 1;
        true
    }

    /// Locate an item on any page.
    pub fn find_item(&self, id: ItemId) -> Option<(usize, &Item)> {
        self.pages
            .iter()
            .enumerate()
            .find_map(|(index, page)| page.get_item(id).map(|item| (index, item)))
    }
}
