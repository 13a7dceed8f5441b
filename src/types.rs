//! Core types for the cheatsheet layout engine.
//!
//! This module defines the geometric primitives shared by the document model,
//! the coordinate transforms and the interaction state machine, plus the
//! image handle every item owns.

use crate::constants::{
    A4_HEIGHT_PT, A4_WIDTH_PT, LETTER_HEIGHT_PT, LETTER_WIDTH_PT, MIN_CROP_SIZE,
};
use crate::error::{CheatsheetError, Result};
use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Cursor;
use std::ops::{Add, Sub};
use std::path::Path;
use std::sync::Arc;

/// Document-unique item identifier
pub type ItemId = u64;

// ============================================================================
// Geometry
// ============================================================================

/// A point (or delta) in either device or page space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale both components by `1 / divisor`.
    #[inline]
    pub fn div(self, divisor: f64) -> Self {
        Self::new(self.x / divisor, self.y / divisor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height pair in the unit of the owning space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with a top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Inclusive containment on all four edges.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x <= self.right() && p.y <= self.bottom()
    }

    /// Centers of the 8 handles, ordered by [`Handle::index`].
    pub fn handle_points(&self) -> [Point; 8] {
        let (x0, y0, x1, y1) = (self.x, self.y, self.right(), self.bottom());
        let cx = (x0 + x1) / 2.0;
        let cy = (y0 + y1) / 2.0;
        [
            Point::new(x0, y0),
            Point::new(cx, y0),
            Point::new(x1, y0),
            Point::new(x1, cy),
            Point::new(x1, y1),
            Point::new(cx, y1),
            Point::new(x0, y1),
            Point::new(x0, cy),
        ]
    }
}

/// Visible sub-region of an item's source image, in source pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CropRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole image.
    pub fn full(image_width: u32, image_height: u32) -> Self {
        Self::new(0, 0, image_width as i32, image_height as i32)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// `width / height` of the crop.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub(crate) fn to_rect(self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            self.width as f64,
            self.height as f64,
        )
    }

    /// Inverse of [`CropRect::to_rect`]. Inputs are integral by construction.
    pub(crate) fn from_rect(rect: Rect) -> Self {
        Self::new(
            rect.x.round() as i32,
            rect.y.round() as i32,
            rect.width.round() as i32,
            rect.height.round() as i32,
        )
    }

    /// Force the crop inside a `image_width` x `image_height` image, keeping
    /// the minimum crop size.
    pub fn clamped_to(self, image_width: u32, image_height: u32) -> Self {
        let (iw, ih) = (image_width as i32, image_height as i32);
        let width = self.width.clamp(MIN_CROP_SIZE, iw.max(MIN_CROP_SIZE));
        let height = self.height.clamp(MIN_CROP_SIZE, ih.max(MIN_CROP_SIZE));
        Self::new(
            self.x.clamp(0, (iw - width).max(0)),
            self.y.clamp(0, (ih - height).max(0)),
            width,
            height,
        )
    }

    /// True when the crop satisfies every bounds invariant for the image.
    pub fn is_within(&self, image_width: u32, image_height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width >= MIN_CROP_SIZE
            && self.height >= MIN_CROP_SIZE
            && self.right() <= image_width as i32
            && self.bottom() <= image_height as i32
    }
}

// ============================================================================
// Paper
// ============================================================================

/// Fixed paper format every page of a document uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PaperSize {
    /// Page size in points.
    pub fn size(&self) -> Size {
        match self {
            PaperSize::A4 => Size::new(A4_WIDTH_PT, A4_HEIGHT_PT),
            PaperSize::Letter => Size::new(LETTER_WIDTH_PT, LETTER_HEIGHT_PT),
            PaperSize::Custom { width, height } => Size::new(*width, *height),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::Letter => "Letter",
            PaperSize::Custom { .. } => "Custom",
        }
    }
}

// ============================================================================
// Handles
// ============================================================================

/// One of the 8 control points on a box, clockwise from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::Top,
        Handle::TopRight,
        Handle::Right,
        Handle::BottomRight,
        Handle::Bottom,
        Handle::BottomLeft,
        Handle::Left,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn moves_left(self) -> bool {
        matches!(self, Handle::TopLeft | Handle::Left | Handle::BottomLeft)
    }

    pub fn moves_right(self) -> bool {
        matches!(self, Handle::TopRight | Handle::Right | Handle::BottomRight)
    }

    pub fn moves_top(self) -> bool {
        matches!(self, Handle::TopLeft | Handle::Top | Handle::TopRight)
    }

    pub fn moves_bottom(self) -> bool {
        matches!(self, Handle::BottomLeft | Handle::Bottom | Handle::BottomRight)
    }

    /// Shift the edges adjacent to this handle by `(dx, dy)`.
    ///
    /// Left/top edges move the origin and shrink the size; right/bottom edges
    /// only change the size. Sizes below `min` are clamped, and when a
    /// left/top edge was dragged past its opposite edge the origin is pinned
    /// so that opposite edge stays where it was.
    pub fn resize_rect(self, original: Rect, dx: f64, dy: f64, min: f64) -> Rect {
        let mut rect = original;

        if self.moves_left() {
            rect.x = original.x + dx;
            rect.width = original.width - dx;
        }
        if self.moves_right() {
            rect.width = original.width + dx;
        }
        if self.moves_top() {
            rect.y = original.y + dy;
            rect.height = original.height - dy;
        }
        if self.moves_bottom() {
            rect.height = original.height + dy;
        }

        if rect.width < min {
            if self.moves_left() {
                rect.x = original.right() - min;
            }
            rect.width = min;
        }
        if rect.height < min {
            if self.moves_top() {
                rect.y = original.bottom() - min;
            }
            rect.height = min;
        }

        rect
    }
}

// ============================================================================
// Images
// ============================================================================

/// Shared reference to a decoded source image.
///
/// Each item holds one handle; the pixel buffer is released when the last
/// handle is dropped. Cloning is cheap and lets a renderer keep pixels
/// alive independently of the document.
#[derive(Clone)]
pub struct ImageHandle {
    pixels: Arc<DynamicImage>,
}

impl ImageHandle {
    /// Wrap a decoded image. Images smaller than the minimum crop are rejected.
    pub fn new(pixels: DynamicImage) -> Result<Self> {
        let (width, height) = (pixels.width(), pixels.height());
        let min = MIN_CROP_SIZE as u32;
        if width < min || height < min {
            return Err(CheatsheetError::ImageTooSmall {
                width,
                height,
                min: MIN_CROP_SIZE,
            });
        }
        Ok(Self {
            pixels: Arc::new(pixels),
        })
    }

    /// Decode an image from encoded bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(image::load_from_memory(bytes)?)
    }

    /// Decode an image file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(image::open(path.as_ref())?)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    /// Encode the pixels as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.pixels.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
