//! Pixel masks for collision
//!
//! A mask is a `width x height` grid of solid/empty pixels anchored at the
//! top-left of its body's bounding rect. Two bodies collide only if at least
//! one pixel is solid in both masks at the same screen location, so corner
//! overlaps of round sprites do not count.

use serde::{Deserialize, Serialize};

/// Integer screen-space rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    /// Overlapping region of two rects, if any
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let right = self.right().min(other.right());
        let top = self.top().max(other.top());
        let bottom = self.bottom().min(other.bottom());
        if left < right && top < bottom {
            Some(Rect::new(left, top, (right - left) as u32, (bottom - top) as u32))
        } else {
            None
        }
    }
}

/// Fallback shapes used both for masks and for placeholder rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Rect,
    Ellipse,
    Diamond,
}

/// Solid-pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// Build a mask by sampling each pixel centre
    pub fn from_fn(width: u32, height: u32, mut solid: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(solid(x, y));
            }
        }
        Self { width, height, bits }
    }

    /// Rasterize a fallback shape filling `width x height`
    pub fn from_shape(shape: Shape, width: u32, height: u32) -> Self {
        let half_w = width as f32 / 2.0;
        let half_h = height as f32 / 2.0;
        // Normalized offset of a pixel centre from the shape centre
        let norm = move |x: u32, y: u32| {
            (
                (x as f32 + 0.5 - half_w) / half_w,
                (y as f32 + 0.5 - half_h) / half_h,
            )
        };
        match shape {
            Shape::Rect => Self::from_fn(width, height, |_, _| true),
            Shape::Ellipse => Self::from_fn(width, height, |x, y| {
                let (dx, dy) = norm(x, y);
                dx * dx + dy * dy <= 1.0
            }),
            Shape::Diamond => Self::from_fn(width, height, |x, y| {
                let (dx, dy) = norm(x, y);
                dx.abs() + dy.abs() <= 1.0
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    /// Number of solid pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

/// Pixel-level overlap of two masks placed at `a` and `b`
///
/// The rects give each mask's screen placement; only their intersection is
/// scanned.
pub fn masks_overlap(a_rect: &Rect, a: &Mask, b_rect: &Rect, b: &Mask) -> bool {
    let Some(region) = a_rect.intersection(b_rect) else {
        return false;
    };
    for sy in region.top()..region.bottom() {
        for sx in region.left()..region.right() {
            let ax = (sx - a_rect.x) as u32;
            let ay = (sy - a_rect.y) as u32;
            let bx = (sx - b_rect.x) as u32;
            let by = (sy - b_rect.y) as u32;
            if a.get(ax, ay) && b.get(bx, by) {
                return true;
            }
        }
    }
    false
}
