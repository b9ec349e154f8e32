//! Axis-aligned rectangles and the overlap test used by every hit, hurt and
//! guard check.
//!
//! Rectangles are in screen space: `x` grows to the right and `y` grows
//! downward, with `(x, y)` the top-left corner.
//!
//! # Example
//!
//! ```
//! use twinplane_core::geometry::{overlaps, Rect};
//!
//! let a = Rect::new(0.0, 0.0, 10.0, 10.0);
//! assert!(!overlaps(a, Rect::new(10.0, 0.0, 10.0, 10.0)));
//! assert!(overlaps(a, Rect::new(9.0, 0.0, 10.0, 10.0)));
//! ```

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (`x + w`).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge (`y + h`).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Horizontal centre.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Returns this rectangle moved down by `dy`.
    #[must_use]
    pub fn shifted_y(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    /// Returns this rectangle shrunk horizontally by `pad` on both sides.
    #[must_use]
    pub fn inset_x(self, pad: f32) -> Self {
        Self {
            x: self.x + pad,
            w: self.w - pad * 2.0,
            ..self
        }
    }

    /// Overlap test against another rectangle. See [`overlaps`].
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(*self, *other)
    }
}

/// Returns true when the interiors of `a` and `b` intersect.
///
/// Touching edges do not count: two rectangles sharing only a border are
/// not overlapping.
#[must_use]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod overlap_tests {
        use super::*;

        #[test]
        fn edge_touching_is_not_overlap() {
            let a = Rect::new(0.0, 0.0, 10.0, 10.0);
            let b = Rect::new(10.0, 0.0, 10.0, 10.0);
            assert!(!overlaps(a, b));
            assert!(!overlaps(b, a));
        }

        #[test]
        fn one_pixel_overlap_counts() {
            let a = Rect::new(0.0, 0.0, 10.0, 10.0);
            let b = Rect::new(9.0, 0.0, 10.0, 10.0);
            assert!(overlaps(a, b));
        }

        #[test]
        fn vertical_edge_touching_is_not_overlap() {
            let a = Rect::new(0.0, 0.0, 10.0, 10.0);
            let b = Rect::new(0.0, 10.0, 10.0, 10.0);
            assert!(!a.overlaps(&b));
        }

        #[test]
        fn containment_overlaps() {
            let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
            let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
            assert!(overlaps(outer, inner));
            assert!(overlaps(inner, outer));
        }
    }

    mod transform_tests {
        use super::*;

        #[test]
        fn inset_shrinks_both_sides() {
            let r = Rect::new(10.0, 0.0, 48.0, 86.0).inset_x(6.0);
            assert!((r.x - 16.0).abs() < f32::EPSILON);
            assert!((r.w - 36.0).abs() < f32::EPSILON);
            assert!((r.right() - 52.0).abs() < f32::EPSILON);
        }

        #[test]
        fn shift_moves_only_y() {
            let r = Rect::new(1.0, 2.0, 3.0, 4.0).shifted_y(48.0);
            assert_eq!(r, Rect::new(1.0, 50.0, 3.0, 4.0));
        }
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..200.0, ah in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..200.0, bh in 0.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(a, b), overlaps(b, a));
        }

        #[test]
        fn shared_plane_offset_preserves_overlap(
            ax in -500.0f32..500.0, bx in -500.0f32..500.0,
            dy in prop::sample::select(vec![0.0f32, 48.0]),
        ) {
            let a = Rect::new(ax, 0.0, 30.0, 16.0);
            let b = Rect::new(bx, 4.0, 36.0, 86.0);
            prop_assert_eq!(overlaps(a, b), overlaps(a.shifted_y(dy), b.shifted_y(dy)));
        }
    }
}
