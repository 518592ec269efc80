// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use crate::{Alignment, Interval, Relation};

/// An axis-aligned display bounding box: one [`Interval`] per axis.
///
/// Every relation, alignment, and mutation operates per axis with no
/// coupling between the two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: Interval,
    pub y: Interval,
}

/// Per-axis overlap classification of a rectangle pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RectRelation {
    pub x: Relation,
    pub y: Relation,
}

/// Per-axis alignment decision for a rectangle pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RectAlignment {
    pub x: Alignment,
    pub y: Alignment,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: (f64, f64), size: (f64, f64)) -> Self {
        Self {
            x: Interval::new(origin.0, size.0),
            y: Interval::new(origin.1, size.1),
        }
    }

    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        (self.x.min, self.y.min)
    }

    /// Classifies this rectangle against `base` on each axis.
    #[must_use]
    pub fn relation_to(&self, base: &Rect) -> RectRelation {
        RectRelation {
            x: Relation::between(&base.x, &self.x),
            y: Relation::between(&base.y, &self.y),
        }
    }

    /// Resolves the closest alignment of this rectangle to `base` on each
    /// axis.
    #[must_use]
    pub fn closest_alignment(&self, base: &Rect) -> RectAlignment {
        let alignment = RectAlignment {
            x: Alignment::closest(&base.x, &self.x),
            y: Alignment::closest(&base.y, &self.y),
        };

        tracing::debug!(relation = ?self.relation_to(base), ?alignment, "resolved alignment");

        alignment
    }

    /// Translates this rectangle into the given relationship with `base`.
    /// Width and height are unchanged.
    pub fn align_to(&mut self, base: &Rect, alignment: RectAlignment) {
        alignment.x.apply(&mut self.x, &base.x);
        alignment.y.apply(&mut self.y, &base.y);
    }
}
