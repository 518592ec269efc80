// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

//! Classifies how one display rectangle overlaps another, and snaps it into
//! the closest of five canonical relationships: placed before it, placed
//! after it, centered on it, or aligned to its minimum or maximum edge.
//!
//! The two axes are handled independently. A computation takes a fixed
//! `base` rectangle and a `current` rectangle, classifies each edge of the
//! current interval against the base with the ranked [`Overlap`] taxonomy,
//! resolves that [`Relation`] to an [`Alignment`] per axis, and applies the
//! alignment by translating the current interval. Sizes are never changed.

pub mod alignment;
pub use alignment::Alignment;

pub mod interval;
pub use interval::Interval;

pub mod overlap;
pub use overlap::{Overlap, Relation};

pub mod rect;
pub use rect::{Rect, RectAlignment, RectRelation};
