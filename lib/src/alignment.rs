// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use std::fmt::Display;

use crate::{Interval, Overlap, Relation};

/// The repositioning rule chosen for one axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Alignment {
    /// Place the current interval before the base, edges touching.
    Before,
    /// Place the current interval after the base, edges touching.
    After,
    /// Center the current interval on the base's midpoint.
    Center,
    /// Align the current interval's start to the base's start.
    SnapMin,
    /// Align the current interval's end to the base's end.
    SnapMax,
}

impl Alignment {
    /// Resolves the closest alignment of `curr` to `base` on one axis.
    ///
    /// The first two arms pick a side when there is no meaningful overlap.
    /// Strictly nested and fully spanning intervals center on the base.
    /// Every remaining combination hangs off one edge more than the other
    /// and is settled by comparing midpoints.
    #[must_use]
    pub fn closest(base: &Interval, curr: &Interval) -> Self {
        use Overlap::{Adjacent, Aligned, Cleared, Inside, StickingOut};

        let rel = Relation::between(base, curr);

        match (rel.min_side, rel.max_side) {
            (Cleared | Adjacent, _) => Self::Before,
            (_, Cleared | Adjacent) => Self::After,
            (Inside, Inside) | (StickingOut, StickingOut) => Self::Center,
            (StickingOut | Aligned | Inside, StickingOut | Aligned | Inside) => {
                if curr.mid() < base.mid() {
                    Self::SnapMin
                } else {
                    Self::SnapMax
                }
            }
        }
    }

    /// Applies this alignment to `curr`, translating it relative to `base`.
    ///
    /// The interval setters shift the start position only, so the size of
    /// `curr` is unchanged by every arm.
    pub fn apply(self, curr: &mut Interval, base: &Interval) {
        match self {
            Self::Before => curr.set_max(base.min),
            Self::After => curr.set_min(base.max()),
            Self::Center => curr.set_mid(base.mid()),
            Self::SnapMin => curr.set_min(base.min),
            Self::SnapMax => curr.set_max(base.max()),
        }
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Alignment::Before => "before",
            Alignment::After => "after",
            Alignment::Center => "center",
            Alignment::SnapMin => "min",
            Alignment::SnapMax => "max",
        })
    }
}

impl TryFrom<&str> for Alignment {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(match value {
            "before" => Alignment::Before,
            "after" => Alignment::After,
            "center" => Alignment::Center,
            "min" => Alignment::SnapMin,
            "max" => Alignment::SnapMax,
            _ => return Err("unknown alignment variant"),
        })
    }
}
