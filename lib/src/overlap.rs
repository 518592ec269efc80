// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use std::fmt::Display;

use crate::Interval;

/// How one edge of the current interval relates to the base interval.
///
/// The variants are ranked; the resolver relies on this exact order for its
/// `<=`/`>=` comparisons, so the discriminants are spelled out rather than
/// left to declaration order alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Overlap {
    /// Entirely past the edge, with a gap.
    Cleared = 0,
    /// Exactly touching the edge from outside.
    Adjacent = 1,
    /// Crossing the edge.
    StickingOut = 2,
    /// Exactly on the edge.
    Aligned = 3,
    /// Entirely within the edge.
    Inside = 4,
}

impl Display for Overlap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Overlap::Cleared => "cleared",
            Overlap::Adjacent => "adjacent",
            Overlap::StickingOut => "sticking-out",
            Overlap::Aligned => "aligned",
            Overlap::Inside => "inside",
        })
    }
}

/// Per-axis classification of a current interval against a base interval,
/// one [`Overlap`] level for each of the base's two edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Relation {
    pub min_side: Overlap,
    pub max_side: Overlap,
}

impl Relation {
    /// Classifies `curr` against both edges of `base`.
    ///
    /// Each side is an ordered rule chain; the first matching predicate
    /// decides the level, and the chains are total over the reals.
    #[must_use]
    pub fn between(base: &Interval, curr: &Interval) -> Self {
        let min_side = if curr.min > base.min {
            Overlap::Inside
        } else if curr.min == base.min {
            Overlap::Aligned
        } else if curr.max() > base.min {
            Overlap::StickingOut
        } else if curr.max() == base.min {
            Overlap::Adjacent
        } else {
            Overlap::Cleared
        };

        let max_side = if curr.max() < base.max() {
            Overlap::Inside
        } else if curr.max() == base.max() {
            Overlap::Aligned
        } else if curr.min < base.max() {
            Overlap::StickingOut
        } else if curr.min == base.max() {
            Overlap::Adjacent
        } else {
            Overlap::Cleared
        };

        Self { min_side, max_side }
    }
}

#[cfg(test)]
mod tests {
    use super::{Overlap, Relation};
    use crate::Interval;

    const BASE: Interval = Interval::new(0.0, 10.0);

    fn relation(min: f64, size: f64) -> Relation {
        Relation::between(&BASE, &Interval::new(min, size))
    }

    #[test]
    fn rank_order() {
        assert!(Overlap::Cleared < Overlap::Adjacent);
        assert!(Overlap::Adjacent < Overlap::StickingOut);
        assert!(Overlap::StickingOut < Overlap::Aligned);
        assert!(Overlap::Aligned < Overlap::Inside);
    }

    #[test]
    fn reflexive_is_aligned_on_both_sides() {
        let rel = Relation::between(&BASE, &BASE);
        assert_eq!(rel.min_side, Overlap::Aligned);
        assert_eq!(rel.max_side, Overlap::Aligned);
    }

    #[test]
    fn pure_over_repeated_calls() {
        let curr = Interval::new(-3.0, 7.0);
        assert_eq!(
            Relation::between(&BASE, &curr),
            Relation::between(&BASE, &curr)
        );
    }

    #[test]
    fn cleared_on_the_far_side_when_fully_past() {
        let rel = relation(20.0, 5.0);
        assert_eq!(rel.min_side, Overlap::Inside);
        assert_eq!(rel.max_side, Overlap::Cleared);

        let rel = relation(-20.0, 5.0);
        assert_eq!(rel.min_side, Overlap::Cleared);
        assert_eq!(rel.max_side, Overlap::Inside);
    }

    #[test]
    fn adjacent_when_exactly_touching() {
        // curr.max == base.min
        let rel = relation(-5.0, 5.0);
        assert_eq!(rel.min_side, Overlap::Adjacent);
        // curr.min == base.max
        let rel = relation(10.0, 5.0);
        assert_eq!(rel.max_side, Overlap::Adjacent);
    }

    #[test]
    fn nested_is_inside_on_both_sides() {
        let rel = relation(2.0, 4.0);
        assert_eq!(rel.min_side, Overlap::Inside);
        assert_eq!(rel.max_side, Overlap::Inside);
    }

    #[test]
    fn spanning_sticks_out_on_both_sides() {
        let rel = relation(-5.0, 20.0);
        assert_eq!(rel.min_side, Overlap::StickingOut);
        assert_eq!(rel.max_side, Overlap::StickingOut);
    }

    #[test]
    fn min_rule_order_beats_max_edge_touch() {
        // A zero-size interval sitting on base.max: rule 1 of the min side
        // fires before the touch rules are ever consulted.
        let rel = relation(10.0, 0.0);
        assert_eq!(rel.min_side, Overlap::Inside);
        assert_eq!(rel.max_side, Overlap::Aligned);
    }
}
