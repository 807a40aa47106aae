//! Containment predicates over a polygon set.
//!
//! Two engine paths with identical semantics:
//! - [`PreparedSet`] wraps each member in the library's prepared
//!   (edge-indexed) form and answers repeated queries through `Relate`.
//! - [`contains_naive`] runs the plain `Contains` predicate per query.

use geo::{Contains, PreparedGeometry, Relate};
use geo_types::Geometry;

/// Which engine path the timed loop exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredicateMode {
    Prepared,
    Naive,
}

impl PredicateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredicateMode::Prepared => "prepared",
            PredicateMode::Naive => "naive",
        }
    }
}

/// Prepared (spatially indexed) forms of a polygon set.
///
/// Built once per run; preparation cost stays outside the timed loop.
pub struct PreparedSet<'a> {
    members: Vec<PreparedGeometry<'a, f64>>,
}

impl<'a> PreparedSet<'a> {
    pub fn build(members: &'a [Geometry<f64>]) -> Self {
        Self {
            members: members.iter().map(|g| PreparedGeometry::from(g)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True iff any member contains `probe`.
    ///
    /// Boundary semantics are the engine's: a probe lying exactly on a
    /// member's boundary is not contained.
    pub fn contains(&self, probe: &Geometry<f64>) -> bool {
        self.members.iter().any(|m| m.relate(probe).is_contains())
    }
}

/// Unprepared counterpart of [`PreparedSet::contains`].
pub fn contains_naive(members: &[Geometry<f64>], probe: &Geometry<f64>) -> bool {
    members.iter().any(|m| m.contains(probe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{polygon, Point};
    use proptest::prelude::*;

    fn unit_square() -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
        ])
    }

    fn far_square() -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: 10.0, y: 10.0),
            (x: 11.0, y: 10.0),
            (x: 11.0, y: 11.0),
            (x: 10.0, y: 11.0),
        ])
    }

    #[test]
    fn any_member_may_contain() {
        let members = vec![unit_square(), far_square()];
        let set = PreparedSet::build(&members);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Geometry::Point(Point::new(0.5, 0.5))));
        assert!(set.contains(&Geometry::Point(Point::new(10.5, 10.5))));
        assert!(!set.contains(&Geometry::Point(Point::new(5.0, 5.0))));
    }

    #[test]
    fn boundary_probes_are_outside() {
        let members = vec![unit_square()];
        let set = PreparedSet::build(&members);
        assert!(!set.contains(&Geometry::Point(Point::new(1.0, 0.5))));
        assert!(!contains_naive(&members, &Geometry::Point(Point::new(0.0, 0.0))));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let members: Vec<Geometry<f64>> = Vec::new();
        let set = PreparedSet::build(&members);
        assert!(set.is_empty());
        assert!(!set.contains(&Geometry::Point(Point::new(0.0, 0.0))));
        assert!(!contains_naive(&members, &Geometry::Point(Point::new(0.0, 0.0))));
    }

    proptest! {
        #[test]
        fn engine_paths_agree(x in -2.0..2.0f64, y in -2.0..2.0f64) {
            let members = vec![unit_square(), far_square()];
            let set = PreparedSet::build(&members);
            let probe = Geometry::Point(Point::new(x, y));
            prop_assert_eq!(set.contains(&probe), contains_naive(&members, &probe));
        }
    }
}
