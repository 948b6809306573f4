//! Ordering of matched overrides from least to most specific.
//!
//! Overrides are ranked by cardinality first, so `default` always comes
//! first. Overrides with the same cardinality are ranked by the positions of
//! their dimensions in the caller's priority order: each override's positions
//! are sorted ascending and the two lists compared lexicographically, the
//! smaller list applying first. Dimensions missing from the order rank
//! [`UNRANKED`], which is the same position as the first listed dimension.
//! Overrides that still tie keep their discovery order.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::{Override, Tuple};

/// Rank given to dimensions that do not appear in the priority order.
pub const UNRANKED: usize = 0;

/// Lookup from dimension name to its position in the priority order.
///
/// A dimension listed more than once keeps its last position.
#[derive(Debug, Clone, Default)]
pub struct Priorities<'a>(HashMap<&'a str, usize>);

impl<'a> Priorities<'a> {
    /// Builds the lookup for `order`, lowest priority first.
    #[must_use]
    pub fn new<S: AsRef<str>>(order: &'a [S]) -> Self {
        Self(
            order
                .iter()
                .enumerate()
                .map(|(position, dimension)| (<S as AsRef<str>>::as_ref(dimension), position))
                .collect(),
        )
    }

    /// Position of `dimension`, or [`UNRANKED`] when it is not listed.
    #[must_use]
    pub fn rank(&self, dimension: &str) -> usize {
        self.0.get(dimension).copied().unwrap_or(UNRANKED)
    }

    /// Ascending ranks of every dimension constrained by `tuple`.
    #[must_use]
    pub fn ranks(&self, tuple: &Tuple) -> Vec<usize> {
        let mut ranks: Vec<usize> = tuple.dimensions().map(|d| self.rank(d)).collect();
        ranks.sort_unstable();
        ranks
    }
}

/// Compares two tuples by specificity.
///
/// # Examples
///
/// ```
/// use genconf::Tuple;
/// use genconf::specificity::{Priorities, compare};
/// use std::cmp::Ordering;
///
/// let order = ["env", "type", "color"];
/// let priorities = Priorities::new(&order);
/// let by_type: Tuple = [("env", "prod"), ("type", "foo")].into_iter().collect();
/// let by_color: Tuple = [("env", "prod"), ("color", "green")].into_iter().collect();
/// assert_eq!(compare(&by_type, &by_color, &priorities), Ordering::Less);
/// assert_eq!(compare(&Tuple::default(), &by_type, &priorities), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &Tuple, b: &Tuple, priorities: &Priorities<'_>) -> Ordering {
    a.cardinality()
        .cmp(&b.cardinality())
        .then_with(|| priorities.ranks(a).cmp(&priorities.ranks(b)))
}

/// Sorts `overrides` into application order for the priority `order`.
///
/// The sort is stable, so overrides that compare equal keep their relative
/// positions.
pub fn sort_overrides<S: AsRef<str>>(overrides: &mut [Override], order: &[S]) {
    let priorities = Priorities::new(order);
    overrides.sort_by(|a, b| compare(a.tuple(), b.tuple(), &priorities));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    fn over(name: &str, pairs: &[(&str, &str)]) -> Override {
        Override::new(pairs.iter().copied().collect(), PathBuf::from(name))
    }

    fn names(overrides: &[Override]) -> Vec<String> {
        overrides
            .iter()
            .map(|o| o.path().display().to_string())
            .collect()
    }

    fn scenario() -> Vec<Override> {
        vec![
            over("color", &[("env", "prod"), ("color", "green")]),
            over("type", &[("env", "prod"), ("type", "foo")]),
            over("prod", &[("env", "prod")]),
            over("default", &[]),
        ]
    }

    #[rstest]
    #[case::type_before_color(&["env", "type", "color"], &["default", "prod", "type", "color"])]
    #[case::color_before_type(&["env", "color", "type"], &["default", "prod", "color", "type"])]
    fn cardinality_then_priority(#[case] order: &[&str], #[case] expected: &[&str]) {
        let mut overrides = scenario();
        sort_overrides(&mut overrides, order);
        assert_eq!(names(&overrides), expected);
    }

    #[rstest]
    #[case::empty_order(&[])]
    #[case::reversed(&["color", "type", "env"])]
    #[case::unrelated(&["region"])]
    fn default_is_always_first(#[case] order: &[&str]) {
        let mut overrides = scenario();
        sort_overrides(&mut overrides, order);
        assert_eq!(
            overrides.first().map(|o| o.path().to_path_buf()),
            Some(PathBuf::from("default"))
        );
    }

    #[test]
    fn unranked_dimensions_tie_with_first_ranked() {
        let order = ["env", "color"];
        let priorities = Priorities::new(&order);
        assert_eq!(priorities.rank("region"), priorities.rank("env"));

        let mut overrides = vec![
            over("color", &[("color", "green")]),
            over("region", &[("region", "eu")]),
            over("env", &[("env", "prod")]),
        ];
        sort_overrides(&mut overrides, &order);
        assert_eq!(names(&overrides), ["region", "env", "color"]);
    }

    #[test]
    fn full_ties_keep_discovery_order() {
        let mut overrides = vec![
            over("b", &[("env", "prod")]),
            over("a", &[("env", "prod")]),
            over("c", &[("env", "prod")]),
        ];
        sort_overrides(&mut overrides, &["env"]);
        assert_eq!(names(&overrides), ["b", "a", "c"]);
    }

    #[test]
    fn rank_lists_compare_after_sorting() {
        // {type, color} ranks [1, 2] and {env, color} ranks [0, 2].
        let order = ["env", "type", "color"];
        let mut overrides = vec![
            over("type-color", &[("type", "foo"), ("color", "green")]),
            over("env-color", &[("env", "prod"), ("color", "green")]),
        ];
        sort_overrides(&mut overrides, &order);
        assert_eq!(names(&overrides), ["env-color", "type-color"]);
    }

    #[test]
    fn duplicate_order_entries_keep_last_position() {
        let order = ["env", "color", "env"];
        let priorities = Priorities::new(&order);
        assert_eq!(priorities.rank("env"), 2);
        assert_eq!(priorities.rank("color"), 1);
    }

    #[test]
    fn sorting_is_deterministic() {
        let order = ["env", "color", "type"];
        let mut first = scenario();
        let mut second = scenario();
        second.reverse();
        sort_overrides(&mut first, &order);
        sort_overrides(&mut second, &order);
        assert_eq!(names(&first), names(&second));
    }
}
