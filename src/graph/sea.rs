//! Sea transits
//!
//! A journey that passes through exactly one sea counts as a connection:
//! London reaches Le Havre by boat because both touch the English Channel.
//! Nothing longer than one hop is inferred.

use super::{Adjacency, Location, Mode};
use crate::testing::{CaseSource, TestCase};

/// Locations that may be crossed as a single hop
pub const SEAS: [&str; 10] = [
    "Adriatic Sea",
    "Atlantic Ocean",
    "Bay of Biscay",
    "Black Sea",
    "English Channel",
    "Ionian Sea",
    "Irish Sea",
    "Mediterranean Sea",
    "North Sea",
    "Tyrrhenian Sea",
];

pub fn is_sea(location: &str) -> bool {
    SEAS.contains(&location)
}

/// Expected modes from `start` to `end`
///
/// Direct edges contribute their own modes. A sea neighbour of `start` that
/// has an edge to `end` contributes the modes of that second leg. Modes are
/// appended in neighbour order; duplicates are kept.
pub fn connections(adjacency: &Adjacency, start: &str, end: &str) -> Vec<Mode> {
    let mut modes = Vec::new();
    for (adjacent, direct) in adjacency.neighbours(start) {
        if adjacent.as_str() == end {
            modes.extend_from_slice(direct);
        } else if is_sea(adjacent.as_str()) && adjacency.has_edge(adjacent.as_str(), end) {
            modes.extend_from_slice(adjacency.modes(adjacent.as_str(), end));
        }
    }
    modes
}

/// Derive a test case for every ordered pair of origins, self-pairs included
///
/// Cases come out in origin order, outer loop over the start. Pairs without
/// any connection are still emitted with an empty expectation.
pub fn expand(adjacency: &Adjacency) -> Vec<TestCase> {
    let mut cases = Vec::with_capacity(adjacency.origin_count() * adjacency.origin_count());
    for start in adjacency.origins() {
        for end in adjacency.origins() {
            cases.push(TestCase {
                from: start.clone(),
                to: end.clone(),
                expect: connections(adjacency, start.as_str(), end.as_str()),
                source: CaseSource::Derived,
            });
        }
    }
    tracing::debug!(count = cases.len(), "Derived sea transit cases");
    cases
}

/// Seas that appear as origins in this graph
pub fn seas_present(adjacency: &Adjacency) -> Vec<&Location> {
    adjacency.origins().filter(|l| is_sea(l.as_str())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case<'a>(cases: &'a [TestCase], from: &str, to: &str) -> &'a TestCase {
        cases
            .iter()
            .find(|c| c.from.as_str() == from && c.to.as_str() == to)
            .unwrap_or_else(|| panic!("no case for {from} -> {to}"))
    }

    #[test]
    fn test_sea_set() {
        assert_eq!(SEAS.len(), 10);
        assert!(is_sea("English Channel"));
        assert!(is_sea("Atlantic Ocean"));
        assert!(!is_sea("London"));
        assert!(!is_sea("english channel"));
    }

    #[test]
    fn test_one_hop_through_sea() {
        let adjacency = Adjacency::parse(
            "A connects to North Sea by boat\n\
             North Sea connects to B by boat\n",
        );
        assert_eq!(connections(&adjacency, "A", "B"), vec![Mode::Boat]);
    }

    #[test]
    fn test_no_hop_through_land() {
        let adjacency = Adjacency::parse(
            "A connects to Calais by boat\n\
             Calais connects to B by boat\n",
        );
        assert!(connections(&adjacency, "A", "B").is_empty());
    }

    #[test]
    fn test_only_one_hop() {
        let adjacency = Adjacency::parse(
            "A connects to North Sea by boat\n\
             North Sea connects to English Channel by boat\n\
             English Channel connects to B by boat\n",
        );
        assert!(connections(&adjacency, "A", "B").is_empty());
        assert_eq!(connections(&adjacency, "A", "English Channel"), vec![Mode::Boat]);
    }

    #[test]
    fn test_direct_and_sea_modes_combine_in_neighbour_order() {
        let adjacency = Adjacency::parse(
            "Rome connects to Naples by rail\n\
             Rome connects to Tyrrhenian Sea by boat\n\
             Rome connects to Naples by road\n\
             Tyrrhenian Sea connects to Naples by boat\n",
        );
        assert_eq!(
            connections(&adjacency, "Rome", "Naples"),
            vec![Mode::Rail, Mode::Road, Mode::Boat]
        );
    }

    #[test]
    fn test_two_seas_duplicate_modes() {
        let adjacency = Adjacency::parse(
            "Cagliari connects to Mediterranean Sea by boat\n\
             Cagliari connects to Tyrrhenian Sea by boat\n\
             Mediterranean Sea connects to Genoa by boat\n\
             Tyrrhenian Sea connects to Genoa by boat\n",
        );
        assert_eq!(
            connections(&adjacency, "Cagliari", "Genoa"),
            vec![Mode::Boat, Mode::Boat]
        );
    }

    #[test]
    fn test_self_pair_via_sea() {
        let adjacency = Adjacency::parse(
            "London connects to English Channel by boat\n\
             English Channel connects to London by boat\n",
        );
        let cases = expand(&adjacency);
        assert_eq!(case(&cases, "London", "London").expect, vec![Mode::Boat]);
    }

    #[test]
    fn test_self_loop_edge() {
        let adjacency = Adjacency::parse("X connects to X by boat\n");
        let cases = expand(&adjacency);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].expect, vec![Mode::Boat]);
    }

    #[test]
    fn test_sea_neighbour_equal_to_end_counts_once() {
        let adjacency = Adjacency::parse(
            "Black Sea connects to Ionian Sea by boat\n\
             Ionian Sea connects to Ionian Sea by boat\n",
        );
        assert_eq!(
            connections(&adjacency, "Black Sea", "Ionian Sea"),
            vec![Mode::Boat]
        );
    }

    #[test]
    fn test_expand_covers_all_origin_pairs_in_order() {
        let adjacency = Adjacency::parse(
            "Paris connects to Le Havre by rail\n\
             Le Havre connects to Paris by rail\n\
             Munich connects to Nuremburg by road\n",
        );
        let cases = expand(&adjacency);
        let pairs: Vec<(&str, &str)> = cases
            .iter()
            .map(|c| (c.from.as_str(), c.to.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Paris", "Paris"),
                ("Paris", "Le Havre"),
                ("Paris", "Munich"),
                ("Le Havre", "Paris"),
                ("Le Havre", "Le Havre"),
                ("Le Havre", "Munich"),
                ("Munich", "Paris"),
                ("Munich", "Le Havre"),
                ("Munich", "Munich"),
            ]
        );
        assert!(cases.iter().all(|c| c.source == CaseSource::Derived));
        assert!(case(&cases, "Paris", "Paris").expect.is_empty());
        assert!(case(&cases, "Munich", "Paris").expect.is_empty());
    }

    #[test]
    fn test_destination_only_locations_are_not_expanded() {
        let adjacency = Adjacency::parse("Munich connects to Nuremburg by road\n");
        let cases = expand(&adjacency);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].to.as_str(), "Munich");
    }

    #[test]
    fn test_seas_present() {
        let adjacency = Adjacency::parse(
            "London connects to English Channel by boat\n\
             English Channel connects to London by boat\n",
        );
        let seas: Vec<&str> = seas_present(&adjacency).into_iter().map(Location::as_str).collect();
        assert_eq!(seas, vec!["English Channel"]);
    }
}
