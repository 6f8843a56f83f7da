//! Entity queries over a tick's units.
//!
//! Lookups by kind follow a *rank before distance* policy: the configured
//! kind ids are tried in order, and within one rank the nearest living unit
//! wins. Ranks are never merged, so a farther rank-1 unit is always preferred
//! over a closer rank-2 unit.

use crate::world::{Guid, KindId, Unit};

/// Returns the nearest living unit of the highest-ranked kind that has any.
pub fn nearest_alive<'w>(units: &'w [Unit], kinds: &[KindId]) -> Option<&'w Unit> {
    nearest_alive_where(units, kinds, |_| true)
}

/// Like [`nearest_alive`], restricted to units accepted by `predicate`.
///
/// A rank only counts as matched when at least one of its living units
/// passes the predicate. Units with a non-finite distance are never returned.
pub fn nearest_alive_where<'w, P>(
    units: &'w [Unit],
    kinds: &[KindId],
    predicate: P,
) -> Option<&'w Unit>
where
    P: Fn(&Unit) -> bool,
{
    kinds.iter().find_map(|&kind| {
        units
            .iter()
            .filter(|u| u.entry == kind && u.alive && u.distance.is_finite() && predicate(u))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    })
}

/// Returns the first unit of `kind`, living or dead.
pub fn by_kind(units: &[Unit], kind: KindId) -> Option<&Unit> {
    units.iter().find(|u| u.entry == kind)
}

/// Resolves a unit by its instance identity.
pub fn by_guid(units: &[Unit], guid: Guid) -> Option<&Unit> {
    units.iter().find(|u| u.guid == guid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(guid: u64, entry: u32, distance: f32) -> Unit {
        Unit::new(Guid(guid), KindId(entry), distance)
    }

    #[test]
    fn non_finite_distances_are_skipped() {
        let units = vec![
            unit(1, 200, -f32::NAN),
            unit(2, 200, 9.0),
            unit(3, 200, f32::NEG_INFINITY),
            unit(4, 201, f32::NAN),
        ];

        let found = nearest_alive(&units, &[KindId(200)]).unwrap();
        assert_eq!(found.guid, Guid(2));
        assert!(nearest_alive(&units, &[KindId(201)]).is_none());
    }

    #[test]
    fn picks_nearest_within_rank() {
        let units = vec![unit(1, 200, 12.0), unit(2, 200, 4.0), unit(3, 200, 8.0)];

        let found = nearest_alive(&units, &[KindId(200)]).unwrap();
        assert_eq!(found.guid, Guid(2));
    }

    #[test]
    fn higher_rank_wins_even_when_farther() {
        let units = vec![unit(1, 201, 1.0), unit(2, 200, 30.0)];

        let found = nearest_alive(&units, &[KindId(200), KindId(201)]).unwrap();
        assert_eq!(found.guid, Guid(2));

        let found = nearest_alive(&units, &[KindId(201), KindId(200)]).unwrap();
        assert_eq!(found.guid, Guid(1));
    }

    #[test]
    fn dead_units_are_skipped() {
        let units = vec![unit(1, 200, 1.0).dead(), unit(2, 201, 9.0)];

        let found = nearest_alive(&units, &[KindId(200), KindId(201)]).unwrap();
        assert_eq!(found.guid, Guid(2));
    }

    #[test]
    fn empty_ranks_find_nothing() {
        let units = vec![unit(1, 200, 1.0)];
        assert!(nearest_alive(&units, &[]).is_none());
        assert!(nearest_alive(&units, &[KindId(999)]).is_none());
    }

    #[test]
    fn predicate_falls_through_to_next_rank() {
        let units = vec![unit(1, 300, 2.0), unit(2, 301, 5.0)];

        let found =
            nearest_alive_where(&units, &[KindId(300), KindId(301)], |u| u.guid != Guid(1))
                .unwrap();
        assert_eq!(found.guid, Guid(2));
    }

    #[test]
    fn by_kind_includes_dead_units() {
        let units = vec![unit(1, 100, 5.0).dead()];

        let boss = by_kind(&units, KindId(100)).unwrap();
        assert!(boss.is_dead());
    }
}
