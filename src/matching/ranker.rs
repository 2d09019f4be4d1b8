//! Deterministic proximity ranking of candidates.

use super::Coordinates;
use std::cmp::Ordering;

/// A candidate record offered for ranking: an identifier plus an
/// optional resolved location.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<I> {
    id: I,
    coordinates: Option<Coordinates>,
}

impl<I> Candidate<I> {
    /// Creates a candidate with a known location.
    #[must_use]
    pub const fn located(id: I, coordinates: Coordinates) -> Self {
        Self {
            id,
            coordinates: Some(coordinates),
        }
    }

    /// Creates a candidate whose location is unknown.
    #[must_use]
    pub const fn unlocated(id: I) -> Self {
        Self {
            id,
            coordinates: None,
        }
    }

    /// Returns the candidate identifier.
    #[must_use]
    pub const fn id(&self) -> &I {
        &self.id
    }

    /// Returns the candidate's coordinates, if known.
    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }
}

/// A ranked candidate: the identifier plus the distance from the origin
/// in kilometres, or `None` when either side lacks coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate<I> {
    id: I,
    distance_km: Option<f64>,
}

impl<I> RankedCandidate<I> {
    /// Returns the candidate identifier.
    #[must_use]
    pub const fn id(&self) -> &I {
        &self.id
    }

    /// Returns the distance from the origin in kilometres, if known.
    #[must_use]
    pub const fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }
}

/// Orders candidates by great-circle distance from `origin`.
///
/// Candidates with known coordinates come first in ascending distance;
/// candidates without coordinates follow with a `None` distance. Ties
/// (including among unlocated candidates) break on the candidate
/// identifier, so the output is deterministic regardless of input
/// order. When `origin` is `None` the input (store) order is preserved
/// unchanged and every distance is `None`.
#[must_use]
pub fn rank_by_proximity<I: Ord>(
    origin: Option<Coordinates>,
    candidates: Vec<Candidate<I>>,
) -> Vec<RankedCandidate<I>> {
    let Some(origin_coords) = origin else {
        return candidates
            .into_iter()
            .map(|candidate| RankedCandidate {
                id: candidate.id,
                distance_km: None,
            })
            .collect();
    };

    let mut ranked: Vec<RankedCandidate<I>> = candidates
        .into_iter()
        .map(|candidate| RankedCandidate {
            distance_km: candidate
                .coordinates
                .map(|coords| origin_coords.distance_km(coords)),
            id: candidate.id,
        })
        .collect();
    ranked.sort_by(|a, b| compare_ranked(a, b));
    ranked
}

/// Total order over ranked candidates: known distances ascending, then
/// unknown distances, with the identifier as the final tiebreak.
fn compare_ranked<I: Ord>(a: &RankedCandidate<I>, b: &RankedCandidate<I>) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(lhs), Some(rhs)) => lhs
            .partial_cmp(&rhs)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}
