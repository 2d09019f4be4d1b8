//! Proximity matching for Giglocal.
//!
//! Ranks candidate tasks or freelancers by great-circle distance from an
//! actor's resolved location. Geolocation acquisition is an external
//! collaborator: callers pass an already-resolved [`Coordinates`] pair,
//! or `None` when the actor's location is unavailable, in which case
//! ranking degrades to the store's own order. Everything in this module
//! is pure and side-effect free.

mod coordinates;
mod ranker;

pub use coordinates::{Coordinates, CoordinatesError, EARTH_RADIUS_KM};
pub use ranker::{Candidate, RankedCandidate, rank_by_proximity};

#[cfg(test)]
mod tests;
