//! Unit tests for coordinates and proximity ranking.
