use serde::Serialize;

use crate::shared::geo::Coordinate;

/// How far the user has got in picking the two route endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    Empty,
    HasA,
    HasAB,
}

impl SelectionState {
    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionState::Empty)
    }
}

/// Holds point A and point B. B can only exist alongside A.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore {
    a: Option<Coordinate>,
    b: Option<Coordinate>,
}

impl PointStore {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn point_a(&self) -> Option<Coordinate> {
        self.a
    }

    pub fn point_b(&self) -> Option<Coordinate> {
        self.b
    }

    pub fn pair(&self) -> Option<(Coordinate, Coordinate)> {
        Some((self.a?, self.b?))
    }

    pub fn state(&self) -> SelectionState {
        match (self.a, self.b) {
            (None, _) => SelectionState::Empty,
            (Some(_), None) => SelectionState::HasA,
            (Some(_), Some(_)) => SelectionState::HasAB,
        }
    }

    /// Returns `false` and leaves the store untouched when A is already set.
    pub fn set_a(&mut self, coordinate: Coordinate) -> bool {
        if self.a.is_some() {
            return false;
        }
        self.a = Some(coordinate);
        true
    }

    /// Returns `false` unless A is set and B is free.
    pub fn set_b(&mut self, coordinate: Coordinate) -> bool {
        if self.a.is_none() || self.b.is_some() {
            return false;
        }
        self.b = Some(coordinate);
        true
    }

    pub fn clear(&mut self) {
        self.a = None;
        self.b = None;
    }
}

#[test]
fn b_requires_a() {
    let mut store = PointStore::new();
    assert!(!store.set_b(Coordinate::from((1.0, 1.0))));
    assert_eq!(store.state(), SelectionState::Empty);
    assert!(store.point_b().is_none());
}

#[test]
fn fills_in_order() {
    let mut store = PointStore::new();
    assert!(store.set_a(Coordinate::from((1.0, 1.0))));
    assert_eq!(store.state(), SelectionState::HasA);
    assert!(store.set_b(Coordinate::from((2.0, 2.0))));
    assert_eq!(store.state(), SelectionState::HasAB);
    assert_eq!(
        store.pair(),
        Some((Coordinate::from((1.0, 1.0)), Coordinate::from((2.0, 2.0))))
    );
    assert!(!store.set_b(Coordinate::from((3.0, 3.0))));
    assert_eq!(store.point_b(), Some(Coordinate::from((2.0, 2.0))));
}

#[test]
fn clear_is_all_or_nothing() {
    let mut store = PointStore::new();
    store.set_a(Coordinate::from((1.0, 1.0)));
    store.set_b(Coordinate::from((2.0, 2.0)));
    store.clear();
    assert_eq!(store, PointStore::new());
}
