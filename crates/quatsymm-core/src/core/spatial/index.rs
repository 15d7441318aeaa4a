use nalgebra::Point3;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

type CellKey = (i64, i64, i64);

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Spatial index threshold must be finite and positive, got {0}")]
pub struct InvalidThresholdError(pub f64);

/// Collects points for a [`SpatialIndex`].
///
/// Points can only be added here; queries are only possible on the built index, so a
/// half-populated index can never be queried.
#[derive(Debug, Clone)]
pub struct SpatialIndexBuilder<T = usize> {
    threshold: f64,
    points: Vec<(Point3<f64>, T)>,
}

impl<T: Copy> SpatialIndexBuilder<T> {
    pub fn new(threshold: f64) -> Result<Self, InvalidThresholdError> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(InvalidThresholdError(threshold));
        }
        Ok(Self {
            threshold,
            points: Vec::new(),
        })
    }

    pub fn with_capacity(threshold: f64, capacity: usize) -> Result<Self, InvalidThresholdError> {
        let mut builder = Self::new(threshold)?;
        builder.points.reserve(capacity);
        Ok(builder)
    }

    pub fn add_point(&mut self, point: Point3<f64>, id: T) -> &mut Self {
        self.points.push((point, id));
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bins the points into cubic cells of edge `threshold` and precomputes, for every
    /// cell that touches an occupied cell, the ids found in its 3x3x3 neighborhood.
    pub fn build(self) -> SpatialIndex<T> {
        let inv_cell = self.threshold.recip();

        let mut cells: HashMap<CellKey, Vec<usize>> = HashMap::new();
        for (slot, (point, _)) in self.points.iter().enumerate() {
            cells
                .entry(cell_key(point, inv_cell))
                .or_default()
                .push(slot);
        }

        let mut reachable: HashSet<CellKey> = HashSet::with_capacity(cells.len() * 27);
        for &key in cells.keys() {
            reachable.extend(neighborhood(key));
        }

        let mut neighborhoods: HashMap<CellKey, Neighborhood<T>> =
            HashMap::with_capacity(reachable.len());
        for key in reachable {
            let mut slots: Vec<usize> = neighborhood(key)
                .filter_map(|k| cells.get(&k))
                .flatten()
                .copied()
                .collect();
            // Keys clamped at the edge of the grid repeat within a neighborhood.
            slots.sort_unstable();
            slots.dedup();
            let ids = slots.iter().map(|&s| self.points[s].1).collect();
            neighborhoods.insert(key, Neighborhood { slots, ids });
        }

        SpatialIndex {
            threshold: self.threshold,
            inv_cell,
            points: self.points,
            neighborhoods,
        }
    }
}

/// An immutable uniform-grid index answering "which points may lie within the threshold
/// of this position?".
///
/// A query returns a superset of the points within `threshold`: every such point is
/// included, and points up to roughly `2 * sqrt(3) * threshold` away may be included as
/// well. Callers that need exact answers filter by distance, or use [`SpatialIndex::within`].
#[derive(Debug, Clone)]
pub struct SpatialIndex<T = usize> {
    threshold: f64,
    inv_cell: f64,
    points: Vec<(Point3<f64>, T)>,
    neighborhoods: HashMap<CellKey, Neighborhood<T>>,
}

/// Points of a 3x3x3 block of cells, as slots into `SpatialIndex::points` and as ids.
#[derive(Debug, Clone)]
struct Neighborhood<T> {
    slots: Vec<usize>,
    ids: Vec<T>,
}

impl<T: Copy> SpatialIndex<T> {
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Candidate ids for `point`, in insertion order.
    pub fn query(&self, point: &Point3<f64>) -> &[T] {
        self.neighborhoods
            .get(&cell_key(point, self.inv_cell))
            .map(|n| n.ids.as_slice())
            .unwrap_or(&[])
    }

    /// Ids and squared distances of the points truly within the threshold of `point`.
    pub fn within(&self, point: &Point3<f64>) -> Vec<(T, f64)> {
        let Some(neighborhood) = self.neighborhoods.get(&cell_key(point, self.inv_cell)) else {
            return Vec::new();
        };
        let threshold_sq = self.threshold * self.threshold;
        neighborhood
            .slots
            .iter()
            .filter_map(|&slot| {
                let (p, id) = &self.points[slot];
                let dist_sq = (p - point).norm_squared();
                (dist_sq <= threshold_sq).then_some((*id, dist_sq))
            })
            .collect()
    }
}

fn cell_key(point: &Point3<f64>, inv_cell: f64) -> CellKey {
    (
        (point.x * inv_cell).floor() as i64,
        (point.y * inv_cell).floor() as i64,
        (point.z * inv_cell).floor() as i64,
    )
}

/// The 27 cells around `key`. Offsets saturate, so keys of infinite or enormous
/// coordinates (clamped to the `i64` range by `cell_key`) never overflow.
fn neighborhood((x, y, z): CellKey) -> impl Iterator<Item = CellKey> {
    (-1..=1).flat_map(move |dx: i64| {
        (-1..=1).flat_map(move |dy: i64| {
            (-1..=1).map(move |dz: i64| {
                (
                    x.saturating_add(dx),
                    y.saturating_add(dy),
                    z.saturating_add(dz),
                )
            })
        })
    })
}
