// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distribution and spacing arithmetic along one axis.
//!
//! Every planner takes the items in the caller's order, sorts them internally
//! by their current pivot position (stable, so ties keep input order) and
//! returns one new pivot coordinate per item, aligned index-for-index with the
//! input slice. Items are never dereferenced; the caller applies the results.
//!
//! Two families of spacing exist:
//!
//! - **Center** modes place pivots directly (`start + step * i`).
//! - **Gap** modes walk a cursor from left to right, moving each item so that
//!   its bounds minimum lands on the cursor, then advancing the cursor by the
//!   item width plus the gap. The pivot is translated by the same amount as
//!   the minimum, so off-center pivots are preserved.
//!
//! Fewer than two items are returned unchanged: with a single item there is
//! nothing to space, and the step arithmetic would divide by zero.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Vec2};

/// An item's footprint along the working axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Extent {
    /// Current pivot (origin) coordinate.
    pub position: f64,
    /// Current bounds minimum.
    pub min: f64,
    /// Bounds size; expected to be non-negative.
    pub width: f64,
}

impl Extent {
    /// Creates an extent from a pivot position and bounds minimum/width.
    #[must_use]
    pub const fn new(position: f64, min: f64, width: f64) -> Self {
        Self {
            position,
            min,
            width,
        }
    }

    /// A zero-width extent whose bounds collapse onto its pivot.
    #[must_use]
    pub const fn point(position: f64) -> Self {
        Self::new(position, position, 0.0)
    }

    /// Bounds maximum.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.min + self.width
    }

    /// Pivot coordinate after moving the bounds minimum to `new_min`.
    #[must_use]
    pub fn position_for_min(&self, new_min: f64) -> f64 {
        self.position + (new_min - self.min)
    }
}

/// How consecutive items are spaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SpacingMode {
    /// Equalize (or fix) the distance between pivots.
    #[default]
    Center,
    /// Equalize (or fix) the empty space between item bounds.
    Gap,
}

/// Error returned by [`space_inside`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementError {
    /// The confining range is empty or inverted (`max <= min`).
    InvalidRange {
        /// Requested lower end.
        min: f64,
        /// Requested upper end.
        max: f64,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "range [{min}, {max}] is empty or inverted")
            }
        }
    }
}

impl core::error::Error for PlacementError {}

/// Indices of `extents` sorted by ascending pivot position.
///
/// The sort is stable: items with equal positions keep their input order.
#[must_use]
pub fn sort_by_position(extents: &[Extent]) -> Vec<usize> {
    sort_by_key(extents.len(), |i| extents[i].position)
}

fn sort_by_key(len: usize, key: impl Fn(usize) -> f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.sort_by(|&a, &b| key(a).total_cmp(&key(b)));
    order
}

fn unchanged(extents: &[Extent]) -> Vec<f64> {
    extents.iter().map(|e| e.position).collect()
}

/// Places pivots at `start + step * rank` in sorted order.
fn place_centers(extents: &[Extent], order: &[usize], start: f64, step: f64) -> Vec<f64> {
    let mut out = unchanged(extents);
    for (rank, &i) in order.iter().enumerate() {
        out[i] = start + step * rank as f64;
    }
    out
}

/// Walks a cursor from `start`, butting each item's minimum against it.
fn walk_gaps(extents: &[Extent], order: &[usize], start: f64, gap: f64) -> Vec<f64> {
    let mut out = unchanged(extents);
    let mut cursor = start;
    for &i in order {
        let e = &extents[i];
        out[i] = e.position_for_min(cursor);
        cursor += e.width + gap;
    }
    out
}

fn total_width(extents: &[Extent]) -> f64 {
    extents.iter().map(|e| e.width).sum()
}

/// Spreads items evenly between the first and last (by position).
///
/// - [`SpacingMode::Center`]: `step = (last - first) / (n - 1)`, pivots at
///   `first + step * i`. The two end items stay where they are.
/// - [`SpacingMode::Gap`]: the span runs from the first item's minimum to the
///   last item's maximum; the gap is `(span - sum(widths)) / (n - 1)`. A
///   negative gap (items wider than the span) is allowed and makes the items
///   overlap evenly.
///
/// The canonical use needs at least three items; with two, nothing moves.
#[must_use]
pub fn distribute(extents: &[Extent], mode: SpacingMode) -> Vec<f64> {
    let n = extents.len();
    if n < 2 {
        return unchanged(extents);
    }
    let order = sort_by_position(extents);
    let first = &extents[order[0]];
    let last = &extents[order[n - 1]];
    let steps = (n - 1) as f64;
    match mode {
        SpacingMode::Center => {
            let step = (last.position - first.position) / steps;
            place_centers(extents, &order, first.position, step)
        }
        SpacingMode::Gap => {
            let span = last.max() - first.min;
            let gap = (span - total_width(extents)) / steps;
            walk_gaps(extents, &order, first.min, gap)
        }
    }
}

/// Spaces items by a fixed `distance`, anchored at the first item (by position).
///
/// - [`SpacingMode::Center`]: pivots at `first.position + distance * i`.
/// - [`SpacingMode::Gap`]: the gap walk starting at the first item's minimum,
///   with `distance` as the gap.
#[must_use]
pub fn distribute_by_distance(extents: &[Extent], mode: SpacingMode, distance: f64) -> Vec<f64> {
    if extents.is_empty() {
        return Vec::new();
    }
    let order = sort_by_position(extents);
    let first = &extents[order[0]];
    match mode {
        SpacingMode::Center => place_centers(extents, &order, first.position, distance),
        SpacingMode::Gap => walk_gaps(extents, &order, first.min, distance),
    }
}

/// Spaces items inside the caller-supplied range `[range_min, range_max]`.
///
/// - [`SpacingMode::Center`]: pivots at `range_min + i * span / (n - 1)`.
/// - [`SpacingMode::Gap`]: the gap walk from `range_min`; the total gap is
///   floored at zero, so items that do not fit are packed edge to edge and
///   run past `range_max` instead of overlapping.
///
/// # Errors
///
/// Returns [`PlacementError::InvalidRange`] when `range_max <= range_min`,
/// whatever the number of items.
pub fn space_inside(
    extents: &[Extent],
    mode: SpacingMode,
    range_min: f64,
    range_max: f64,
) -> Result<Vec<f64>, PlacementError> {
    let span = range_max - range_min;
    if span.is_nan() || span <= 0.0 {
        return Err(PlacementError::InvalidRange {
            min: range_min,
            max: range_max,
        });
    }
    let n = extents.len();
    if n < 2 {
        return Ok(unchanged(extents));
    }
    let order = sort_by_position(extents);
    let steps = (n - 1) as f64;
    Ok(match mode {
        SpacingMode::Center => place_centers(extents, &order, range_min, span / steps),
        SpacingMode::Gap => {
            let total_gap = (span - total_width(extents)).max(0.0);
            walk_gaps(extents, &order, range_min, total_gap / steps)
        }
    })
}

/// An item taking part in a grid layout.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GridItem {
    /// Coordinate used to order items before laying them out.
    pub order_key: f64,
    /// Current pivot coordinate and the primary/secondary axes, as `(x, y)`.
    pub position: Point,
}

/// Parameters for [`grid_layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Items per row; `0` is treated as `1`.
    pub columns: usize,
    /// Cell pitch along the primary (`x`) and secondary (`y`) axes.
    pub spacing: Vec2,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 3,
            spacing: Vec2::new(1.0, 1.0),
        }
    }
}

/// Row and column of the `rank`-th item in a grid of `columns` columns.
#[must_use]
pub const fn grid_cell(rank: usize, columns: usize) -> (usize, usize) {
    let columns = if columns == 0 { 1 } else { columns };
    (rank / columns, rank % columns)
}

/// Arranges items on a grid in the plane of the primary/secondary axes.
///
/// Items are sorted by `order_key` (stable). The origin is the first sorted
/// item's current position; the `rank`-th item lands at
/// `origin + (col * spacing.x, row * spacing.y)`. The result is aligned with
/// the input slice.
#[must_use]
pub fn grid_layout(items: &[GridItem], spec: &GridSpec) -> Vec<Point> {
    let order = sort_by_key(items.len(), |i| items[i].order_key);
    let Some(&first) = order.first() else {
        return Vec::new();
    };
    let origin = items[first].position;
    let mut out: Vec<Point> = items.iter().map(|it| it.position).collect();
    for (rank, &i) in order.iter().enumerate() {
        let (row, col) = grid_cell(rank, spec.columns);
        out[i] = Point::new(
            origin.x + col as f64 * spec.spacing.x,
            origin.y + row as f64 * spec.spacing.y,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let e = [Extent::point(1.0), Extent::point(0.0), Extent::point(1.0)];
        assert_eq!(sort_by_position(&e), vec![1, 0, 2]);
    }

    #[test]
    fn equal_center_scenario() {
        let e = [Extent::point(0.0), Extent::point(5.0), Extent::point(3.0)];
        let out = distribute(&e, SpacingMode::Center);
        // Input order preserved: the item at 3 is the middle one.
        assert!(close(&out, &[0.0, 5.0, 2.5]));
    }

    #[test]
    fn equal_gap_keeps_ends_and_evens_gaps() {
        // [0,2], [3,4], [10,12] -> span 12, widths 5, gap 3.5.
        let e = [
            Extent::new(1.0, 0.0, 2.0),
            Extent::new(3.5, 3.0, 1.0),
            Extent::new(11.0, 10.0, 2.0),
        ];
        let out = distribute(&e, SpacingMode::Gap);
        assert!(close(&out, &[1.0, 6.0, 11.0]));
    }

    #[test]
    fn equal_gap_two_items_is_fixed() {
        let e = [Extent::new(1.0, 0.0, 2.0), Extent::new(11.0, 10.0, 2.0)];
        let out = distribute(&e, SpacingMode::Gap);
        assert!(close(&out, &[1.0, 11.0]));
    }

    #[test]
    fn equal_gap_allows_overlap() {
        // span 4 (0..4), widths 9 -> gap -2.5
        let e = [
            Extent::new(0.0, 0.0, 3.0),
            Extent::new(1.0, 1.0, 3.0),
            Extent::new(2.0, 1.0, 3.0),
        ];
        let out = distribute(&e, SpacingMode::Gap);
        assert!(close(&out, &[0.0, 0.5, 2.0]));
    }

    #[test]
    fn fixed_distance_center_and_gap() {
        let e = [Extent::new(4.0, 3.0, 2.0), Extent::new(1.0, 0.0, 2.0)];
        assert!(close(
            &distribute_by_distance(&e, SpacingMode::Center, 2.0),
            &[3.0, 1.0]
        ));
        // First (sorted) min 0, width 2, gap 0.5 -> second min 2.5.
        assert!(close(
            &distribute_by_distance(&e, SpacingMode::Gap, 0.5),
            &[3.5, 1.0]
        ));
    }

    #[test]
    fn space_inside_rejects_inverted_range() {
        let e = [Extent::point(0.0), Extent::point(1.0)];
        for mode in [SpacingMode::Center, SpacingMode::Gap] {
            assert_eq!(
                space_inside(&e, mode, 5.0, 5.0),
                Err(PlacementError::InvalidRange { min: 5.0, max: 5.0 })
            );
            assert!(space_inside(&[], mode, 1.0, 0.0).is_err());
        }
    }

    #[test]
    fn space_inside_gap_floors_at_zero() {
        let e = [Extent::new(0.0, 0.0, 4.0), Extent::new(9.0, 9.0, 4.0)];
        let out = space_inside(&e, SpacingMode::Gap, 0.0, 5.0).unwrap();
        assert!(close(&out, &[0.0, 4.0]));
    }

    #[test]
    fn space_inside_center_spans_range() {
        let e = [Extent::point(7.0), Extent::point(-3.0), Extent::point(1.0)];
        let out = space_inside(&e, SpacingMode::Center, 0.0, 10.0).unwrap();
        assert!(close(&out, &[10.0, 0.0, 5.0]));
    }

    #[test]
    fn grid_scenario() {
        // Input order is scrambled; the order key decides the layout order.
        let keys = [4.0, 0.0, 3.0, 1.0, 2.0];
        let items: Vec<GridItem> = keys
            .iter()
            .map(|&k| GridItem {
                order_key: k,
                position: if k == 0.0 {
                    Point::ORIGIN
                } else {
                    Point::new(k * 7.0, -k)
                },
            })
            .collect();
        let spec = GridSpec {
            columns: 2,
            spacing: Vec2::new(1.0, 1.0),
        };
        let out = grid_layout(&items, &spec);
        let expected = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 2.0)];
        for (rank, (x, y)) in expected.into_iter().enumerate() {
            let i = keys.iter().position(|&k| k == rank as f64).unwrap();
            assert_eq!((out[i].x, out[i].y), (x, y), "rank {rank}");
        }
    }

    #[test]
    fn grid_cell_treats_zero_columns_as_one() {
        assert_eq!(grid_cell(3, 0), (3, 0));
        assert_eq!(grid_cell(5, 3), (1, 2));
    }
}
