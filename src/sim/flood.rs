//! Region flood engine
//!
//! Computes the 4-connected region of same-colored cells around the origin and
//! grows it after the region has been repainted. The engine only reads the
//! grid; painting is the caller's job.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::error::{FloodError, RegionDefect};
use super::grid::{Color, Coord, Grid};

/// Cells currently connected to the origin.
///
/// Membership is a packed-index bitmap; `members` keeps insertion order so
/// iteration is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFloodedSet")]
pub struct FloodedSet {
    size: usize,
    members: Vec<usize>,
    in_set: Vec<bool>,
}

/// Serialized region, checked before it becomes a `FloodedSet`
#[derive(Deserialize)]
struct RawFloodedSet {
    size: usize,
    members: Vec<usize>,
    in_set: Vec<bool>,
}

impl TryFrom<RawFloodedSet> for FloodedSet {
    type Error = FloodError;

    fn try_from(raw: RawFloodedSet) -> Result<Self, Self::Error> {
        if raw.size == 0 {
            return Err(RegionDefect::ZeroDimension.into());
        }
        if raw.members.is_empty() {
            return Err(RegionDefect::Empty.into());
        }
        let expected = raw.size.checked_mul(raw.size).unwrap_or(usize::MAX);
        if raw.in_set.len() != expected {
            return Err(RegionDefect::BitmapLength {
                expected,
                actual: raw.in_set.len(),
            }
            .into());
        }

        // Rebuild the bitmap from the member list and compare
        let mut seen = vec![false; expected];
        for &index in &raw.members {
            if index >= expected {
                return Err(RegionDefect::MemberOutOfRange { index }.into());
            }
            if seen[index] {
                return Err(RegionDefect::DuplicateMember { index }.into());
            }
            seen[index] = true;
        }
        if let Some(index) = (0..expected).find(|&i| seen[i] != raw.in_set[i]) {
            return Err(RegionDefect::MembershipMismatch { index }.into());
        }

        Ok(Self {
            size: raw.size,
            members: raw.members,
            in_set: raw.in_set,
        })
    }
}

impl FloodedSet {
    fn empty(size: usize) -> Self {
        Self {
            size,
            members: Vec::new(),
            in_set: vec![false; size * size],
        }
    }

    /// Returns false if the index was already a member
    #[inline]
    fn insert(&mut self, index: usize) -> bool {
        if self.in_set[index] {
            return false;
        }
        self.in_set[index] = true;
        self.members.push(index);
        true
    }

    /// Dimension of the grid this set belongs to
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True once the region covers every cell (the win condition)
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.members.len() == self.size * self.size
    }

    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        self.in_set.get(index).copied().unwrap_or(false)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size
            && coord.col < self.size
            && self.in_set[coord.row * self.size + coord.col]
    }

    /// Packed indices in discovery order
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.members
    }

    /// Member coordinates in discovery order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        let n = self.size;
        self.members.iter().map(move |&i| Coord::new(i / n, i % n))
    }

    /// Non-member cells adjacent to the region, ascending by index
    pub fn boundary(&self, grid: &Grid) -> Vec<usize> {
        let mut seen = vec![false; self.in_set.len()];
        let mut out = Vec::new();
        for &i in &self.members {
            for n in grid.neighbor_indices(i) {
                if !self.in_set[n] && !seen[n] {
                    seen[n] = true;
                    out.push(n);
                }
            }
        }
        out.sort_unstable();
        out
    }
}

/// Flood outward from `origin`, collecting every cell reachable through
/// up/down/left/right steps that shares the origin's color.
///
/// Each cell is enqueued at most once, so the cost is linear in the number
/// of cells even when the whole board is one color.
pub fn compute_initial_region(grid: &Grid, origin: Coord) -> Result<FloodedSet, FloodError> {
    let start = grid.index_of(origin)?;
    let target = grid.color_at(start);

    let mut set = FloodedSet::empty(grid.size());
    set.insert(start);
    grow(grid, &mut set, VecDeque::from([start]), target);

    log::trace!(
        "Initial region from ({}, {}) color {}: {} cells",
        origin.row,
        origin.col,
        target,
        set.len()
    );
    Ok(set)
}

/// Absorb cells of `new_color` that touch the region, transitively.
///
/// The caller must already have painted every member with `new_color`. Only
/// cells connected to the current region are candidates; a matching cell
/// elsewhere on the board stays out. Returns how many cells were added.
pub fn expand_region(
    grid: &Grid,
    set: &mut FloodedSet,
    new_color: Color,
) -> Result<usize, FloodError> {
    if set.size != grid.size() {
        return Err(FloodError::DimensionMismatch {
            grid: grid.size(),
            set: set.size,
        });
    }
    debug_assert!(
        set.members.iter().all(|&i| grid.color_at(i) == new_color),
        "region must be painted before it is expanded"
    );

    let before = set.len();
    let frontier: VecDeque<usize> = set.members.iter().copied().collect();
    grow(grid, set, frontier, new_color);

    let added = set.len() - before;
    log::trace!("Expanded region with color {}: +{} cells", new_color, added);
    Ok(added)
}

/// Breadth-first growth shared by both entry points. A cell is marked as a
/// member when it is enqueued, so nothing is queued twice.
fn grow(grid: &Grid, set: &mut FloodedSet, mut queue: VecDeque<usize>, color: Color) {
    while let Some(index) = queue.pop_front() {
        for n in grid.neighbor_indices(index) {
            if grid.color_at(n) == color && set.insert(n) {
                queue.push_back(n);
            }
        }
    }
}
