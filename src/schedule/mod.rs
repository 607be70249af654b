use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::Id;

pub mod errors;
pub use errors::ScheduleError;


/// Half-open time range `[start, end)` in simulation ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    start: u64,
    end: u64,
}

impl Interval {
    /// Creates interval `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub const fn new(start: u64, end: u64) -> Self {
        assert!(start <= end, "Interval start must be <= end");
        Self { start, end }
    }

    pub const fn start(&self) -> u64 {
        self.start
    }

    pub const fn end(&self) -> u64 {
        self.end
    }

    pub const fn duration(&self) -> u64 {
        self.end - self.start
    }

    /// Standard half-open overlap: the ranges share at least one tick.
    pub const fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true if `tick` ∈ `[start, end)`.
    pub const fn contains(&self, tick: u64) -> bool {
        self.start <= tick && tick < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// An entry in the schedule, mapping a mission ID to its committed interval.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    id: Id,
    interval: Interval,
}

/// Per-sensor record of committed mission intervals, sorted by start tick.
///
/// Maintains the non-overlap invariant on insertion, so a sensor's busy
/// windows never collide.
///
/// # Internal Structure
/// - `by_start`: `BTreeMap` from start tick to entry
/// - `start_by_id`: `HashMap` from mission ID to start tick
///
/// # Complexity
/// - `add`: O(log n) with O(1) neighbor overlap checks
/// - `has_conflict`: O(log n)
/// - `conflicts`: O(log n + k) where k is the number of conflicts
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    by_start: BTreeMap<u64, Entry>,
    start_by_id: HashMap<Id, u64>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }

    /// Returns true if a commitment for `id` exists.
    pub fn contains_mission(&self, id: &str) -> bool {
        self.start_by_id.contains_key(id)
    }

    /// Gets the committed interval for a mission id (if present).
    pub fn get_interval(&self, id: &str) -> Option<Interval> {
        let start = self.start_by_id.get(id)?;
        self.by_start.get(start).map(|e| e.interval)
    }

    /// Commits an interval under a mission id.
    ///
    /// Requires:
    /// - `id` not already present
    /// - interval does not overlap any committed interval
    ///
    /// Only predecessor + successor checks are needed because the schedule
    /// is maintained as non-overlapping and sorted by start tick.
    pub fn add(&mut self, id: impl Into<Id>, interval: Interval) -> Result<(), ScheduleError> {
        let id: Id = id.into();
        if self.contains_mission(&id) {
            return Err(ScheduleError::DuplicateMissionId(id));
        }

        // Check predecessor (latest interval with start <= new.start).
        if let Some((_k, prev)) = self.by_start.range(..=interval.start).next_back() {
            if prev.interval.overlaps(&interval) {
                return Err(ScheduleError::OverlapsExisting {
                    new_id: id,
                    existing_id: prev.id.clone(),
                });
            }
        }

        // Check successor (earliest interval with start > new.start).
        if let Some((_k, next)) = self.by_start.range(interval.start..).next() {
            if next.interval.overlaps(&interval) {
                return Err(ScheduleError::OverlapsExisting {
                    new_id: id,
                    existing_id: next.id.clone(),
                });
            }
        }

        self.by_start.insert(
            interval.start,
            Entry {
                id: id.clone(),
                interval,
            },
        );
        self.start_by_id.insert(id, interval.start);
        Ok(())
    }

    /// Returns true if `query` overlaps any committed interval.
    pub fn has_conflict(&self, query: Interval) -> bool {
        self.conflicts(query).next().is_some()
    }

    /// Iterates over all committed intervals overlapping `query`, in start
    /// tick order.
    ///
    /// Complexity: O(log n + k) where k is the number of conflicts.
    pub fn conflicts(&self, query: Interval) -> impl Iterator<Item = (Id, Interval)> + '_ {
        // The predecessor of query.start may begin before the query but
        // still overlap it; everything else that overlaps starts inside
        // [query.start, query.end).
        let scan_from = match self.by_start.range(..=query.start).next_back() {
            Some((k, prev)) if prev.interval.overlaps(&query) => *k,
            _ => query.start,
        };

        self.by_start
            .range(scan_from..)
            .take_while(move |(k, _e)| **k < query.end)
            .filter(move |(_k, e)| e.interval.overlaps(&query))
            .map(|(_k, e)| (e.id.clone(), e.interval))
    }

    /// Returns an iterator over all commitments in start tick order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, Interval)> + '_ {
        self.by_start.values().map(|e| (e.id.clone(), e.interval))
    }

    /// Returns an iterator over committed intervals in start tick order.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.by_start.values().map(|e| e.interval)
    }

    /// Total committed duration in ticks, which equals the energy spent by
    /// the owning sensor.
    pub fn total_committed(&self) -> u64 {
        self.by_start.values().map(|e| e.interval.duration()).sum()
    }

    /// Clears all commitments.
    pub fn clear(&mut self) {
        self.by_start.clear();
        self.start_by_id.clear();
    }
}
