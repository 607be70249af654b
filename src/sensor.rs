//! Sensors: fixed position, finite energy budget, and a conflict-free
//! commitment schedule.

use crate::field::Position;
use crate::mission::Mission;
use crate::schedule::Schedule;
use crate::Id;

/// An agent that can be committed to missions while it has energy, is in
/// range, and its schedule is free.
///
/// Energy is monotonically non-increasing within a trial and never
/// underflows: a commitment that would cost more than the remaining energy
/// is rejected by [`Sensor::can_take`].
#[derive(Debug, Clone)]
pub struct Sensor {
    id: Id,
    position: Position,
    energy: u64,
    initial_energy: u64,
    schedule: Schedule,
}

impl Sensor {
    /// Creates a sensor at `position` with a full energy budget.
    pub fn new(id: impl Into<Id>, position: Position, initial_energy: u64) -> Self {
        Self {
            id: id.into(),
            position,
            energy: initial_energy,
            initial_energy,
            schedule: Schedule::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Remaining energy in ticks.
    pub fn energy(&self) -> u64 {
        self.energy
    }

    /// Number of missions committed on this sensor.
    pub fn assignments(&self) -> usize {
        self.schedule.len()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Feasibility test: enough energy for the mission's duration, position
    /// within the mission's detection range, and no window conflict with any
    /// committed interval.
    ///
    /// Pure predicate; never mutates the sensor, so it is safe to call
    /// repeatedly for both counting and selection.
    pub fn can_take(&self, mission: &Mission) -> bool {
        let cost = mission.duration();
        if self.energy < cost {
            return false;
        }
        if !mission.in_range(&self.position) {
            return false;
        }
        !self.schedule.has_conflict(mission.window())
    }

    /// Commits this sensor to `mission` if still feasible.
    ///
    /// Re-validates feasibility rather than trusting the caller; an
    /// infeasible call is a safe no-op returning `false`.
    pub fn assign(&mut self, mission: &Mission) -> bool {
        if !self.can_take(mission) {
            return false;
        }
        if self.schedule.add(mission.id(), mission.window()).is_err() {
            return false;
        }
        self.energy -= mission.duration();
        true
    }

    /// Restores the starting energy and clears all commitments. Position is
    /// untouched.
    pub fn reset(&mut self) {
        self.energy = self.initial_energy;
        self.schedule.clear();
    }
}
