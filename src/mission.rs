//! Mission records and synthetic mission stream generation.

use rand::Rng;

use crate::config::SimConfig;
use crate::field::{Position, SpatialField};
use crate::schedule::Interval;
use crate::{generate_id, Id};

/// A time-and-location-bounded task requiring a fixed number of sensors.
///
/// Immutable except for the `attempted` flag, which each allocation strategy
/// sets exactly once per pass regardless of the outcome.
#[derive(Debug, Clone)]
pub struct Mission {
    id: Id,
    start: u64,
    end: u64,
    epicenter: Position,
    radius: f64,
    /// Set when any strategy processes this mission; reset between passes.
    pub attempted: bool,
}

impl Mission {
    /// Creates a mission spanning `[start, start + duration)` around
    /// `epicenter` with the given detection radius.
    pub fn new(start: u64, duration: u64, epicenter: Position, radius: f64) -> Self {
        Self {
            id: generate_id(),
            start,
            end: start + duration,
            epicenter,
            radius,
            attempted: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Energy cost of taking this mission: one unit per tick.
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    pub fn epicenter(&self) -> Position {
        self.epicenter
    }

    /// The mission's time window as a schedule interval.
    pub fn window(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    /// Returns true iff `position` lies within the detection radius of the
    /// epicenter.
    ///
    /// Compares squared distances; a position exactly on the boundary counts
    /// as in range.
    pub fn in_range(&self, position: &Position) -> bool {
        position.distance_squared_to(&self.epicenter) <= self.radius * self.radius
    }
}

/// Generates one trial's mission batch.
///
/// Start times are monotonically non-decreasing: consecutive starts are
/// separated by a uniform random gap in `[0, config.max_start_gap)`.
/// Epicenters are placed uniformly in the area of interest.
pub fn generate_stream<R: Rng>(config: &SimConfig, rng: &mut R) -> Vec<Mission> {
    let field = SpatialField::new(config.area_width, config.area_height);
    let mut start = 0u64;
    let mut missions = Vec::with_capacity(config.mission_count);
    for _ in 0..config.mission_count {
        start += rng.gen_range(0..config.max_start_gap);
        missions.push(Mission::new(
            start,
            config.mission_duration,
            field.place(rng),
            config.mission_radius,
        ));
    }
    missions
}
