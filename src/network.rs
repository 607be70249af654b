//! Sensor network: feasibility aggregation, per-mission allocation, and
//! pool lifecycle management.

use rand::Rng;

use crate::config::SimConfig;
use crate::field::SpatialField;
use crate::mission::Mission;
use crate::sensor::Sensor;

/// Owns the sensor pool plus the attempted/satisfied counters for the
/// current allocation pass.
///
/// Allocation is all-or-nothing per mission: the `count_feasible` gate is
/// checked before any sensor is committed, so a mission is either fully
/// staffed or leaves every sensor untouched.
#[derive(Debug, Clone)]
pub struct Network {
    sensors: Vec<Sensor>,
    field: SpatialField,
    initial_energy: u64,
    missions_attempted: u64,
    missions_satisfied: u64,
    next_sensor_idx: u32,
}

impl Network {
    /// Creates an empty network configured for the given simulation.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            sensors: Vec::new(),
            field: SpatialField::new(config.area_width, config.area_height),
            initial_energy: config.initial_energy,
            missions_attempted: 0,
            missions_satisfied: 0,
            next_sensor_idx: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// Missions processed by the current pass.
    pub fn missions_attempted(&self) -> u64 {
        self.missions_attempted
    }

    /// Missions fully staffed by the current pass.
    pub fn missions_satisfied(&self) -> u64 {
        self.missions_satisfied
    }

    /// Zeroes the counters and resets every sensor (energy and schedule;
    /// positions are kept).
    pub fn reset(&mut self) {
        self.missions_attempted = 0;
        self.missions_satisfied = 0;
        for sensor in &mut self.sensors {
            sensor.reset();
        }
    }

    /// Removes all sensors and zeroes the counters.
    pub fn clear(&mut self) {
        self.missions_attempted = 0;
        self.missions_satisfied = 0;
        self.sensors.clear();
    }

    /// Resets the network, then appends `n` freshly placed sensors at full
    /// energy.
    ///
    /// Pre-existing sensors keep their positions; only new sensors are
    /// placed.
    pub fn add_sensors<R: Rng>(&mut self, n: usize, rng: &mut R) {
        self.reset();
        for _ in 0..n {
            let id = format!("sensor_{}", self.next_sensor_idx);
            self.next_sensor_idx += 1;
            self.sensors
                .push(Sensor::new(id, self.field.place(rng), self.initial_energy));
        }
    }

    /// Appends pre-built sensors as-is, keeping counters and existing
    /// sensors untouched. Intended for hand-placed pools; randomized pools
    /// go through [`Network::add_sensors`].
    pub fn extend_with(&mut self, sensors: impl IntoIterator<Item = Sensor>) {
        self.sensors.extend(sensors);
    }

    /// Number of sensors currently able to take `mission`.
    pub fn count_feasible(&self, mission: &Mission) -> usize {
        self.sensors.iter().filter(|s| s.can_take(mission)).count()
    }

    /// Number of sensors with energy strictly below `threshold`.
    pub fn low_energy_count(&self, threshold: u64) -> usize {
        self.sensors
            .iter()
            .filter(|s| s.energy() < threshold)
            .count()
    }

    /// Random allocation: commits `required` distinct sensors drawn
    /// uniformly (with replacement across draws) from the whole population.
    ///
    /// The mission is marked attempted regardless of the outcome. If fewer
    /// than `required` sensors are feasible up front, no sensor is touched.
    /// Feasibility is re-evaluated at every draw, so a sensor committed
    /// earlier in the same call is a wasted draw rather than a double
    /// commitment. Termination is guaranteed by the feasibility gate: each
    /// commit shrinks the feasible population by exactly one.
    pub fn assign_random<R: Rng>(&mut self, mission: &mut Mission, required: usize, rng: &mut R) {
        mission.attempted = true;
        if self.count_feasible(mission) >= required {
            let mut committed = 0;
            while committed < required {
                let idx = rng.gen_range(0..self.sensors.len());
                if self.sensors[idx].assign(mission) {
                    committed += 1;
                }
            }
            self.missions_satisfied += 1;
        }
        self.missions_attempted += 1;
    }

    /// Greedy allocation: `required` rounds, each scanning the whole
    /// population and committing the feasible sensor with the strictly
    /// greatest current energy. Ties go to the first sensor scanned.
    ///
    /// Same gating as [`Network::assign_random`]; consuming from the
    /// currently-richest sensor preserves the network's energy balance.
    pub fn assign_greedy(&mut self, mission: &mut Mission, required: usize) {
        mission.attempted = true;
        if self.count_feasible(mission) >= required {
            for _ in 0..required {
                let mut best: Option<(usize, u64)> = None;
                for (idx, sensor) in self.sensors.iter().enumerate() {
                    if !sensor.can_take(mission) {
                        continue;
                    }
                    let energy = sensor.energy();
                    if best.map_or(true, |(_, max)| energy > max) {
                        best = Some((idx, energy));
                    }
                }
                if let Some((idx, _)) = best {
                    self.sensors[idx].assign(mission);
                }
            }
            self.missions_satisfied += 1;
        }
        self.missions_attempted += 1;
    }

    /// Total-energy score used by the offline strategy: the energy sum of
    /// the top-`required` feasible sensors, greedily picked by energy with
    /// first-scanned tie-break. Zero when the mission cannot be fully
    /// staffed.
    ///
    /// Read-only projection of what [`Network::assign_greedy`] would
    /// consume; it must not mutate any sensor.
    pub fn score_total_energy(&self, mission: &Mission, required: usize) -> u64 {
        if self.count_feasible(mission) < required {
            return 0;
        }
        let mut chosen: Vec<usize> = Vec::with_capacity(required);
        for _ in 0..required {
            let mut best: Option<(usize, u64)> = None;
            for (idx, sensor) in self.sensors.iter().enumerate() {
                if chosen.contains(&idx) || !sensor.can_take(mission) {
                    continue;
                }
                let energy = sensor.energy();
                if best.map_or(true, |(_, max)| energy > max) {
                    best = Some((idx, energy));
                }
            }
            if let Some((idx, _)) = best {
                chosen.push(idx);
            }
        }
        chosen.iter().map(|&i| self.sensors[i].energy()).sum()
    }
}
