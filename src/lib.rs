//! sentinet - Sensor Network Mission Allocation Simulator
//!
//! Simulates assignment of time-and-location-bounded missions to a pool of
//! energy-constrained sensors and compares three allocation strategies
//! (random, online greedy-by-energy, offline greedy-by-total-energy) against
//! identical synthetic mission streams.

pub mod config;
pub mod field;
pub mod metrics;
pub mod mission;
pub mod network;
pub mod schedule;
pub mod sensor;
pub mod simulation;
pub mod strategy;

/// Identifier type used for sensors, missions, and schedule entries.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
