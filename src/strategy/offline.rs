use tracing::trace;

use crate::mission::Mission;
use crate::network::Network;
use crate::strategy::Strategy;

/// Offline heuristic: sees the whole batch up front and repeatedly staffs
/// the not-yet-attempted mission whose top-`required` feasible sensors sum
/// to the greatest total energy.
///
/// Scoring is a read-only projection, so each round reflects the energy
/// actually remaining after earlier commitments. A score tie keeps the
/// earliest mission in the stream. Missions that cannot be fully staffed
/// score zero and are consumed last, as failed attempts.
#[derive(Debug, Default)]
pub struct OfflineGreedy;

impl OfflineGreedy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for OfflineGreedy {
    fn name(&self) -> &str {
        "offline-greedy"
    }

    fn execute(&mut self, network: &mut Network, missions: &mut [Mission], required: usize) {
        for _ in 0..missions.len() {
            let mut best: Option<(usize, u64)> = None;
            for (idx, mission) in missions.iter().enumerate() {
                if mission.attempted {
                    continue;
                }
                let score = network.score_total_energy(mission, required);
                if best.map_or(true, |(_, max)| score > max) {
                    best = Some((idx, score));
                }
            }
            if let Some((idx, score)) = best {
                trace!(mission = missions[idx].id(), score, "offline pick");
                network.assign_greedy(&mut missions[idx], required);
            }
        }
    }
}
