//! Allocation strategies: a common trait plus the three implementations
//! compared by the simulation driver.

mod offline;
mod online;
mod random;

pub use offline::OfflineGreedy;
pub use online::OnlineGreedy;
pub use random::RandomStrategy;

use crate::mission::Mission;
use crate::network::Network;

/// A mission allocation policy run over one trial's mission batch.
///
/// An execution must process every mission exactly once, leaving each one
/// with `attempted == true`. Strategies differ only in the order missions
/// are considered and in how sensors are chosen for each.
pub trait Strategy {
    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    /// Processes the full batch against `network`, committing `required`
    /// sensors per satisfied mission.
    fn execute(&mut self, network: &mut Network, missions: &mut [Mission], required: usize);
}
