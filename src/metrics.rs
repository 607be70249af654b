//! Aggregated outcome metrics for strategy comparison runs.

use std::fmt;

/// Raw counters collected from one strategy pass over one trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassStats {
    /// Missions processed by the pass.
    pub attempted: u64,
    /// Missions fully staffed.
    pub satisfied: u64,
    /// Sensors left below the low-energy threshold at the end of the pass.
    pub low_energy: u64,
}

impl PassStats {
    /// Folds another pass into this one.
    pub fn accumulate(&mut self, other: PassStats) {
        self.attempted += other.attempted;
        self.satisfied += other.satisfied;
        self.low_energy += other.low_energy;
    }
}

/// One strategy's totals across all trials, with the derived rates.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyReport {
    pub strategy: String,
    pub totals: PassStats,
    pub trials: usize,
    pub missions_per_trial: usize,
    pub sensors_per_trial: usize,
}

impl StrategyReport {
    /// Fraction of missions fully staffed, over all trials.
    pub fn satisfaction_rate(&self) -> f64 {
        let total = (self.trials * self.missions_per_trial) as f64;
        if total == 0.0 {
            return 0.0;
        }
        self.totals.satisfied as f64 / total
    }

    /// Fraction of end-of-pass sensors below the low-energy threshold,
    /// over all trials.
    pub fn low_energy_rate(&self) -> f64 {
        let total = (self.trials * self.sensors_per_trial) as f64;
        if total == 0.0 {
            return 0.0;
        }
        self.totals.low_energy as f64 / total
    }
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<16} satisfied {:>6}/{:<6} ({:>6.2}%)   low energy {:>5}/{:<5} ({:>6.2}%)",
            self.strategy,
            self.totals.satisfied,
            self.trials * self.missions_per_trial,
            self.satisfaction_rate() * 100.0,
            self.totals.low_energy,
            self.trials * self.sensors_per_trial,
            self.low_energy_rate() * 100.0,
        )
    }
}

/// Full comparison across all strategies.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonReport {
    pub trials: usize,
    pub missions_per_trial: usize,
    pub sensors_per_trial: usize,
    pub strategies: Vec<StrategyReport>,
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Mission allocation comparison: {} trials, {} missions and {} sensors per trial",
            self.trials, self.missions_per_trial, self.sensors_per_trial
        )?;
        for report in &self.strategies {
            writeln!(f, "  {}", report)?;
        }
        Ok(())
    }
}
