use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::mission::Mission;
use crate::network::Network;
use crate::strategy::Strategy;

/// Baseline strategy: missions in stream order, sensors drawn uniformly at
/// random from the whole population.
///
/// Carries its own seeded generator so a run is reproducible independently
/// of whatever else consumed the driver's randomness.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn execute(&mut self, network: &mut Network, missions: &mut [Mission], required: usize) {
        for mission in missions.iter_mut() {
            network.assign_random(mission, required, &mut self.rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run_trial(seed: u64) -> (u64, u64) {
        let config = SimConfig {
            sensor_count: 20,
            mission_count: 50,
            ..SimConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(99);
        let mut network = Network::new(&config);
        network.add_sensors(config.sensor_count, &mut rng);
        let mut missions = crate::mission::generate_stream(&config, &mut rng);

        let mut strategy = RandomStrategy::new(seed);
        strategy.execute(&mut network, &mut missions, config.required_sensors);
        (network.missions_attempted(), network.missions_satisfied())
    }

    #[test]
    fn attempts_every_mission() {
        let (attempted, satisfied) = run_trial(7);
        assert_eq!(attempted, 50);
        assert!(satisfied <= attempted);
    }

    #[test]
    fn same_seed_reproduces_outcome() {
        assert_eq!(run_trial(7), run_trial(7));
    }

    #[test]
    fn marks_all_missions_attempted() {
        let config = SimConfig {
            sensor_count: 5,
            mission_count: 20,
            ..SimConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut network = Network::new(&config);
        network.add_sensors(config.sensor_count, &mut rng);
        let mut missions = crate::mission::generate_stream(&config, &mut rng);

        let mut strategy = RandomStrategy::new(11);
        strategy.execute(&mut network, &mut missions, config.required_sensors);
        assert!(missions.iter().all(|m| m.attempted));
    }
}
