use clap::Parser;
use tracing_subscriber::EnvFilter;

use sentinet::config::SimConfig;
use sentinet::simulation::SimulationDriver;

/// Compares mission allocation strategies over a simulated sensor network.
#[derive(Debug, Parser)]
#[command(name = "sentinet", version, about)]
struct Cli {
    /// Mission duration in ticks (also its energy cost).
    #[arg(long, default_value_t = 100)]
    duration: u64,

    /// Sensors placed per trial.
    #[arg(long, default_value_t = 100)]
    sensors: usize,

    /// Distinct sensors required per mission.
    #[arg(long, default_value_t = 3)]
    required: usize,

    /// Missions generated per trial.
    #[arg(long, default_value_t = 1000)]
    missions: usize,

    /// Number of independent trials.
    #[arg(long, default_value_t = 3)]
    trials: usize,

    /// Seed for world generation and the random strategy.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = SimConfig {
        mission_duration: cli.duration,
        sensor_count: cli.sensors,
        required_sensors: cli.required,
        mission_count: cli.missions,
        trials: cli.trials,
        ..SimConfig::default()
    };

    let driver = match SimulationDriver::new(config, cli.seed) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let report = driver.run();
    println!("{report}");
}
