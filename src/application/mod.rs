mod controller;

pub use controller::{SimulationController, DEFAULT_INTERVAL_MS};
