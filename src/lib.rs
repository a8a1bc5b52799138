// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use application::SimulationController;
pub use domain::{advance, stamp_pattern, Cell, Grid, GridError};
