// Domain layer - Grid, neighbor rule and generation engine
pub mod domain;

// Application layer - Tick scheduling and user commands
pub mod application;

// Ambient concerns
pub mod config;
pub mod error;

// Presentation layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, ClassicRule, Grid, Pattern, presets, step};
pub use application::{RunState, Simulation};
pub use config::SimulationConfig;
pub use error::{ConfigError, GridError};
pub use ui::Button;
