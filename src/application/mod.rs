mod simulation;

pub use simulation::{RunState, Simulation};
