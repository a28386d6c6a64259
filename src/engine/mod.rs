//! Simulation core: grid, rules, topologies, and the generation stepper

pub mod grid;
pub mod rules;
pub mod stepper;
pub mod topology;

pub use grid::Grid;
pub use rules::LifeRules;
pub use stepper::{advance, interior_pass, Simulation};
pub use topology::Topology;
