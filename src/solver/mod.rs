mod candidate;
mod config;
mod core;
mod errors;
mod solution;

pub use candidate::{Candidate, Objective};
pub use config::SolverConfig;
pub use core::Solver;
pub use errors::SolverError;
pub use solution::{Solution, Step};
