//! Countdown - A library for combining numbers into a value close to a target
//!
//! Numbers are consumed left to right, each joined to the running result with
//! `+`, `-`, `*` or `/`. The search minimizes the distance to the target first
//! and the count of numbers used second, and returns the winning trace.

pub mod model;
pub mod report;
pub mod solver;

// Re-export the main public API
pub use model::{ModelError, NumberBag, Operation};
pub use report::{ReportFormat, render};
pub use solver::{Candidate, Objective, Solution, Solver, SolverConfig, SolverError, Step};

use num_bigint::BigInt;

/// Find the combination of `numbers` closest to `target`
///
/// This is a convenience function that validates the input and runs a
/// default solver.
///
/// # Arguments
///
/// * `numbers` - The numbers that may be used, at least one
/// * `target` - The value to approach
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` is empty or larger than the supported maximum
/// * The search space is empty
///
/// # Examples
///
/// ```
/// use countdown::solve;
///
/// match solve(&[4, 2], 2) {
///     Ok(solution) => println!("{}", solution),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[i64], target: i64) -> Result<Solution, SolverError> {
    let bag = NumberBag::new(numbers.to_vec())?;

    let solver = Solver::default();
    solver.solve(&bag, &BigInt::from(target))
}
