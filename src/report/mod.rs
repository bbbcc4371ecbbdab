//! Rendering of solutions for the command line

mod expression;
mod text;

use clap::ValueEnum;

use crate::solver::Solution;

/// How a solution is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Initial number, one line per step, final number and distance
    Steps,
    /// Single infix expression with its value and distance
    Expression,
}

pub fn render(solution: &Solution, format: ReportFormat) -> String {
    match format {
        ReportFormat::Steps => solution.to_string(),
        ReportFormat::Expression => solution.to_expression(),
    }
}

#[cfg(test)]
mod tests;
