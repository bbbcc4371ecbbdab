use std::fmt;

use crate::solver::Solution;

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Initial number: {}", self.initial())?;
        for (i, step) in self.steps().iter().enumerate() {
            writeln!(
                f,
                "Step {}: operation {} with number {} -> result {}",
                i + 1,
                step.operation,
                step.operand,
                step.result
            )?;
        }
        writeln!(f, "Final number: {}", self.final_result())?;
        write!(f, "Distance from goal: {}", self.distance())
    }
}
