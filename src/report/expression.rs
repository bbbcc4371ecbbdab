use num_traits::Signed;

use crate::model::Operation;
use crate::solver::Solution;

impl Solution {
    /// Render the left-to-right fold as one infix expression.
    /// - Parenthesizes the running expression when the next operation binds tighter
    /// - Parenthesizes negative operands
    ///
    /// e.g. `(1 + 2) * 3 = 9 (distance 1)`
    pub fn to_expression(&self) -> String {
        let mut text = self.initial().to_string();
        let mut outer: Option<Operation> = None;

        for step in self.steps() {
            if let Some(previous) = outer
                && previous.precedence() < step.operation.precedence()
            {
                text = format!("({})", text);
            }

            if step.operand.is_negative() {
                text = format!("{} {} ({})", text, step.operation, step.operand);
            } else {
                text = format!("{} {} {}", text, step.operation, step.operand);
            }
            outer = Some(step.operation);
        }

        format!(
            "{} = {} (distance {})",
            text,
            self.final_result(),
            self.distance()
        )
    }
}
