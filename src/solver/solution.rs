use num_bigint::BigInt;

use crate::model::{NumberBag, Operation};
use crate::solver::candidate::{Candidate, Objective};
use crate::solver::errors::SolverError;

/// One folding step of the winning trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub operation: Operation,
    /// Position of the operand in the number bag
    pub index: usize,
    pub operand: BigInt,
    /// Running result after this step
    pub result: BigInt,
}

/// The optimal candidate together with its witness trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    candidate: Candidate,
    initial: BigInt,
    steps: Vec<Step>,
    target: BigInt,
    objective: Objective,
}

impl Solution {
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidCandidate`] if the candidate does not fit `bag`.
    pub fn from_candidate(
        candidate: Candidate,
        bag: &NumberBag,
        target: &BigInt,
    ) -> Result<Self, SolverError> {
        let trace = candidate.replay(bag)?;
        let (initial, results) = trace.split_first().ok_or(SolverError::NoSolution)?;

        let steps = candidate
            .operations()
            .iter()
            .zip(candidate.indices().iter().skip(1))
            .zip(results)
            .map(|((&operation, &index), result)| {
                let operand = bag.value(index).cloned().ok_or_else(|| {
                    SolverError::InvalidCandidate(format!(
                        "position {} is outside a bag of {} numbers",
                        index,
                        bag.len()
                    ))
                })?;
                Ok(Step {
                    operation,
                    index,
                    operand,
                    result: result.clone(),
                })
            })
            .collect::<Result<Vec<_>, SolverError>>()?;

        let objective = Objective::new(
            trace.last().unwrap_or(initial),
            target,
            candidate.used(),
        );

        Ok(Self {
            initial: initial.clone(),
            steps,
            target: target.clone(),
            objective,
            candidate,
        })
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// The first number consumed, `r0`
    pub fn initial(&self) -> &BigInt {
        &self.initial
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// All intermediate results, `r0` included
    pub fn trace(&self) -> Vec<&BigInt> {
        std::iter::once(&self.initial)
            .chain(self.steps.iter().map(|step| &step.result))
            .collect()
    }

    pub fn final_result(&self) -> &BigInt {
        self.steps
            .last()
            .map_or(&self.initial, |step| &step.result)
    }

    pub fn target(&self) -> &BigInt {
        &self.target
    }

    pub fn distance(&self) -> &BigInt {
        &self.objective.distance
    }

    pub fn used(&self) -> usize {
        self.objective.used
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }
}
