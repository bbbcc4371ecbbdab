use num_bigint::BigInt;
use num_traits::Signed;

use crate::model::{NumberBag, Operation};
use crate::solver::errors::SolverError;

/// Lexicographic search objective: distance first, then numbers used.
///
/// The derived ordering compares fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Objective {
    pub distance: BigInt,
    pub used: usize,
}

impl Objective {
    pub fn new(result: &BigInt, target: &BigInt, used: usize) -> Self {
        Self {
            distance: (result - target).abs(),
            used,
        }
    }
}

/// The active prefix of a permutation together with its operations.
///
/// `indices` holds the positions consumed in order, `operations[i]` joins the
/// running result with the number at `indices[i + 1]`. The derived ordering
/// is the tie-break order: indices first, then operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Candidate {
    indices: Vec<usize>,
    operations: Vec<Operation>,
}

impl Candidate {
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidCandidate`] if `indices` is empty,
    /// contains a repeated position, or if `operations` is not exactly one
    /// shorter than `indices`.
    pub fn new(indices: Vec<usize>, operations: Vec<Operation>) -> Result<Self, SolverError> {
        if indices.is_empty() {
            return Err(SolverError::InvalidCandidate(
                "at least one number must be used".to_string(),
            ));
        }
        if operations.len() + 1 != indices.len() {
            return Err(SolverError::InvalidCandidate(format!(
                "{} numbers need {} operations, got {}",
                indices.len(),
                indices.len() - 1,
                operations.len()
            )));
        }
        for (i, index) in indices.iter().enumerate() {
            if indices.iter().skip(i + 1).any(|other| other == index) {
                return Err(SolverError::InvalidCandidate(format!(
                    "position {} used more than once",
                    index
                )));
            }
        }
        Ok(Self {
            indices,
            operations,
        })
    }

    /// Build from search state already known to be well formed
    pub(crate) fn from_parts(indices: Vec<usize>, operations: Vec<Operation>) -> Self {
        Self {
            indices,
            operations,
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Count of numbers consumed
    pub fn used(&self) -> usize {
        self.indices.len()
    }

    /// Full permutation of `0..n`: the used prefix followed by the unused
    /// positions in ascending order.
    pub fn permutation(&self, n: usize) -> Vec<usize> {
        let mut permutation = self.indices.clone();
        permutation.extend((0..n).filter(|index| !self.indices.contains(index)));
        permutation
    }

    /// Intermediate results `r0..r_{used-1}` of folding the candidate over `bag`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidCandidate`] if an index lies outside the bag.
    pub fn replay(&self, bag: &NumberBag) -> Result<Vec<BigInt>, SolverError> {
        let operand = move |index: usize| {
            bag.value(index).ok_or_else(|| {
                SolverError::InvalidCandidate(format!(
                    "position {} is outside a bag of {} numbers",
                    index,
                    bag.len()
                ))
            })
        };

        let (&first, rest) = self
            .indices
            .split_first()
            .ok_or(SolverError::NoSolution)?;

        let mut trace = Vec::with_capacity(self.indices.len());
        let mut current = operand(first)?.clone();
        trace.push(current.clone());
        for (operation, &index) in self.operations.iter().zip(rest) {
            current = operation.apply(&current, operand(index)?);
            trace.push(current.clone());
        }
        Ok(trace)
    }

    /// # Errors
    ///
    /// Same as [`Candidate::replay`].
    pub fn objective(&self, bag: &NumberBag, target: &BigInt) -> Result<Objective, SolverError> {
        let trace = self.replay(bag)?;
        let result = trace.last().ok_or(SolverError::NoSolution)?;
        Ok(Objective::new(result, target, self.used()))
    }
}

/// A candidate paired with its objective; ordered by objective, then candidate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Ranked {
    pub objective: Objective,
    pub candidate: Candidate,
}
