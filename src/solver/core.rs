use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};
use num_bigint::BigInt;
use num_traits::Zero;
use rayon::prelude::*;

use crate::model::{NumberBag, Operation};
use crate::solver::candidate::{Candidate, Objective, Ranked};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::solution::Solution;

/// Main solver for finding the closest combination of numbers to a target
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the candidate with the smallest `(distance, used)` objective.
    ///
    /// Ties are broken by the smallest index prefix, then the smallest
    /// operation prefix, which is the first candidate met when permutations
    /// and operation sequences are enumerated in lexicographic order.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoSolution`] if no candidate exists and
    /// [`SolverError::ThreadPool`] if a dedicated worker pool cannot be built.
    pub fn solve(&self, bag: &NumberBag, target: &BigInt) -> Result<Solution, SolverError> {
        info!(
            "Searching combinations of [{}] closest to {} ({})",
            bag,
            target,
            if self.config.parallel {
                "parallel"
            } else {
                "sequential"
            }
        );

        let best = match (self.config.parallel, self.config.threads) {
            (true, Some(threads)) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| SolverError::ThreadPool(e.to_string()))?;
                pool.install(|| self.search_parallel(bag, target))
            }
            (true, None) => self.search_parallel(bag, target),
            (false, _) => self.search_sequential(bag, target),
        };

        let Some(best) = best else {
            info!("Search space is empty");
            return Err(SolverError::NoSolution);
        };

        info!(
            "Best candidate uses {} numbers at distance {}",
            best.objective.used, best.objective.distance
        );
        Solution::from_candidate(best.candidate, bag, target)
    }

    fn search_parallel(&self, bag: &NumberBag, target: &BigInt) -> Option<Ranked> {
        let exact_used = AtomicUsize::new(usize::MAX);
        (0..bag.len())
            .into_par_iter()
            .filter_map(|first| {
                Branch::new(bag, target, &exact_used, self.config.memoize).explore(first)
            })
            .min()
    }

    fn search_sequential(&self, bag: &NumberBag, target: &BigInt) -> Option<Ranked> {
        let exact_used = AtomicUsize::new(usize::MAX);
        (0..bag.len())
            .filter_map(|first| {
                Branch::new(bag, target, &exact_used, self.config.memoize).explore(first)
            })
            .min()
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Smallest prefix seen per (used positions, running value) state
type StateMemo = HashMap<(u64, BigInt), Candidate>;

/// Depth-first search over all candidates starting with one fixed position
struct Branch<'a> {
    bag: &'a NumberBag,
    target: &'a BigInt,
    /// Fewest numbers of any exact hit found by any branch so far
    exact_used: &'a AtomicUsize,
    indices: Vec<usize>,
    operations: Vec<Operation>,
    used_mask: u64,
    best: Option<Ranked>,
    memo: Option<StateMemo>,
    visited: u64,
    reused: u64,
}

impl<'a> Branch<'a> {
    fn new(
        bag: &'a NumberBag,
        target: &'a BigInt,
        exact_used: &'a AtomicUsize,
        memoize: bool,
    ) -> Self {
        Self {
            bag,
            target,
            exact_used,
            indices: Vec::with_capacity(bag.len()),
            operations: Vec::with_capacity(bag.len()),
            used_mask: 0,
            best: None,
            memo: memoize.then(HashMap::new),
            visited: 0,
            reused: 0,
        }
    }

    fn explore(mut self, first: usize) -> Option<Ranked> {
        if self.bag.has_unused_twin_below(first, 0) {
            return None;
        }
        let value = self.bag.value(first)?.clone();

        self.indices.push(first);
        self.used_mask |= 1 << first;
        self.visit(value);

        debug!(
            "Branch starting at position {} visited {} candidates, skipped {} repeated states",
            first, self.visited, self.reused
        );
        self.best
    }

    fn visit(&mut self, value: BigInt) {
        let depth = self.indices.len();
        if !self.first_at_state(&value, depth) {
            self.reused += 1;
            return;
        }

        self.visited += 1;
        let objective = Objective::new(&value, self.target, depth);

        if objective.distance.is_zero() {
            self.exact_used.fetch_min(depth, Ordering::Relaxed);
        }
        self.offer(objective);

        // Extensions use more numbers than an exact hit already found
        if depth == self.bag.len() || depth >= self.exact_used.load(Ordering::Relaxed) {
            return;
        }

        let bag = self.bag;
        for (next, operand) in bag.iter().enumerate() {
            let bit = 1 << next;
            if self.used_mask & bit != 0 || bag.has_unused_twin_below(next, self.used_mask) {
                continue;
            }

            self.indices.push(next);
            self.used_mask |= bit;
            for operation in Operation::ALL {
                self.operations.push(operation);
                self.visit(operation.apply(&value, operand));
                self.operations.pop();
            }
            self.used_mask &= !bit;
            self.indices.pop();
        }
    }

    /// Record the current prefix for its state, false if a smaller prefix got there first.
    ///
    /// Equal states have identical subtrees, and the prefix with the smaller
    /// (indices, operations) key wins every tie inside them. Nodes with at
    /// most one number left are not recorded.
    fn first_at_state(&mut self, value: &BigInt, depth: usize) -> bool {
        let Some(memo) = self.memo.as_mut() else {
            return true;
        };
        if depth + 2 > self.bag.len() {
            return true;
        }

        let current = (self.indices.as_slice(), self.operations.as_slice());
        match memo.entry((self.used_mask, value.clone())) {
            Entry::Occupied(mut seen) => {
                if (seen.get().indices(), seen.get().operations()) <= current {
                    return false;
                }
                seen.insert(Candidate::from_parts(
                    self.indices.clone(),
                    self.operations.clone(),
                ));
                true
            }
            Entry::Vacant(slot) => {
                slot.insert(Candidate::from_parts(
                    self.indices.clone(),
                    self.operations.clone(),
                ));
                true
            }
        }
    }

    fn offer(&mut self, objective: Objective) {
        let improves = match &self.best {
            None => true,
            Some(best) => match objective.cmp(&best.objective) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Greater => false,
                std::cmp::Ordering::Equal => {
                    (self.indices.as_slice(), self.operations.as_slice())
                        < (best.candidate.indices(), best.candidate.operations())
                }
            },
        };

        if improves {
            self.best = Some(Ranked {
                objective,
                candidate: Candidate::from_parts(self.indices.clone(), self.operations.clone()),
            });
        }
    }
}
