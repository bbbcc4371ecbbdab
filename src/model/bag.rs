use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use num_bigint::BigInt;

use crate::model::errors::ModelError;

/// Upper bound on bag size; the searcher tracks used positions in a `u64` mask.
pub const MAX_NUMBERS: usize = 64;

/// The ordered, read-only collection of input numbers.
///
/// Positions, not values, identify numbers: `[2, 2]` holds two distinct
/// entries that happen to share a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberBag {
    values: Vec<BigInt>,
}

impl NumberBag {
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyNumbers`] if `numbers` is empty and
    /// [`ModelError::TooManyNumbers`] if it holds more than [`MAX_NUMBERS`].
    pub fn new(numbers: Vec<i64>) -> Result<Self, ModelError> {
        debug!("Building number bag from {:?}", numbers);

        if numbers.is_empty() {
            warn!("Number list is empty");
            return Err(ModelError::EmptyNumbers);
        }

        if numbers.len() > MAX_NUMBERS {
            warn!("Number list has {} entries", numbers.len());
            return Err(ModelError::TooManyNumbers {
                count: numbers.len(),
                max: MAX_NUMBERS,
            });
        }

        Ok(Self {
            values: numbers.into_iter().map(BigInt::from).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the bag holds no numbers, which [`NumberBag::new`] never allows
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value stored at `index`, or `None` when out of range
    pub fn value(&self, index: usize) -> Option<&BigInt> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[BigInt] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &BigInt> {
        self.values.iter()
    }

    /// True when an index below `index` outside `used` carries the same value.
    ///
    /// Choosing such an index instead of `index` yields an identical trace
    /// with a smaller index key.
    pub(crate) fn has_unused_twin_below(&self, index: usize, used: u64) -> bool {
        let Some(value) = self.values.get(index) else {
            return false;
        };
        self.values
            .iter()
            .take(index)
            .enumerate()
            .any(|(i, other)| used & (1 << i) == 0 && other == value)
    }
}

impl TryFrom<Vec<i64>> for NumberBag {
    type Error = ModelError;

    fn try_from(numbers: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(numbers)
    }
}

impl FromStr for NumberBag {
    type Err = ModelError;

    /// Parse a whitespace or comma separated list of integers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<i64>().map_err(|_| {
                    warn!("Rejecting non-integer token: '{}'", token);
                    ModelError::InvalidNumber(token.to_string())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(numbers)
    }
}

impl fmt::Display for NumberBag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
