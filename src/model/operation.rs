use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

/// Binary operation folding the running result with the next number.
///
/// Variant order is the canonical tie-break order: `Add < Sub < Mul < Div`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// All operations in canonical order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    /// Combine `left` (the running result) with `right` (the next number).
    ///
    /// Total: a division that is by zero or not exact leaves `left` unchanged.
    pub fn apply(self, left: &BigInt, right: &BigInt) -> BigInt {
        match self {
            Operation::Add => left + right,
            Operation::Sub => left - right,
            Operation::Mul => left * right,
            Operation::Div => {
                if !right.is_zero() && (left % right).is_zero() {
                    left / right
                } else {
                    left.clone()
                }
            }
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
            Operation::Div => '/',
        }
    }

    /// Binding strength used when rendering infix expressions
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Operation::Add | Operation::Sub => 1,
            Operation::Mul | Operation::Div => 2,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
