//! Model module: the input numbers and the arithmetic transition

mod bag;
mod errors;
mod operation;

pub use bag::{MAX_NUMBERS, NumberBag};
pub use errors::ModelError;
pub use operation::Operation;
