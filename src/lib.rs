pub mod env;
pub mod formula;
pub mod solver;

#[cfg(test)]
mod brute_force;

pub use env::Environment;

/// Outcome of a solve. Unsatisfiability is a defined result, not an error,
/// and is distinct from the empty-formula case (satisfiable with an empty
/// environment).
#[derive(PartialEq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Environment),
    Unsatisfiable,
}

pub use formula::{Clause, Formula, Literal, Variable};
pub use solver::Solver;
