use crate::env::Environment;
use crate::formula::{Clause, Formula, Literal, Variable};
use crate::SatResult;
use log::trace;

/// A DPLL solver: depth-first search with unit propagation and two-way
/// branching. See http://en.wikipedia.org/wiki/DPLL_algorithm
pub struct Solver {
    clauses: Vec<Clause>,
    variables: Vec<Variable>,
}

/// An unexplored alternative: the clause set and environment that result from
/// taking the other polarity at a branch point.
struct Frame {
    clauses: Vec<Clause>,
    env: Environment,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        let variables = formula.variables();
        Self {
            clauses: formula.into_clauses(),
            variables,
        }
    }

    /// Runs the search. The recursion of the textbook procedure is flattened
    /// into a worklist of pending [`Frame`]s, so search depth is bounded by
    /// heap memory rather than the native call stack. Exploration order is
    /// unchanged: deepest frame first, positive polarity before negative.
    pub fn solve(&mut self) -> SatResult {
        let mut pending = vec![Frame {
            clauses: self.clauses.clone(),
            env: Environment::new(),
        }];

        while let Some(frame) = pending.pop() {
            let Frame { mut clauses, mut env } = frame;
            loop {
                // every original clause satisfied or eliminated
                if clauses.is_empty() {
                    return SatResult::Satisfiable(self.complete(env));
                }

                let (literal, forced) = match Self::smallest(&clauses) {
                    None => {
                        trace!("conflict with {} variables bound, backtracking", env.len());
                        break;
                    }
                    Some(clause) => {
                        let literal = clause
                            .choose_literal()
                            .copied()
                            .expect("smallest returns no empty clause");
                        (literal, clause.is_unit())
                    }
                };
                let variable = *literal.variable();

                if forced {
                    // a unit clause leaves no choice
                    trace!("unit {}", literal);
                    env = env.bind(variable, literal.is_positive());
                    clauses = Self::substitute(&clauses, &literal);
                } else {
                    trace!("decide {:?} at depth {}", variable, pending.len());
                    let negative = Literal::Negative(variable);
                    pending.push(Frame {
                        clauses: Self::substitute(&clauses, &negative),
                        env: env.put_false(variable),
                    });
                    let positive = Literal::Positive(variable);
                    env = env.put_true(variable);
                    clauses = Self::substitute(&clauses, &positive);
                }
            }
        }

        SatResult::Unsatisfiable
    }

    /// The first clause of minimum size, in formula order. `None` means some
    /// clause is empty and this branch holds a contradiction; the scan stops
    /// at the first empty clause it sees.
    fn smallest(clauses: &[Clause]) -> Option<&Clause> {
        let mut smallest = &clauses[0];
        for clause in clauses {
            if clause.is_empty() {
                return None;
            }
            if clause.len() < smallest.len() {
                smallest = clause;
            }
        }
        Some(smallest)
    }

    /// Sets `literal` true across the whole clause list: satisfied clauses
    /// drop out, the rest keep their order.
    fn substitute(clauses: &[Clause], literal: &Literal) -> Vec<Clause> {
        clauses.iter().filter_map(|c| c.reduce(literal)).collect()
    }

    /// A clause that gets satisfied early drops out before all its variables
    /// are decided. Any value works for the ones left over; they are bound
    /// true so callers always get a model covering every variable of the
    /// input formula.
    fn complete(&self, mut env: Environment) -> Environment {
        for variable in &self.variables {
            if env.lookup(variable).is_none() {
                env = env.put_true(*variable);
            }
        }
        env
    }
}
