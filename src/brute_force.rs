use crate::*;

// Exhaustive reference solver for cross-checking the DPLL engine in tests.
// Variables are sparse, so assignments are bitmasks over the formula's
// distinct-variable list rather than raw indices.
#[cfg(test)]
pub(crate) fn solve_brute_force(f: &Formula) -> bool {
    let variables = f.variables();
    assert!(variables.len() <= 16); // just for safety

    'search: for assignment in 0..(1u32 << variables.len()) {
        'clauses: for clause in f.clauses() {
            for literal in clause.literals() {
                let position = variables
                    .iter()
                    .position(|v| v == literal.variable())
                    .expect("every literal's variable is in the formula");
                let value = assignment & (1 << position) != 0;
                if value == literal.is_positive() {
                    // this clause is satisfied, let's go to the next one
                    continue 'clauses;
                }
            }
            // if we got here, this clause was not satisfied, so this assignment is bogus
            continue 'search;
        }
        // if we got here, every clause was satisfied, so we're done and satisfiable
        return true;
    }
    // no assignment is valid
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    #[test]
    fn brute_force_sat() {
        let f = Formula::new(vec![Clause::new(vec![p(0), p(1)]), Clause::new(vec![n(0)])]);
        assert!(solve_brute_force(&f));
    }

    #[test]
    fn brute_force_unsat() {
        let f = Formula::new(vec![
            Clause::new(vec![p(0), p(1)]),
            Clause::new(vec![n(0)]),
            Clause::new(vec![n(1)]),
        ]);
        assert!(!solve_brute_force(&f));
    }

    #[test]
    fn brute_force_empty_formula() {
        let f = Formula::new(vec![]);
        assert!(solve_brute_force(&f));
    }

    #[test]
    fn brute_force_sparse_variables() {
        let f = Formula::new(vec![Clause::new(vec![p(40), p(90)]), Clause::new(vec![n(90)])]);
        assert!(solve_brute_force(&f));
    }
}
