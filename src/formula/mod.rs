pub mod dimacs;

use crate::env::Environment;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn idx(&self) -> usize {
        self.variable().0
    }

    /// Negation is an involution: `l.negated().negated() == l`.
    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Literal::Positive(Variable(x)) => write!(f, "{}", x),
            Literal::Negative(Variable(x)) => write!(f, "!{}", x),
        }
    }
}

/// A disjunction of literals with set semantics: inserting a literal that is
/// already present (same variable and polarity) is a no-op. Both polarities of
/// one variable may coexist in a clause; such tautologies are not simplified.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        let mut clause = Self { literals: vec![] };
        for literal in disjuncts {
            clause.insert(literal);
        }
        clause
    }

    fn insert(&mut self, literal: Literal) {
        if !self.literals.contains(&literal) {
            self.literals.push(literal);
        }
    }

    /// Non-destructive insert; the receiver is unchanged.
    pub fn add(&self, literal: Literal) -> Self {
        let mut clause = self.clone();
        clause.insert(literal);
        clause
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// The empty clause: a contradiction under the current environment.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// A unit clause forces its single literal.
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// The literal to branch or propagate on. Always the first literal in
    /// insertion order, so the same clause yields the same choice every run.
    pub fn choose_literal(&self) -> Option<&Literal> {
        self.literals.first()
    }

    /// Apply a literal known to be true:
    /// - the clause contains `literal` => satisfied, drops out (`None`)
    /// - the clause contains its negation => that negation is removed
    /// - otherwise the clause is unaffected
    ///
    /// Reducing a unit clause by the negation of its literal yields the empty
    /// clause, the conflict signal.
    pub fn reduce(&self, literal: &Literal) -> Option<Clause> {
        if self.contains(literal) {
            return None;
        }
        let negated = literal.negated();
        if self.contains(&negated) {
            Some(Clause {
                literals: self.literals.iter().filter(|l| **l != negated).cloned().collect(),
            })
        } else {
            Some(self.clone())
        }
    }

    /// Direct evaluation, independent of the solver's substitution machinery:
    /// true iff some literal is bound to its own polarity.
    pub fn evaluate(&self, env: &Environment) -> bool {
        self.literals
            .iter()
            .any(|l| env.lookup(l.variable()) == Some(l.is_positive()))
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.literals.len() > 1 {
            f.write_str("(")?;
        }
        let mut first = true;
        for literal in &self.literals {
            if first {
                first = false;
            } else {
                f.write_str(" | ")?;
            }
            write!(f, "{}", literal)?;
        }
        if self.literals.len() > 1 {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// An ordered conjunction of clauses. Order carries no logical meaning but is
/// preserved: the solver breaks ties by first position, so a formula's model
/// is reproducible run to run.
#[derive(Clone, Debug)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: conjuncts.into_iter().collect(),
        }
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// Distinct variables in order of first occurrence.
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen = vec![];
        for clause in &self.clauses {
            for literal in clause.literals() {
                let v = *literal.variable();
                if !seen.contains(&v) {
                    seen.push(v);
                }
            }
        }
        seen
    }

    pub(crate) fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first = true;
        for clause in &self.clauses {
            if first {
                first = false;
            } else {
                f.write_str(" & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

// Random formulas small enough that the brute-force reference stays cheap.
#[cfg(test)]
pub(crate) fn formula_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    const MAX_VARS: usize = 8;

    let literal = (0..MAX_VARS, any::<bool>()).prop_map(|(x, positive)| {
        if positive {
            Literal::Positive(Variable(x))
        } else {
            Literal::Negative(Variable(x))
        }
    });
    let clause = proptest::collection::vec(literal, 1..=4).prop_map(Clause::new);
    proptest::collection::vec(clause, 0..12).prop_map(Formula::new)
}
