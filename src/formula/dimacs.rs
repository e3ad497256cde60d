use crate::formula::{Clause, Formula, Literal, Variable};
use std::fmt::{self, Display, Formatter};
use std::io::{BufRead, BufReader, Read};

/// Parses the DIMACS CNF format: `c` comment lines, one `p cnf <variables>
/// <clauses>` declaration, then clause lines of signed integers terminated by
/// `0`. Reading stops once the declared number of clauses has been seen.
pub fn parse<R: Read>(reader: R) -> Result<Formula, DimacsParseError> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];
    let mut num_clauses = None;

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace().peekable();

        match tokens.peek() {
            Some(&"c") | None => continue,
            Some(&"p") => {
                let _ = tokens.next();

                if tokens.next() != Some("cnf") {
                    return Err(DimacsParseError::Format("missing 'cnf'".into()));
                }

                let _num_variables: usize = tokens
                    .next()
                    .and_then(|t| t.parse().ok())
                    .ok_or_else(|| DimacsParseError::Format("invalid variable count".into()))?;

                let count: usize = tokens
                    .next()
                    .and_then(|t| t.parse().ok())
                    .ok_or_else(|| DimacsParseError::Format("invalid clause count".into()))?;
                num_clauses = Some(count);
            }
            Some(_) => {
                let expected = match num_clauses {
                    Some(n) => n,
                    None => return Err(DimacsParseError::Format("missing 'p' line before clauses".into())),
                };

                let mut literals = vec![];
                for token in tokens {
                    match parse_literal(token)? {
                        Some(l) => literals.push(l),
                        // terminating 0
                        None => break,
                    }
                }
                if !literals.is_empty() {
                    clauses.push(Clause::new(literals));
                }

                if clauses.len() >= expected {
                    break;
                }
            }
        }
    }

    if num_clauses.is_none() {
        return Err(DimacsParseError::Format("missing 'p' line before clauses".into()));
    }

    Ok(Formula::new(clauses))
}

fn parse_literal(token: &str) -> Result<Option<Literal>, DimacsParseError> {
    let x: isize = token
        .parse()
        .map_err(|_| DimacsParseError::Format(format!("invalid literal '{}'", token)))?;
    if x > 0 {
        Ok(Some(Literal::Positive(Variable(x as usize))))
    } else if x < 0 {
        Ok(Some(Literal::Negative(Variable(-x as usize))))
    } else {
        Ok(None)
    }
}

#[derive(Debug)]
pub enum DimacsParseError {
    Io(std::io::Error),
    Format(String),
}

impl From<std::io::Error> for DimacsParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl Display for DimacsParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DimacsParseError::Io(e) => write!(f, "io error: {}", e),
            DimacsParseError::Format(msg) => write!(f, "format error: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};
    use crate::{SatResult, Solver};

    #[test]
    fn parse_cnf_basic() {
        let cnf = "c  simple_v3_c2.cnf
c
p cnf 3 2
1 -3 0
2 3 -1 0";
        let f = parse(cnf.as_bytes()).expect("failed to parse");
        assert_eq!(f.clauses().count(), 2);

        assert_eq!(
            f.clauses().nth(0).unwrap().literals().cloned().collect::<Vec<_>>(),
            vec![p(1), n(3)]
        );
        assert_eq!(
            f.clauses().nth(1).unwrap().literals().cloned().collect::<Vec<_>>(),
            vec![p(2), p(3), n(1)]
        );
    }

    #[test]
    fn parse_rejects_clauses_before_declaration() {
        let cnf = "1 -2 0\np cnf 2 1\n";
        assert!(matches!(parse(cnf.as_bytes()), Err(DimacsParseError::Format(_))));
    }

    #[test]
    fn parse_rejects_garbage_literal() {
        let cnf = "p cnf 2 1\n1 x 0\n";
        assert!(matches!(parse(cnf.as_bytes()), Err(DimacsParseError::Format(_))));
    }

    #[test]
    fn parse_deduplicates_repeated_literals() {
        let cnf = "p cnf 2 1\n1 1 -2 0\n";
        let f = parse(cnf.as_bytes()).expect("failed to parse");
        assert_eq!(f.clauses().nth(0).unwrap().len(), 2);
    }

    #[test]
    fn solve_cnf_quinn() {
        let cnf = "c  quinn.cnf
c
p cnf 16 18
  1    2  0
 -2   -4  0
  3    4  0
 -4   -5  0
  5   -6  0
  6   -7  0
  6    7  0
  7  -16  0
  8   -9  0
 -8  -14  0
  9   10  0
  9  -10  0
-10  -11  0
 10   12  0
 11   12  0
 13   14  0
 14  -15  0
 15   16  0
";

        let f = parse(cnf.as_bytes()).expect("failed to parse");

        match Solver::new(f.clone()).solve() {
            SatResult::Satisfiable(env) => {
                for clause in f.clauses() {
                    assert!(clause.evaluate(&env), "unsatisfied clause {}", clause);
                }
            }
            SatResult::Unsatisfiable => panic!("quinn.cnf is satisfiable"),
        }
    }
}
