use clap::{App, Arg};
use dpllsat::formula::dimacs::{parse, DimacsParseError};
use dpllsat::formula::Formula;
use dpllsat::{Environment, SatResult, Solver};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    let matches = App::new("dpllsat")
        .about("decides satisfiability of a DIMACS CNF formula with baseline DPLL")
        .arg(
            Arg::with_name("INPUT")
                .help("input file (in CNF); reads stdin if omitted")
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("FILE")
                .help("also write the satisfying assignment to FILE"),
        )
        .get_matches();

    let f = if let Some(path) = matches.value_of("INPUT") {
        parse_from_file(path)
    } else {
        parse(std::io::stdin())
    };

    let f = match f {
        Ok(f) => f,
        Err(e) => {
            eprintln!("parse error: {}", e);
            std::process::exit(-1);
        }
    };

    let mut solver = Solver::new(f);

    let exit_code = match solver.solve() {
        SatResult::Satisfiable(env) => {
            let assignment = assignment_line(&env);
            println!("s SATISFIABLE");
            println!("{}", assignment);
            if let Some(path) = matches.value_of("output") {
                if let Err(e) = write_assignment(path, &assignment) {
                    eprintln!("cannot write {}: {}", path, e);
                    std::process::exit(-1);
                }
            }
            0
        }
        SatResult::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            1
        }
    };
    std::process::exit(exit_code);
}

fn parse_from_file(path: &str) -> Result<Formula, DimacsParseError> {
    let file = File::open(path)?;
    parse(file)
}

/// DIMACS-style value line: signed variable numbers sorted by variable,
/// terminated by 0.
fn assignment_line(env: &Environment) -> String {
    let mut bindings: Vec<(usize, bool)> = env.iter().map(|(v, value)| (v.0, *value)).collect();
    bindings.sort();

    let mut line = String::from("v");
    for (x, value) in bindings {
        if value {
            line.push_str(&format!(" {}", x));
        } else {
            line.push_str(&format!(" -{}", x));
        }
    }
    line.push_str(" 0");
    line
}

fn write_assignment(path: &str, assignment: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{}", assignment)
}
