use std::process::ExitCode;

use constellation::{levels, HintPath, TrailSolver};
use itertools::Itertools;

fn main() -> ExitCode {
    let pack = match levels::load() {
        Ok(pack) => pack,
        Err(invalid) => {
            eprintln!("{invalid}");
            return ExitCode::FAILURE;
        }
    };

    let mut unsolved = 0;
    for (index, level) in pack.iter().enumerate() {
        let odd = level.odd_nodes();
        match TrailSolver::from(level).solve() {
            Ok(trail) => {
                let seconds = HintPath::plan(level, &trail)
                    .map(|hint| hint.duration().as_secs_f64())
                    .unwrap_or_default();
                println!("{:>2}. {level}; odd nodes [{}]; hint {seconds:.2}s", index + 1, odd.iter().join(", "));
                println!("    {trail}");
            }
            Err(failure) => {
                unsolved += 1;
                println!("{:>2}. {level}; odd nodes [{}]; {failure}", index + 1, odd.iter().join(", "));
            }
        }
    }

    if unsolved == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
