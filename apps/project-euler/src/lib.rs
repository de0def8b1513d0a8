pub mod solutions;

/// Available problem IDs
pub const PROBLEMS: &[u32] = &[2, 3, 5, 7, 10, 12, 15, 21];

/// Run a specific problem and return the answer
/// If verbose is true, the solution may print debug information
pub fn run_problem(id: u32, verbose: bool) -> Option<String> {
    tracing::debug!(problem = id, "running");
    match id {
        2 => Some(solutions::pe2::solve(verbose)),
        3 => Some(solutions::pe3::solve(verbose)),
        5 => Some(solutions::pe5::solve(verbose)),
        7 => Some(solutions::pe7::solve(verbose)),
        10 => Some(solutions::pe10::solve(verbose)),
        12 => Some(solutions::pe12::solve(verbose)),
        15 => Some(solutions::pe15::solve(verbose)),
        21 => Some(solutions::pe21::solve(verbose)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_problem_runs() {
        for &id in PROBLEMS {
            assert!(run_problem(id, false).is_some(), "problem {} missing", id);
        }
    }

    #[test]
    fn test_unknown_problem() {
        assert_eq!(run_problem(1, false), None);
    }
}
