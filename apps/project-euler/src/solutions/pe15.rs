use math::comb;

/// PE15: Lattice Paths
/// Count the monotone routes through a 20x20 grid: choose 20 of 40 moves.
pub fn solve(_verbose: bool) -> String {
    comb(40, 20).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        assert_eq!(solve(false), "137846528820");
    }
}
