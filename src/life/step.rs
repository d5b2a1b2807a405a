use crate::error::Result;
use crate::grid::StateVector;
use crate::life::Rule;
use crate::sparse::CsrMatrix;

/// Apply Conway's rule to `state` given per-cell live-neighbor counts.
#[inline]
pub fn apply(state: &[u8], counts: &[u32]) -> Result<StateVector> {
    Rule::CONWAY.apply(state, counts)
}

/// Advance `state` by one generation of Conway's rule.
pub fn step_once(state: &[u8], matrix: &CsrMatrix<u32>) -> Result<StateVector> {
    step_with(&Rule::CONWAY, state, matrix)
}

/// Advance `state` by one generation of `rule`.
///
/// Neighbor counts are `matrix * state`; cells whose state is not `1`
/// contribute nothing to their neighbors' counts.
pub fn step_with(rule: &Rule, state: &[u8], matrix: &CsrMatrix<u32>) -> Result<StateVector> {
    let alive = state.iter().map(|&cell| u8::from(cell == 1)).collect::<Vec<_>>();
    let counts = matrix.multiply(&alive)?;
    rule.apply(state, &counts)
}

/// Row-parallel variant of `step_with`.
#[cfg(feature = "parallel")]
pub fn par_step_with(rule: &Rule, state: &[u8], matrix: &CsrMatrix<u32>) -> Result<StateVector> {
    let alive = state.iter().map(|&cell| u8::from(cell == 1)).collect::<Vec<_>>();
    let counts = matrix.par_multiply(&alive)?;
    rule.apply(state, &counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use crate::topology::build_topology_for;

    #[test]
    fn apply_follows_conway() {
        assert_eq!(apply(&[1, 1, 1, 0], &[3, 1, 4, 3]).unwrap(), vec![1, 0, 0, 1]);
    }

    #[test]
    fn block_is_still_life() {
        let matrix = build_topology_for(2, 2).unwrap();
        let mut state = vec![1; 4];
        for _ in 0..10 {
            state = step_once(&state, &matrix).unwrap();
            assert_eq!(state, vec![1; 4]);
        }
    }

    #[test]
    fn blinker_oscillates() {
        let matrix = build_topology_for(3, 3).unwrap();
        let horizontal = vec![0, 0, 0, 1, 1, 1, 0, 0, 0];
        let vertical = vec![0, 1, 0, 0, 1, 0, 0, 1, 0];

        let next = step_once(&horizontal, &matrix).unwrap();
        assert_eq!(next, vertical);
        assert_eq!(step_once(&next, &matrix).unwrap(), horizontal);
    }

    #[test]
    fn lone_cell_dies() {
        let matrix = build_topology_for(3, 3).unwrap();
        let state = vec![0, 0, 0, 0, 1, 0, 0, 0, 0];
        assert_eq!(step_once(&state, &matrix).unwrap(), vec![0; 9]);
    }

    #[test]
    fn stray_values_count_as_dead_neighbors() {
        let matrix = build_topology_for(1, 4).unwrap();
        // Cell 1 sees neighbors 0 and 2; only value 1 is alive.
        let state = vec![1, 1, 5, 0];
        assert_eq!(step_once(&state, &matrix).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn mismatched_state_fails_fast() {
        let matrix = build_topology_for(3, 3).unwrap();
        let err = step_once(&[1, 0, 1], &matrix).unwrap_err();
        assert!(matches!(err, LifeError::Index { context: "input vector", .. }));
    }

    #[test]
    fn oversized_state_fails_fast() {
        let matrix = build_topology_for(3, 3).unwrap();
        let err = step_once(&[1; 10], &matrix).unwrap_err();
        assert_eq!(err, LifeError::Shape { context: "neighbor count length", expected: 10, found: 9 });
    }

    #[test]
    fn custom_rule_is_used() {
        let matrix = build_topology_for(1, 3).unwrap();
        let seeds: Rule = "B2/S".parse().unwrap();
        assert_eq!(step_with(&seeds, &[1, 0, 1], &matrix).unwrap(), vec![0, 1, 0]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_step_matches_sequential() {
        let matrix = build_topology_for(6, 7).unwrap();
        let state = (0..42).map(|i| u8::from(i % 3 == 0 || i % 5 == 0)).collect::<Vec<_>>();
        assert_eq!(
            par_step_with(&Rule::CONWAY, &state, &matrix).unwrap(),
            step_with(&Rule::CONWAY, &state, &matrix).unwrap()
        );
    }
}
