use crate::error::MoveError;

/// A [Move] is a non-empty set of tile values meant to be flipped together
/// because they sum to a dice throw. Values are stored in ascending order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    tiles: Vec<u8>,
}

impl Move {
    /// Builds a move from arbitrary tile values, sorting them.
    /// Moves returned by [crate::BoardState::legal_moves] don't go through
    /// here; this is for drivers that construct moves by hand.
    pub fn new(tiles: impl Into<Vec<u8>>) -> Result<Self, MoveError> {
        let mut tiles = tiles.into();
        if tiles.is_empty() {
            return Err(MoveError::Empty);
        }
        tiles.sort_unstable();
        for pair in tiles.windows(2) {
            if pair[0] == pair[1] {
                return Err(MoveError::DuplicateTile(pair[0]));
            }
        }
        Ok(Self { tiles })
    }

    /// The tile values of this move, in ascending order.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn sum(&self) -> u32 {
        self.tiles.iter().map(|&tile| u32::from(tile)).sum()
    }
}

/// Finds every subset of `open` with at most `max_flips` elements that sums
/// exactly to `target`. `open` must be strictly ascending; the search picks
/// tiles in increasing position order, so each subset is produced exactly once.
pub(crate) fn enumerate(open: &[u8], target: u32, max_flips: usize) -> Vec<Move> {
    debug_assert!(open.windows(2).all(|pair| pair[0] < pair[1]));
    let mut current = Vec::new();
    let mut results = Vec::new();
    _enumerate(open, target, max_flips, 0, 0, &mut current, &mut results);
    results
}

// Invariant:
//  - When `_enumerate` returns, `current` is unchanged. Any tiles pushed during execution need to have been popped.
fn _enumerate(
    open: &[u8],
    target: u32,
    max_flips: usize,
    start: usize,
    current_sum: u32,
    current: &mut Vec<u8>,
    results: &mut Vec<Move>,
) {
    if current_sum == target && !current.is_empty() {
        // Tiles are at least 1, so extending `current` can only overshoot. Accept and backtrack.
        results.push(Move {
            tiles: current.clone(),
        });
        return;
    }
    if current_sum > target || current.len() == max_flips {
        return;
    }
    for i in start..open.len() {
        current.push(open[i]);
        _enumerate(
            open,
            target,
            max_flips,
            i + 1,
            current_sum + u32::from(open[i]),
            current,
            results,
        );
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use std::collections::BTreeSet;

    // Brute force over all bounded-size combinations, as a reference for the pruned search.
    fn brute_force(open: &[u8], target: u32, max_flips: usize) -> BTreeSet<Vec<u8>> {
        (1..=max_flips)
            .flat_map(|size| open.iter().copied().combinations(size))
            .filter(|combination| {
                combination.iter().map(|&tile| u32::from(tile)).sum::<u32>() == target
            })
            .collect()
    }

    fn as_sets(moves: &[Move]) -> BTreeSet<Vec<u8>> {
        moves.iter().map(|mv| mv.tiles().to_vec()).collect()
    }

    #[test]
    fn matches_brute_force_on_standard_board() {
        let open: Vec<u8> = (1..=9).collect();
        for target in 0..=13 {
            let moves = enumerate(&open, target, 2);
            assert_eq!(brute_force(&open, target, 2), as_sets(&moves));
            assert_eq!(moves.len(), as_sets(&moves).len(), "duplicate subsets");
        }
    }

    #[test]
    fn matches_brute_force_with_larger_flip_limit() {
        let open: Vec<u8> = (1..=12).collect();
        for target in 0..=20 {
            let moves = enumerate(&open, target, 4);
            assert_eq!(brute_force(&open, target, 4), as_sets(&moves));
        }
    }

    #[test]
    fn every_result_sums_to_target_and_respects_bounds() {
        let open = [2u8, 3, 5, 7, 8];
        for target in 0..=25 {
            for mv in enumerate(&open, target, 3) {
                assert_eq!(target, mv.sum());
                assert!(mv.len() >= 1 && mv.len() <= 3);
                assert!(mv.tiles().iter().all(|tile| open.contains(tile)));
            }
        }
    }

    #[test]
    fn single_tile_match_is_accepted_below_the_size_bound() {
        let moves = enumerate(&[1, 2, 9], 9, 2);
        assert!(moves.iter().any(|mv| mv.tiles() == [9]));
    }

    #[test]
    fn unreachable_target_yields_no_moves() {
        assert!(enumerate(&[1], 5, 2).is_empty());
        assert!(enumerate(&[], 5, 2).is_empty());
        assert!(enumerate(&[1, 2, 3], 0, 2).is_empty());
    }

    #[test]
    fn is_idempotent() {
        let open: Vec<u8> = (1..=9).collect();
        assert_eq!(enumerate(&open, 9, 2), enumerate(&open, 9, 2));
    }

    #[test]
    fn new_sorts_tiles() {
        let mv = Move::new(vec![8, 1]).unwrap();
        assert_eq!([1, 8], mv.tiles());
        assert_eq!(9, mv.sum());
    }

    #[test]
    fn new_rejects_empty_and_duplicates() {
        assert_eq!(Err(MoveError::Empty), Move::new(vec![]));
        assert_eq!(Err(MoveError::DuplicateTile(4)), Move::new(vec![4, 2, 4]));
    }
}
