mod rule;

use crate::Board;

/// Computes the generation after `prev` into `next`
///
/// Every cell of `next` is derived from `prev` alone, so the update is fully
/// synchronous: no cell sees a partially updated neighborhood. Both boards
/// must have the same dimensions.
pub fn next_generation(prev: &Board, next: &mut Board) {
    debug_assert_eq!(
        (prev.width(), prev.height()),
        (next.width(), next.height()),
        "generation boards differ in size"
    );

    let rules = rule::get_rule_table();
    for y in 0..prev.height() {
        for x in 0..prev.width() {
            let neighbors = prev.count_neighbors(x, y);
            let alive = prev.get(x, y);
            next.set(x, y, rules[rule::rule_index(alive, neighbors)]);
        }
    }
}

/// A board together with the scratch buffer its next generation is written to
#[derive(Debug, Clone)]
pub struct GameOfLife {
    board: Board,
    scratch: Board,
}

impl GameOfLife {
    #[inline]
    pub fn new(board: Board) -> Self {
        let scratch = Board::new(board.width(), board.height());
        Self { board, scratch }
    }

    /// Advances the board by one generation
    pub fn next_generation(&mut self) {
        next_generation(&self.board, &mut self.scratch);
        std::mem::swap(&mut self.board, &mut self.scratch);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
