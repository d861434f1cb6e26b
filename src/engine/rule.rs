use std::sync::OnceLock;

/// Number of possible live-neighbor counts, `0..=8`
const NEIGHBOR_COUNTS: usize = 9;
/// One row of outcomes for a dead center cell, one for a live one
const ENTRIES: usize = 2 * NEIGHBOR_COUNTS;
type RuleTable = [bool; ENTRIES];

/// Index into the rule table for a cell state and its live-neighbor count
#[inline]
pub(super) fn rule_index(alive: bool, neighbors: u8) -> usize {
    debug_assert!(neighbors <= 8, "more than 8 neighbors: {neighbors}");
    usize::from(alive) * NEIGHBOR_COUNTS + neighbors as usize
}

/// Returns a singleton lookup table for the B3/S23 ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
pub(super) fn get_rule_table() -> &'static RuleTable {
    static CELL: OnceLock<RuleTable> = OnceLock::new();
    CELL.get_or_init(generate_rule_table)
}

/// Creates the lookup table for the classic Game of Life ruleset
///
/// Indexed with [`rule_index`]. Returns whether the center cell is alive in
/// the next generation:
/// - a live cell with fewer than 2 live neighbors dies
/// - a live cell with more than 3 live neighbors dies
/// - a live cell with 2 or 3 live neighbors survives
/// - a dead cell with exactly 3 live neighbors is born
pub(super) fn generate_rule_table() -> RuleTable {
    let mut table = [false; ENTRIES];
    for alive in [false, true] {
        for neighbors in 0..=8u8 {
            table[rule_index(alive, neighbors)] = matches!((alive, neighbors), (true, 2) | (_, 3));
        }
    }
    table
}
