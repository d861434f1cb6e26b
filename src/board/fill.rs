use super::Board;
use crate::Pos2;
use std::str::FromStr;

/// How a fresh board is populated at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
    /// Live cells along all four edges, everything else dead
    Border,
}

impl FillMode {
    fn fill_cell<R: rand::Rng>(&self, cell: Pos2, w: i32, h: i32, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.x + cell.y) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
            Self::Border => cell.x == 0 || cell.y == 0 || cell.x == w - 1 || cell.y == h - 1,
        }
    }

    pub fn create_board(self, w: i32, h: i32) -> Board {
        self.create_board_with(w, h, &mut rand::rng())
    }

    pub fn create_board_with<R: rand::Rng>(self, w: i32, h: i32, rng: &mut R) -> Board {
        let mut board = Board::new(w, h);
        if self == Self::Empty {
            return board;
        }

        for y in 0..h {
            for x in 0..w {
                if self.fill_cell(Pos2 { x, y }, w, h, rng) {
                    board.set(x, y, true);
                }
            }
        }
        board
    }
}

impl FromStr for FillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "alternating" => Ok(Self::Alternating),
            "all" => Ok(Self::All),
            "empty" => Ok(Self::Empty),
            "border" => Ok(Self::Border),
            _ => Err(s.to_owned()),
        }
    }
}

/// Well-known patterns that can be stamped onto a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Block,
    Blinker,
    Toad,
    /// Moves one cell down-right every 4 generations
    Glider,
    LightweightSpaceship,
    GosperGliderGun,
}

const fn p(x: i32, y: i32) -> Pos2 {
    Pos2 { x, y }
}

const BLOCK: &[Pos2] = &[p(0, 0), p(1, 0), p(0, 1), p(1, 1)];
const BLINKER: &[Pos2] = &[p(0, 0), p(1, 0), p(2, 0)];
const TOAD: &[Pos2] = &[p(1, 0), p(2, 0), p(3, 0), p(0, 1), p(1, 1), p(2, 1)];
const GLIDER: &[Pos2] = &[p(1, 0), p(2, 1), p(0, 2), p(1, 2), p(2, 2)];
#[rustfmt::skip]
const LWSS: &[Pos2] = &[
    p(1, 0), p(4, 0),
    p(0, 1),
    p(0, 2), p(4, 2),
    p(0, 3), p(1, 3), p(2, 3), p(3, 3),
];
#[rustfmt::skip]
const GOSPER_GLIDER_GUN: &[Pos2] = &[
    // left block
    p(0, 4), p(1, 4), p(0, 5), p(1, 5),
    // left ship
    p(10, 4), p(10, 5), p(10, 6),
    p(11, 3), p(11, 7),
    p(12, 2), p(12, 8),
    p(13, 2), p(13, 8),
    p(14, 5),
    p(15, 3), p(15, 7),
    p(16, 4), p(16, 5), p(16, 6),
    p(17, 5),
    // right ship
    p(20, 2), p(20, 3), p(20, 4),
    p(21, 2), p(21, 3), p(21, 4),
    p(22, 1), p(22, 5),
    p(24, 0), p(24, 1), p(24, 5), p(24, 6),
    // right block
    p(34, 2), p(34, 3), p(35, 2), p(35, 3),
];

impl Pattern {
    /// Live cells relative to the pattern's top-left corner
    pub fn cells(self) -> &'static [Pos2] {
        match self {
            Self::Block => BLOCK,
            Self::Blinker => BLINKER,
            Self::Toad => TOAD,
            Self::Glider => GLIDER,
            Self::LightweightSpaceship => LWSS,
            Self::GosperGliderGun => GOSPER_GLIDER_GUN,
        }
    }

    /// Width and height of the pattern's bounding box
    pub fn size(self) -> Pos2 {
        let cells = self.cells();
        Pos2 {
            x: cells.iter().map(|c| c.x).max().unwrap_or(-1) + 1,
            y: cells.iter().map(|c| c.y).max().unwrap_or(-1) + 1,
        }
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "block" => Ok(Self::Block),
            "blinker" => Ok(Self::Blinker),
            "toad" => Ok(Self::Toad),
            "glider" => Ok(Self::Glider),
            "lwss" => Ok(Self::LightweightSpaceship),
            "gosper" => Ok(Self::GosperGliderGun),
            _ => Err(s.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    #[test]
    fn fill_mode_parses() {
        assert_eq!("border".parse::<FillMode>(), Ok(FillMode::Border));
        assert_eq!("alternating".parse::<FillMode>(), Ok(FillMode::Alternating));
        assert!("checkers".parse::<FillMode>().is_err());
    }

    #[test]
    fn create_board_all_fills_grid() {
        let board = FillMode::All.create_board(3, 2);

        assert_eq!(board.alive_count(), 6);
    }

    #[test]
    fn create_board_empty_is_empty() {
        let board = FillMode::Empty.create_board(5, 4);

        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn create_board_alternating_uses_parity() {
        let board = FillMode::Alternating.create_board(3, 3);

        let expected = vec![pos(0, 0), pos(2, 0), pos(1, 1), pos(0, 2), pos(2, 2)];
        assert_eq!(board.iter_alive().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn create_board_border_rings_the_edges() {
        let board = FillMode::Border.create_board(4, 3);

        assert_eq!(board.to_string(), "████\n█..█\n████");
    }

    #[test]
    fn create_board_random_is_within_bounds() {
        let board = FillMode::Random.create_board(4, 3);

        assert!(board.alive_count() <= 12);
        assert!(board.iter_alive().all(|p| p.x < 4 && p.y < 3));
    }

    #[test]
    fn pattern_sizes() {
        assert_eq!(Pattern::Glider.size(), pos(3, 3));
        assert_eq!(Pattern::Blinker.size(), pos(3, 1));
        assert_eq!(Pattern::GosperGliderGun.size(), pos(36, 9));
        assert_eq!(Pattern::GosperGliderGun.cells().len(), 36);
    }

    #[test]
    fn stamp_wraps_around_edges() {
        let mut board = Board::new(5, 5);
        board.stamp(Pattern::Block, pos(4, 4));

        assert_eq!(
            board.iter_alive().collect::<Vec<_>>(),
            vec![pos(0, 0), pos(4, 0), pos(0, 4), pos(4, 4)]
        );
    }
}
