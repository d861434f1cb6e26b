mod fill;
mod line;

pub use self::fill::{FillMode, Pattern};
pub use self::line::LineMarch;
use crate::Pos2;

/// Offsets of the 8 cells in the Moore neighborhood
const NEIGHBORHOOD: [Pos2; 8] = [
    Pos2 { x: -1, y: -1 },
    Pos2 { x: 0, y: -1 },
    Pos2 { x: 1, y: -1 },
    Pos2 { x: -1, y: 0 },
    Pos2 { x: 1, y: 0 },
    Pos2 { x: -1, y: 1 },
    Pos2 { x: 0, y: 1 },
    Pos2 { x: 1, y: 1 },
];

/// A fixed-size grid of cells whose edges wrap around (a torus)
///
/// Every integer coordinate is valid: coordinates are wrapped with
/// [`Board::wrap`] before each access, so `(-1, 0)` on a 10-wide board is the
/// same cell as `(9, 0)`. Cells are stored densely, row-major, one byte each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl Board {
    /// Creates an all-dead board
    ///
    /// # Panics
    /// If either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
        }
    }

    /// Creates a board with the given cells alive, wrapping any that fall outside
    pub fn from_alive<I>(width: i32, height: i32, alive: I) -> Self
    where
        I: IntoIterator<Item = Pos2>,
    {
        let mut board = Self::new(width, height);
        for pos in alive {
            board.set(pos.x, pos.y, true);
        }
        board
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Wraps a coordinate onto the board: `((x % w) + w) % w`
    #[inline]
    pub fn wrap(&self, x: i32, y: i32) -> Pos2 {
        Pos2 {
            x: x.rem_euclid(self.width),
            y: y.rem_euclid(self.height),
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        let pos = self.wrap(x, y);
        pos.y as usize * self.width as usize + pos.x as usize
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(x, y)] != 0
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, state: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = u8::from(state);
    }

    /// Counts the live cells in the Moore neighborhood of `(x, y)`, in `0..=8`
    ///
    /// Neighbors are looked up with wrapping, so cells on an edge neighbor the
    /// opposite edge.
    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        // offsets are applied on the wrapped cell so extreme coordinates can't overflow
        let center = self.wrap(x, y);
        NEIGHBORHOOD
            .iter()
            .map(|offset| self.cells[self.index(center.x + offset.x, center.y + offset.y)])
            .sum()
    }

    /// Sets every cell along the straight line between two cells to `state`
    ///
    /// Both endpoints are wrapped first, then the line is marched between the
    /// wrapped points (see [`LineMarch`]). A line from a cell to itself sets
    /// only that cell.
    pub fn set_line(&mut self, from: Pos2, to: Pos2, state: bool) {
        let from = self.wrap(from.x, from.y);
        let to = self.wrap(to.x, to.y);
        for cell in LineMarch::new(from, to) {
            self.set(cell.x, cell.y, state);
        }
    }

    /// Kills every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Writes `pattern` with its top-left corner at `origin`, wrapping at the edges
    pub fn stamp(&mut self, pattern: Pattern, origin: Pos2) {
        let origin = self.wrap(origin.x, origin.y);
        for &cell in pattern.cells() {
            let pos = origin + cell;
            self.set(pos.x, pos.y, true);
        }
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Iterates over the live cells in row-major order
    pub fn iter_alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(move |(i, _)| Pos2 {
                x: (i % width) as i32,
                y: (i / width) as i32,
            })
    }
}

impl std::fmt::Display for Board {
    /// One line per row, `█` for alive and `.` for dead
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.width as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", if cell != 0 { '█' } else { '.' })?;
            }
        }
        Ok(())
    }
}
