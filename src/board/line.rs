use crate::pos::{Pos2, Vec2};

/// Iterator over the cells visited when marching from one cell to another
///
/// Starting at `from`, the marcher steps by exactly 1.0 along the normalized
/// direction towards `to` until the travelled distance exceeds the segment
/// length. Each visited point is truncated to the cell containing it.
///
/// Consecutive duplicates are skipped, and `to` is always yielded last so a
/// stroke ends on the cell the pointer is over.
///
/// A zero-length segment yields exactly one cell.
#[derive(Debug, Clone)]
pub struct LineMarch {
    current: Vec2,
    direction: Vec2,
    length: f32,
    travelled: f32,
    end: Pos2,
    last: Option<Pos2>,
    finished: bool,
}

impl LineMarch {
    /// Both endpoints are expected to already be wrapped onto the board,
    /// i.e. have non-negative coordinates
    pub fn new(from: Pos2, to: Pos2) -> Self {
        let start = Vec2::from(from);
        let delta = Vec2::from(to) - start;
        let length = delta.length();
        // normalizing a zero vector would produce NaN
        let direction = if length > 0.0 {
            delta / length
        } else {
            Vec2::ZERO
        };

        Self {
            current: start,
            direction,
            length,
            travelled: 0.0,
            end: to,
            last: None,
            finished: false,
        }
    }

    fn march(&mut self) -> Option<Pos2> {
        while self.travelled <= self.length {
            // non-negative coordinates, so truncation acts as floor without
            // turning a -1e-7 rounding error into cell -1
            let cell = Pos2 {
                x: self.current.x as i32,
                y: self.current.y as i32,
            };
            self.current += self.direction;
            self.travelled += 1.0;

            if self.last != Some(cell) {
                return Some(cell);
            }
        }
        None
    }
}

impl Iterator for LineMarch {
    type Item = Pos2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let cell = match self.march() {
            Some(cell) => cell,
            None => {
                self.finished = true;
                if self.last == Some(self.end) {
                    return None;
                }
                self.end
            }
        };
        self.last = Some(cell);
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march(from: (i32, i32), to: (i32, i32)) -> Vec<Pos2> {
        LineMarch::new(Pos2::new(from.0, from.1), Pos2::new(to.0, to.1)).collect()
    }

    #[test]
    fn zero_length_yields_single_cell() {
        assert_eq!(march((4, 7), (4, 7)), vec![Pos2::new(4, 7)]);
    }

    #[test]
    fn horizontal_visits_every_cell() {
        let expected = (0..=5).map(|x| Pos2::new(x, 2)).collect::<Vec<_>>();

        assert_eq!(march((0, 2), (5, 2)), expected);
    }

    #[test]
    fn reversed_vertical_visits_every_cell() {
        let expected = (0..=4).rev().map(|y| Pos2::new(1, y)).collect::<Vec<_>>();

        assert_eq!(march((1, 4), (1, 0)), expected);
    }

    #[test]
    fn diagonal_ends_on_target() {
        let cells = march((0, 0), (3, 3));

        assert_eq!(cells.first(), Some(&Pos2::new(0, 0)));
        assert_eq!(cells.last(), Some(&Pos2::new(3, 3)));
        assert!(cells.windows(2).all(|w| w[0] != w[1]), "duplicate cells: {cells:?}");
        assert!(cells.iter().all(|c| c.x == c.y), "off diagonal: {cells:?}");
    }

    #[test]
    fn steep_line_has_no_gaps_in_major_axis() {
        let cells = march((2, 0), (5, 9));

        // stepping by 1.0 along the segment never skips a row on the major axis
        let mut rows = cells.iter().map(|c| c.y).collect::<Vec<_>>();
        rows.dedup();
        assert_eq!(rows, (0..=9).collect::<Vec<_>>());
    }

    #[test]
    fn never_produces_negative_cells() {
        let cells = march((3, 4), (0, 0));

        assert!(cells.iter().all(|c| c.x >= 0 && c.y >= 0), "{cells:?}");
        assert_eq!(cells.last(), Some(&Pos2::new(0, 0)));
    }
}
