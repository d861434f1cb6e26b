use crate::{Controller, Pos2};

/// Pointer input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Board cell under the pointer; may be outside the board
    pub cell: Pos2,
    /// Primary button held: paint live cells
    pub primary: bool,
    /// Secondary button held: paint dead cells
    pub secondary: bool,
}

impl PointerState {
    /// The state a stroke paints with, if any button is held
    ///
    /// The primary button wins when both are held.
    pub fn paint_state(&self) -> Option<bool> {
        match (self.primary, self.secondary) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

/// A drag-to-draw stroke carried from frame to frame
///
/// Each frame, the segment from the previously picked cell to the currently
/// picked one is painted, so fast pointer motion still leaves a continuous
/// line. Painting only happens while the simulation is paused.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stroke {
    previous: Option<Pos2>,
    active: bool,
}

impl Stroke {
    /// Applies one frame of pointer input to the controller's board
    ///
    /// Returns whether any cells were painted.
    pub fn apply(&mut self, pointer: &PointerState, controller: &mut Controller) -> bool {
        let current = pointer.cell;
        let from = self.previous.unwrap_or(current);
        self.previous = Some(current);

        self.active = false;
        if !controller.is_paused() {
            return false;
        }
        let Some(state) = pointer.paint_state() else {
            return false;
        };

        controller.board_mut().set_line(from, current, state);
        self.active = true;
        true
    }

    /// Whether the last applied frame painted
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The cell picked in the last applied frame
    #[inline]
    pub fn previous(&self) -> Option<Pos2> {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    fn pointer(x: i32, y: i32, primary: bool, secondary: bool) -> PointerState {
        PointerState {
            cell: pos(x, y),
            primary,
            secondary,
        }
    }

    fn alive(controller: &Controller) -> Vec<Pos2> {
        controller.board().iter_alive().collect()
    }

    #[test]
    fn first_frame_paints_single_cell() {
        let mut controller = Controller::new(Board::new(10, 10));
        let mut stroke = Stroke::default();

        assert!(stroke.apply(&pointer(4, 4, true, false), &mut controller));
        assert_eq!(alive(&controller), vec![pos(4, 4)]);
    }

    #[test]
    fn drag_connects_consecutive_frames() {
        let mut controller = Controller::new(Board::new(10, 10));
        let mut stroke = Stroke::default();

        stroke.apply(&pointer(1, 3, false, false), &mut controller);
        stroke.apply(&pointer(1, 3, true, false), &mut controller);
        stroke.apply(&pointer(6, 3, true, false), &mut controller);

        assert_eq!(alive(&controller), (1..=6).map(|x| pos(x, 3)).collect::<Vec<_>>());
        assert!(stroke.is_active());
    }

    #[test]
    fn secondary_button_erases() {
        let mut controller = Controller::new(Board::from_alive(10, 1, (0..10).map(|x| pos(x, 0))));
        let mut stroke = Stroke::default();

        stroke.apply(&pointer(2, 0, false, true), &mut controller);
        stroke.apply(&pointer(4, 0, false, true), &mut controller);

        assert_eq!(
            alive(&controller),
            [0, 1, 5, 6, 7, 8, 9].map(|x| pos(x, 0)).to_vec()
        );
    }

    #[test]
    fn no_button_paints_nothing_but_tracks_pointer() {
        let mut controller = Controller::new(Board::new(10, 10));
        let mut stroke = Stroke::default();

        assert!(!stroke.apply(&pointer(2, 2, false, false), &mut controller));
        assert_eq!(controller.board().alive_count(), 0);
        assert_eq!(stroke.previous(), Some(pos(2, 2)));
        assert!(!stroke.is_active());
    }

    #[test]
    fn running_simulation_blocks_painting() {
        let mut controller = Controller::new(Board::new(10, 10));
        controller.resume();
        let mut stroke = Stroke::default();

        assert!(!stroke.apply(&pointer(2, 2, true, false), &mut controller));
        assert_eq!(controller.board().alive_count(), 0);

        // the pick is still tracked so a pause resumes from here
        controller.pause();
        stroke.apply(&pointer(4, 2, true, false), &mut controller);
        assert_eq!(alive(&controller), vec![pos(2, 2), pos(3, 2), pos(4, 2)]);
    }

    #[test]
    fn primary_wins_over_secondary() {
        assert_eq!(pointer(0, 0, true, true).paint_state(), Some(true));
        assert_eq!(pointer(0, 0, false, true).paint_state(), Some(false));
        assert_eq!(pointer(0, 0, false, false).paint_state(), None);
    }
}
