use cgolpaint::{
    Camera, Controller, PointerState, RenderSettings, Snapshot, Stroke, Vec2, camera::PanDrag,
};

/// Local units the camera moves per pan key press
const PAN_STEP: f32 = 4.0;
/// Fraction of the current zoom added or removed per zoom step
const ZOOM_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
    Middle,
}

/// A single input, already translated from the terminal's events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePause,
    Clear,
    ResetCounter,
    RateUp,
    RateDown,
    ResetCamera,
    /// Zoom in (`steps > 0`) or out, keeping `anchor` fixed on screen
    Zoom { anchor: Vec2, steps: f32 },
    /// Pan by a number of key steps along each axis
    Pan(Vec2),
    PointerMoved(Vec2),
    Button { button: Button, pressed: bool, at: Vec2 },
}

/// All state one editor frame works with
///
/// Input is applied with [`Editor::apply`], then [`Editor::frame`] advances
/// the simulation and paints, in that order.
pub struct Editor {
    pub controller: Controller,
    pub camera: Camera,
    pub settings: RenderSettings,
    stroke: Stroke,
    pan: PanDrag,
    pointer: Vec2,
    primary: bool,
    secondary: bool,
}

impl Editor {
    pub fn new(controller: Controller, settings: RenderSettings) -> Self {
        Self {
            controller,
            camera: Camera::default(),
            settings,
            stroke: Stroke::default(),
            pan: PanDrag::default(),
            pointer: Vec2::ZERO,
            primary: false,
            secondary: false,
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePause => self.controller.toggle(),
            Command::Clear => self.controller.clear_board(),
            // rate and counter are only editable while paused
            Command::ResetCounter if self.controller.is_paused() => self.controller.reset_counter(),
            Command::RateUp if self.controller.is_paused() => {
                let rate = self.controller.iterations_per_second();
                self.controller.set_iterations_per_second(rate.saturating_add(1));
            }
            Command::RateDown if self.controller.is_paused() => {
                let rate = self.controller.iterations_per_second();
                self.controller.set_iterations_per_second(rate.saturating_sub(1).max(1));
            }
            Command::ResetCounter | Command::RateUp | Command::RateDown => {}
            Command::ResetCamera => self.camera.reset(),
            Command::Zoom { anchor, steps } => {
                let delta = self.camera.zoom() * ZOOM_STEP * steps;
                self.camera.zoom_at(anchor, delta);
            }
            Command::Pan(steps) => self.camera.pan(steps * PAN_STEP),
            Command::PointerMoved(at) => {
                self.pointer = at;
                self.pan.drag(&mut self.camera, at);
            }
            Command::Button {
                button,
                pressed,
                at,
            } => {
                self.pointer = at;
                match button {
                    Button::Primary => self.primary = pressed,
                    Button::Secondary => self.secondary = pressed,
                    Button::Middle if pressed => self.pan.begin(&self.camera, at),
                    Button::Middle => self.pan.end(),
                }
            }
        }
    }

    /// Advances the clock by `delta` seconds, then paints with the current pointer
    ///
    /// Returns the number of generations applied.
    pub fn frame(&mut self, delta: f64) -> u64 {
        let gens = self.controller.tick(delta);

        let cell = self
            .settings
            .hover(&self.camera, self.controller.board(), self.pointer);
        let pointer = PointerState {
            cell,
            primary: self.primary,
            secondary: self.secondary,
        };
        self.stroke.apply(&pointer, &mut self.controller);
        gens
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.controller.board(), &self.camera, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgolpaint::{Board, Pos2};

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    fn editor() -> Editor {
        let settings = RenderSettings {
            cell_size: 2.0,
            ..RenderSettings::default()
        };
        Editor::new(Controller::new(Board::new(10, 10)), settings)
    }

    fn press(button: Button, pressed: bool, x: f32, y: f32) -> Command {
        Command::Button {
            button,
            pressed,
            at: Vec2::new(x, y),
        }
    }

    #[test]
    fn drag_paints_line_while_paused() {
        let mut editor = editor();
        editor.apply(press(Button::Primary, true, 1.0, 1.0));
        editor.frame(0.016);
        editor.apply(Command::PointerMoved(Vec2::new(9.0, 1.0)));
        editor.frame(0.016);
        editor.apply(press(Button::Primary, false, 9.0, 1.0));
        editor.apply(Command::PointerMoved(Vec2::new(9.0, 9.0)));
        editor.frame(0.016);

        let alive = editor.controller.board().iter_alive().collect::<Vec<_>>();
        assert_eq!(alive, (0..=4).map(|x| pos(x, 0)).collect::<Vec<_>>());
        assert_eq!(editor.settings.highlight, Some(pos(4, 4)));
    }

    #[test]
    fn middle_drag_pans_camera() {
        let mut editor = editor();
        editor.apply(press(Button::Middle, true, 10.0, 10.0));
        editor.apply(Command::PointerMoved(Vec2::new(4.0, 12.0)));
        editor.apply(press(Button::Middle, false, 4.0, 12.0));
        editor.apply(Command::PointerMoved(Vec2::new(0.0, 0.0)));

        assert_eq!(editor.camera.offset(), Vec2::new(6.0, -2.0));
    }

    #[test]
    fn rate_only_changes_while_paused() {
        let mut editor = editor();
        editor.apply(Command::RateUp);
        assert_eq!(editor.controller.iterations_per_second(), 11);

        editor.apply(Command::TogglePause);
        editor.apply(Command::RateUp);
        assert_eq!(editor.controller.iterations_per_second(), 11);
    }

    #[test]
    fn rate_never_drops_below_one() {
        let mut editor = editor();
        for _ in 0..20 {
            editor.apply(Command::RateDown);
        }

        assert_eq!(editor.controller.iterations_per_second(), 1);
    }

    #[test]
    fn zoom_keeps_pointer_anchored() {
        let mut editor = editor();
        let anchor = Vec2::new(7.0, 3.0);
        let before = editor.camera.to_world(anchor);
        editor.apply(Command::Zoom { anchor, steps: 1.0 });

        assert!((editor.camera.zoom() - 1.1).abs() < 1e-6);
        assert!(editor.camera.to_world(anchor).abs_diff_eq(before, 1e-4));

        editor.apply(Command::ResetCamera);
        assert_eq!(editor.camera, Camera::default());
    }

    #[test]
    fn running_editor_ticks_and_does_not_paint() {
        let mut editor = editor();
        editor.apply(Command::TogglePause);
        editor.apply(press(Button::Primary, true, 1.0, 1.0));

        assert_eq!(editor.frame(1.0), 10);
        assert_eq!(editor.controller.board().alive_count(), 0);
    }
}
