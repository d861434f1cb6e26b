use crate::{Pos2, Vec2};

/// Smallest zoom the camera allows; [`Camera::to_world`] divides by the zoom
pub const MIN_ZOOM: f32 = 0.001;

/// Maps between local (screen) space and world (board) space
///
/// `world = (local + offset) / zoom` and `local = world * zoom - offset`.
/// The zoom is kept at or above [`MIN_ZOOM`] by every mutator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    offset: Vec2,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    pub fn new(offset: Vec2, zoom: f32) -> Self {
        Self {
            offset,
            zoom: zoom.max(MIN_ZOOM),
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        (local + self.offset) / self.zoom
    }

    #[inline]
    pub fn to_local(&self, world: Vec2) -> Vec2 {
        world * self.zoom - self.offset
    }

    /// Changes the zoom by `delta` while keeping the world point under `anchor` in place
    pub fn zoom_at(&mut self, anchor: Vec2, delta: f32) {
        let world = self.to_world(anchor);
        self.zoom = (self.zoom + delta).max(MIN_ZOOM);
        // solve (anchor + offset) / zoom == world for offset
        self.offset = world * self.zoom - anchor;
    }

    /// Moves the camera by `delta` local units, independent of the zoom
    #[inline]
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    #[inline]
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn reset_position(&mut self) {
        self.offset = Vec2::ZERO;
    }
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }
    pub fn reset(&mut self) {
        log::debug!("camera reset from {:?} at {}x", self.offset, self.zoom);
        *self = Self::default();
    }

    /// The board cell under a local point, which may lie outside the board
    pub fn pick_cell(&self, local: Vec2, cell_size: f32) -> Pos2 {
        (self.to_world(local) / cell_size).floor()
    }
}

/// Whether a world point lies on the rendered board
///
/// This is a plain bounds check: world space does not wrap, only the board's
/// cell lookups do.
pub fn is_on_board(world: Vec2, board_width: i32, board_height: i32, cell_size: f32) -> bool {
    world.x >= 0.0
        && world.y >= 0.0
        && world.x < board_width as f32 * cell_size
        && world.y < board_height as f32 * cell_size
}

/// A drag-to-pan gesture
///
/// While active, the camera offset follows the pointer: moving the pointer
/// right by `d` local units moves the offset left by `d`, so the board
/// appears to be dragged along with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanDrag {
    hold: Option<(Vec2, Vec2)>,
}

impl PanDrag {
    /// Starts a drag with the pointer at `local`
    pub fn begin(&mut self, camera: &Camera, local: Vec2) {
        self.hold = Some((local, camera.offset()));
    }

    /// Moves the camera for the pointer now at `local`; does nothing when inactive
    pub fn drag(&self, camera: &mut Camera, local: Vec2) {
        if let Some((hold_local, hold_offset)) = self.hold {
            camera.set_offset(hold_offset - (local - hold_local));
        }
    }

    pub fn end(&mut self) {
        self.hold = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.hold.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    fn cameras() -> Vec<Camera> {
        vec![
            Camera::default(),
            Camera::new(v(12.5, -40.0), 2.0),
            Camera::new(v(-300.0, 75.25), 0.25),
            Camera::new(v(0.0, 0.0), 7.5),
        ]
    }

    fn points() -> Vec<Vec2> {
        vec![v(0.0, 0.0), v(1.0, 1.0), v(512.0, 384.0), v(-20.5, 99.75)]
    }

    #[test]
    fn local_world_round_trip() {
        for camera in cameras() {
            for p in points() {
                let back = camera.to_local(camera.to_world(p));
                assert!(back.abs_diff_eq(p, EPSILON), "{camera:?}: {p:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn identity_camera_maps_to_itself() {
        let camera = Camera::default();

        assert_eq!(camera.to_world(v(3.0, 4.0)), v(3.0, 4.0));
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        for mut camera in cameras() {
            for anchor in points() {
                for delta in [0.5, -0.1, 3.0] {
                    let before = camera.to_world(anchor);
                    camera.zoom_at(anchor, delta);
                    let after = camera.to_world(anchor);

                    assert!(
                        after.abs_diff_eq(before, EPSILON * before.length().max(1.0)),
                        "{camera:?}: {before:?} -> {after:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::default();
        camera.zoom_at(v(10.0, 10.0), -5.0);

        assert_eq!(camera.zoom(), MIN_ZOOM);
        assert!(camera.to_world(v(10.0, 10.0)).x.is_finite());
        assert_eq!(Camera::new(Vec2::ZERO, 0.0).zoom(), MIN_ZOOM);
    }

    #[test]
    fn pan_ignores_zoom() {
        let mut camera = Camera::new(v(1.0, 2.0), 4.0);
        camera.pan(v(10.0, -2.0));

        assert_eq!(camera.offset(), v(11.0, 0.0));
        assert_eq!(camera.zoom(), 4.0);
    }

    #[test]
    fn reset_restores_identity() {
        let mut camera = Camera::new(v(5.0, 5.0), 3.0);
        camera.reset_position();
        assert_eq!(camera.offset(), Vec2::ZERO);
        assert_eq!(camera.zoom(), 3.0);

        camera.pan(v(1.0, 1.0));
        camera.reset_zoom();
        assert_eq!(camera.zoom(), 1.0);
        assert_eq!(camera.offset(), v(1.0, 1.0));

        camera.zoom_at(v(4.0, 4.0), 2.0);
        camera.reset();
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn on_board_bounds_are_half_open() {
        assert!(is_on_board(v(0.0, 0.0), 10, 5, 2.0));
        assert!(is_on_board(v(19.9, 9.9), 10, 5, 2.0));
        assert!(!is_on_board(v(20.0, 0.0), 10, 5, 2.0));
        assert!(!is_on_board(v(0.0, 10.0), 10, 5, 2.0));
        assert!(!is_on_board(v(-0.1, 3.0), 10, 5, 2.0));
    }

    #[test]
    fn pick_cell_uses_cell_size() {
        let camera = Camera::new(v(10.0, 0.0), 2.0);

        // world = (local + offset) / zoom = (15, 6)
        assert_eq!(camera.pick_cell(v(20.0, 12.0), 5.0), Pos2 { x: 3, y: 1 });
        assert_eq!(camera.pick_cell(v(-30.0, 0.0), 5.0), Pos2 { x: -2, y: 0 });
    }

    #[test]
    fn pan_drag_follows_pointer() {
        let mut camera = Camera::new(v(100.0, 50.0), 2.0);
        let mut drag = PanDrag::default();

        drag.drag(&mut camera, v(0.0, 0.0));
        assert_eq!(camera.offset(), v(100.0, 50.0), "inactive drag moved camera");

        drag.begin(&camera, v(10.0, 10.0));
        drag.drag(&mut camera, v(14.0, 7.0));
        assert_eq!(camera.offset(), v(96.0, 53.0));
        drag.drag(&mut camera, v(10.0, 10.0));
        assert_eq!(camera.offset(), v(100.0, 50.0));

        drag.end();
        assert!(!drag.is_active());
    }
}
