//! Read-only view of the simulation for renderers.

use crate::{Board, Camera, Pos2, Vec2, camera::is_on_board};

/// A color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Area outside the board
    pub const BACKGROUND: Self = Self::new(0.2, 0.2, 0.2);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation, `t = 0` is `self` and `t = 1` is `other`
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Components scaled to bytes, clamped into range
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

/// Per-frame view state owned by the host, never by the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Side length of one cell in world units
    pub cell_size: f32,
    /// Color at the board's left edge
    pub gradient_left: Rgb,
    /// Color at the board's right edge
    pub gradient_right: Rgb,
    /// The hovered cell, when the pointer is over the board
    pub highlight: Option<Pos2>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            cell_size: 5.0,
            gradient_left: Rgb::new(1.0, 0.0, 1.0),
            gradient_right: Rgb::new(1.0, 1.0, 0.0),
            highlight: None,
        }
    }
}

impl RenderSettings {
    /// Updates the highlight for the pointer at `local`
    ///
    /// Returns the picked cell, which is reported even when off the board.
    pub fn hover(&mut self, camera: &Camera, board: &Board, local: Vec2) -> Pos2 {
        let world = camera.to_world(local);
        let cell = (world / self.cell_size).floor();
        self.highlight =
            is_on_board(world, board.width(), board.height(), self.cell_size).then_some(cell);
        cell
    }

    /// Gradient color at a world x coordinate on a board `board_width` cells wide
    pub fn gradient_at(&self, world_x: f32, board_width: i32) -> Rgb {
        let span = board_width as f32 * self.cell_size;
        self.gradient_left.lerp(self.gradient_right, world_x / span)
    }
}

/// What a renderer should draw at one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Outside the board
    OffBoard,
    Dead,
    Alive(Rgb),
    /// The hovered cell, alive or dead
    Highlighted,
}

impl Sample {
    pub fn color(self) -> Rgb {
        match self {
            Self::OffBoard => Rgb::BACKGROUND,
            Self::Dead => Rgb::BLACK,
            Self::Alive(color) => color,
            Self::Highlighted => Rgb::WHITE,
        }
    }
}

/// A live cell with the colors at its left and right edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellQuad {
    pub cell: Pos2,
    /// World-space top-left corner
    pub origin: Vec2,
    pub left: Rgb,
    pub right: Rgb,
}

/// Everything a renderer may read for one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub camera: &'a Camera,
    pub settings: &'a RenderSettings,
}

impl<'a> Snapshot<'a> {
    pub fn new(board: &'a Board, camera: &'a Camera, settings: &'a RenderSettings) -> Self {
        Self {
            board,
            camera,
            settings,
        }
    }

    /// Size of the whole board in world units
    pub fn world_size(&self) -> Vec2 {
        Vec2 {
            x: self.board.width() as f32 * self.settings.cell_size,
            y: self.board.height() as f32 * self.settings.cell_size,
        }
    }

    /// Samples the frame at a local point, for raster renderers
    pub fn sample(&self, local: Vec2) -> Sample {
        let world = self.camera.to_world(local);
        let (w, h) = (self.board.width(), self.board.height());
        if !is_on_board(world, w, h, self.settings.cell_size) {
            return Sample::OffBoard;
        }

        let cell = (world / self.settings.cell_size).floor();
        if self.settings.highlight == Some(cell) {
            Sample::Highlighted
        } else if self.board.get(cell.x, cell.y) {
            Sample::Alive(self.settings.gradient_at(world.x, w))
        } else {
            Sample::Dead
        }
    }

    /// Live cells as world-space quads, for vector renderers
    pub fn cells(&self) -> impl Iterator<Item = CellQuad> + '_ {
        let size = self.settings.cell_size;
        let width = self.board.width();
        self.board.iter_alive().map(move |cell| {
            let origin = Vec2::from(cell) * size;
            CellQuad {
                cell,
                origin,
                left: self.settings.gradient_at(origin.x, width),
                right: self.settings.gradient_at(origin.x + size, width),
            }
        })
    }
}

/// Draws a [`Snapshot`] somewhere
pub trait Renderer {
    type Error;

    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), Self::Error>;
}
