//! Core library for a painting Game of Life editor on a toroidal board.

pub mod board;
pub mod camera;
pub mod clock;
pub mod engine;
pub mod paint;
pub mod pos;
pub mod view;

pub use board::{Board, FillMode, Pattern};
pub use camera::Camera;
pub use clock::{Controller, RunState};
pub use engine::GameOfLife;
pub use paint::{PointerState, Stroke};
pub use pos::{Pos2, Vec2};
pub use view::{RenderSettings, Rgb, Snapshot};
