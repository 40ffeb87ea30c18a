//! Core-Domänentypen: Geometrie, Polygon, Sprite, Kamera, Fehler.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod polygon;
pub mod sprite;

pub use camera::{Camera2D, Viewport};
pub use error::{EditorError, EditorResult};
pub use geometry::{
    all_equal, distance_to_segment, orientation_sign, point_in_triangle,
    point_on_triangle_perimeter, rectangle_from_points, within_box, Rect, Triangle,
};
pub use polygon::{Polygon, MIN_POLYGON_VERTICES};
pub use sprite::{LevelSprite, SpriteTransform};
