//! DSR Level-Editor Library.
//! Interaktiver Editier-Kern (Polygone, Sprites, Undo/Redo) als Library für Host und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    Action, ActionHistory, BoundPolygon, DragTracker, EditModeKind, EditorFocus, EditorInput,
    Key, LevelEditor, PointerButton, PolygonEditor, SpriteEditor, SpriteHandle, VertexHandler,
};
pub use core::{Camera2D, EditorError, EditorResult, LevelSprite, Polygon, SpriteTransform, Viewport};
pub use shared::{EditorOptions, OverlayScene};
