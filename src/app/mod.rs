//! Application-Layer: Drag-Tracking, Undo/Redo, Actions, Editoren und Session.

pub mod actions;
pub mod drag;
pub mod history;
pub mod input;
pub mod polygon_editor;
pub mod replay;
pub mod session;
pub mod sprite_editor;

pub use drag::DragTracker;
pub use history::{Action, ActionHistory};
pub use input::{EditorInput, Key, PointerButton};
pub use polygon_editor::{BoundPolygon, EditModeKind, PolygonEditor, VertexHandler};
pub use session::{EditorFocus, LevelEditor};
pub use sprite_editor::{SpriteEditor, SpriteHandle};
