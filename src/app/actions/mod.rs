//! Konkrete rücknehmbare Actions für Polygon- und Sprite-Editor.

mod align;
mod move_handler;
mod selection;
mod sprite;
mod vertices;

pub use align::{AlignAxis, AlignHandlersAction};
pub use move_handler::MoveHandlerAction;
pub use selection::{DeselectAllHandlersAction, SelectHandlersAction};
pub use sprite::TransformSpriteAction;
pub use vertices::{InsertVertexAction, RemoveVerticesAction};
