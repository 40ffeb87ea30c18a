//! Verschieben eines einzelnen Vertex von einer Start- zu einer Endposition.

use glam::Vec2;

use crate::app::history::Action;
use crate::app::polygon_editor::BoundPolygon;
use crate::core::EditorResult;

/// Zeichnet eine abgeschlossene Vertex-Verschiebung auf.
///
/// Der Drag selbst schreibt live in den Vertex-Buffer; diese Action setzt
/// absolute Positionen und ist daher bei `apply()` nach einem Live-Drag
/// idempotent.
#[derive(Debug, Clone)]
pub struct MoveHandlerAction {
    handler_index: usize,
    original_position: Vec2,
    new_position: Vec2,
    threshold_sq: f32,
}

impl MoveHandlerAction {
    /// Erstellt die Action; Bewegungen mit Quadrat-Distanz unter `threshold_sq` sind ungültig.
    pub fn new(
        handler_index: usize,
        original_position: Vec2,
        new_position: Vec2,
        threshold_sq: f32,
    ) -> Self {
        Self {
            handler_index,
            original_position,
            new_position,
            threshold_sq,
        }
    }
}

impl Action<BoundPolygon> for MoveHandlerAction {
    fn name(&self) -> &'static str {
        "Vertex verschieben"
    }

    fn apply(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        target.set_vertex(self.handler_index, self.new_position)
    }

    fn revert(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        target.set_vertex(self.handler_index, self.original_position)
    }

    fn is_valid(&self, target: &BoundPolygon) -> bool {
        self.handler_index < target.handlers().len()
            && self.original_position.distance_squared(self.new_position) >= self.threshold_sq
    }
}
