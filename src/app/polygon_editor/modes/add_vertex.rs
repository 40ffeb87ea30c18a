//! AddVertex-Modus: Klick nahe einer Kante fügt dort einen Vertex ein.

use glam::Vec2;

use super::{EditMode, EditModeKind, ModeContext};
use crate::app::actions::InsertVertexAction;
use crate::core::{distance_to_segment, EditorResult, Polygon};

/// Fügt bei Klick einen Vertex in die nächstgelegene Kante ein.
#[derive(Debug, Default)]
pub struct AddVertexMode;

impl AddVertexMode {
    /// Erstellt den Modus.
    pub fn new() -> Self {
        Self
    }
}

/// Nächste Kante zu `p`: (Einfüge-Index, Abstand).
///
/// Kante `i` verbindet Vertex `i` mit `i + 1`; der neue Vertex bekommt den
/// Index `i + 1`. Bei gleichem Abstand gewinnt die erste Kante.
pub fn nearest_edge(polygon: &Polygon, p: Vec2) -> Option<(usize, f32)> {
    polygon
        .edges()
        .map(|(i, a, b)| (i + 1, distance_to_segment(p, a, b)))
        .fold(None, |best, (index, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((index, distance)),
        })
}

impl EditMode for AddVertexMode {
    fn kind(&self) -> EditModeKind {
        EditModeKind::AddVertex
    }

    fn stop(&mut self, _ctx: &mut ModeContext<'_>) -> EditorResult<()> {
        Ok(())
    }

    fn pointer_down(&mut self, ctx: &mut ModeContext<'_>, world: Vec2) -> EditorResult<bool> {
        let Some((index, distance)) = nearest_edge(ctx.target.polygon(), world) else {
            return Ok(false);
        };
        if distance > ctx.options.add_vertex_max_distance_world(ctx.zoom) {
            log::debug!("Kein Vertex eingefügt: Kante {:.2} entfernt", distance);
            return Ok(false);
        }
        let action = InsertVertexAction::new(index, world);
        ctx.history.run(Box::new(action), ctx.target)
    }

    fn pointer_up(&mut self, _ctx: &mut ModeContext<'_>, _world: Vec2) -> EditorResult<bool> {
        Ok(false)
    }

    fn pointer_dragged(&mut self, _ctx: &mut ModeContext<'_>, _world: Vec2) -> EditorResult<bool> {
        Ok(false)
    }
}
