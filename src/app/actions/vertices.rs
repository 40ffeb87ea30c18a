//! Strukturelle Änderungen: Vertices einfügen und entfernen.
//!
//! Beide Actions nummerieren die Handler über `BoundPolygon` neu; Indizes
//! anderer Actions in der History bleiben gültig, weil Undo/Redo strikt LIFO
//! läuft.

use glam::Vec2;

use crate::app::history::Action;
use crate::app::polygon_editor::BoundPolygon;
use crate::core::{EditorError, EditorResult};

/// Fügt einen Vertex an einem Index ein.
#[derive(Debug, Clone)]
pub struct InsertVertexAction {
    index: usize,
    position: Vec2,
}

impl InsertVertexAction {
    /// Neuer Vertex an `index` (nachfolgende Vertices rücken auf).
    pub fn new(index: usize, position: Vec2) -> Self {
        Self { index, position }
    }
}

impl Action<BoundPolygon> for InsertVertexAction {
    fn name(&self) -> &'static str {
        "Vertex einfügen"
    }

    fn apply(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        target.insert_vertex(self.index, self.position, false)
    }

    fn revert(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        target.remove_vertex(self.index).map(|_| ())
    }

    fn is_valid(&self, target: &BoundPolygon) -> bool {
        self.index <= target.polygon().len()
    }
}

/// Ein entfernter Vertex mit allem, was für die Wiederherstellung nötig ist.
#[derive(Debug, Clone, Copy)]
struct RemovedVertex {
    index: usize,
    position: Vec2,
    selected: bool,
}

/// Entfernt mehrere Vertices; das Polygon behält mindestens `min_vertices`.
#[derive(Debug, Clone)]
pub struct RemoveVerticesAction {
    removed: Vec<RemovedVertex>,
    min_vertices: usize,
}

impl RemoveVerticesAction {
    /// Erfasst Position und Selektion der zu entfernenden Handler.
    pub fn new(
        handler_indices: impl IntoIterator<Item = usize>,
        target: &BoundPolygon,
        min_vertices: usize,
    ) -> Self {
        let mut indices: Vec<usize> = handler_indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();

        let removed = indices
            .into_iter()
            .filter_map(|index| {
                let position = target.vertex(index).ok()?;
                let selected = target.handler(index).ok()?.selected;
                Some(RemovedVertex {
                    index,
                    position,
                    selected,
                })
            })
            .collect();

        Self {
            removed,
            min_vertices,
        }
    }

    /// Entfernt alle aktuell selektierten Vertices.
    pub fn selected(target: &BoundPolygon, min_vertices: usize) -> Self {
        Self::new(target.selected_indices(), target, min_vertices)
    }

    fn remaining(&self, target: &BoundPolygon) -> usize {
        target.polygon().len().saturating_sub(self.removed.len())
    }
}

impl Action<BoundPolygon> for RemoveVerticesAction {
    fn name(&self) -> &'static str {
        "Vertices entfernen"
    }

    fn apply(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        let remaining = self.remaining(target);
        if remaining < self.min_vertices {
            return Err(EditorError::PolygonTooSmall {
                len: remaining,
                min: self.min_vertices,
            });
        }
        // Absteigend entfernen, damit die erfassten Indizes gültig bleiben
        for removed in self.removed.iter().rev() {
            target.remove_vertex(removed.index)?;
        }
        Ok(())
    }

    fn revert(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        for removed in &self.removed {
            target.insert_vertex(removed.index, removed.position, removed.selected)?;
        }
        Ok(())
    }

    fn is_valid(&self, target: &BoundPolygon) -> bool {
        !self.removed.is_empty() && self.remaining(target) >= self.min_vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::history::ActionHistory;
    use crate::core::{Polygon, MIN_POLYGON_VERTICES};

    fn bound_pentagon() -> BoundPolygon {
        BoundPolygon::new(
            Polygon::from_flat(&[0.0, 0.0, 10.0, 0.0, 12.0, 6.0, 5.0, 10.0, -2.0, 6.0]),
            12.0,
        )
    }

    #[test]
    fn insert_round_trip() {
        let mut bound = bound_pentagon();
        let before = bound.polygon().clone();
        let mut history = ActionHistory::new_with_capacity(10);

        let action = InsertVertexAction::new(1, Vec2::new(5.0, -1.0));
        assert!(history.run(Box::new(action), &mut bound).unwrap());
        assert_eq!(bound.polygon().len(), 6);
        assert_eq!(bound.vertex(1).unwrap(), Vec2::new(5.0, -1.0));

        history.undo(&mut bound).unwrap();
        assert_eq!(bound.polygon(), &before);
        assert_eq!(bound.handlers().len(), 5);
    }

    #[test]
    fn remove_restores_positions_and_selection() {
        let mut bound = bound_pentagon();
        bound.set_selected(1, true).unwrap();
        bound.set_selected(3, true).unwrap();
        let before = bound.polygon().clone();
        let mut history = ActionHistory::new_with_capacity(10);

        let action = RemoveVerticesAction::selected(&bound, MIN_POLYGON_VERTICES);
        assert!(history.run(Box::new(action), &mut bound).unwrap());
        assert_eq!(bound.polygon().len(), 3);
        assert_eq!(bound.vertex(1).unwrap(), Vec2::new(12.0, 6.0));
        assert!(bound.selected_indices().is_empty());

        history.undo(&mut bound).unwrap();
        assert_eq!(bound.polygon(), &before);
        assert_eq!(bound.selected_indices(), vec![1, 3]);
    }

    #[test]
    fn remove_below_minimum_is_invalid() {
        let bound = bound_pentagon();
        let action = RemoveVerticesAction::new([0, 1, 2], &bound, MIN_POLYGON_VERTICES);
        assert!(!action.is_valid(&bound));
        let action = RemoveVerticesAction::new([0, 0, 1], &bound, MIN_POLYGON_VERTICES);
        assert!(action.is_valid(&bound));
    }

    #[test]
    fn remove_without_selection_is_invalid() {
        let bound = bound_pentagon();
        assert!(!RemoveVerticesAction::selected(&bound, MIN_POLYGON_VERTICES).is_valid(&bound));
    }
}
