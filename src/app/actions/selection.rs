//! Selektions-Actions: Handler selektieren bzw. alle deselektieren.

use crate::app::history::Action;
use crate::app::polygon_editor::BoundPolygon;
use crate::core::EditorResult;

/// Selektiert eine Menge zuvor unselektierter Handler.
///
/// Die Rubber-Band-Selektion setzt die Flags bereits live; die Action macht
/// das Ergebnis rücknehmbar. `revert()` deselektiert genau diese Handler.
#[derive(Debug, Clone)]
pub struct SelectHandlersAction {
    handler_indices: Vec<usize>,
}

impl SelectHandlersAction {
    /// Erstellt die Action für die gegebenen Handler.
    pub fn new(handler_indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            handler_indices: handler_indices.into_iter().collect(),
        }
    }

    fn set_all(&self, target: &mut BoundPolygon, selected: bool) -> EditorResult<()> {
        for &index in &self.handler_indices {
            target.set_selected(index, selected)?;
        }
        Ok(())
    }
}

impl Action<BoundPolygon> for SelectHandlersAction {
    fn name(&self) -> &'static str {
        "Handler selektieren"
    }

    fn apply(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        self.set_all(target, true)
    }

    fn revert(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        self.set_all(target, false)
    }

    fn is_valid(&self, target: &BoundPolygon) -> bool {
        !self.handler_indices.is_empty()
            && self
                .handler_indices
                .iter()
                .all(|&i| i < target.handlers().len())
    }
}

/// Hebt die komplette Selektion auf; merkt sich die vorher selektierten Handler.
#[derive(Debug, Clone)]
pub struct DeselectAllHandlersAction {
    previously_selected: Vec<usize>,
}

impl DeselectAllHandlersAction {
    /// Erfasst die aktuelle Selektion von `target`.
    pub fn new(target: &BoundPolygon) -> Self {
        Self {
            previously_selected: target.selected_indices(),
        }
    }
}

impl Action<BoundPolygon> for DeselectAllHandlersAction {
    fn name(&self) -> &'static str {
        "Selektion aufheben"
    }

    fn apply(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        for &index in &self.previously_selected {
            target.set_selected(index, false)?;
        }
        Ok(())
    }

    fn revert(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        for &index in &self.previously_selected {
            target.set_selected(index, true)?;
        }
        Ok(())
    }

    fn is_valid(&self, _target: &BoundPolygon) -> bool {
        !self.previously_selected.is_empty()
    }
}
