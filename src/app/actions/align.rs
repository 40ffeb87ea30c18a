//! Ausrichten selektierter Vertices auf den Mittelwert einer Achse.

use glam::Vec2;

use crate::app::history::Action;
use crate::app::polygon_editor::BoundPolygon;
use crate::core::{all_equal, EditorResult};

/// Koordinate, die beim Ausrichten auf den Mittelwert gesetzt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignAxis {
    /// Alle X-Werte angleichen
    X,
    /// Alle Y-Werte angleichen
    Y,
}

impl AlignAxis {
    fn value(self, v: Vec2) -> f32 {
        match self {
            AlignAxis::X => v.x,
            AlignAxis::Y => v.y,
        }
    }

    fn with_value(self, v: Vec2, value: f32) -> Vec2 {
        match self {
            AlignAxis::X => Vec2::new(value, v.y),
            AlignAxis::Y => Vec2::new(v.x, value),
        }
    }
}

/// Setzt eine Koordinate aller selektierten Vertices auf ihren Mittelwert.
///
/// Gültig nur bei mindestens zwei selektierten Handlern, die sich auf der
/// Achse noch unterscheiden. Bereits ausgerichtete Vertices landen so nicht
/// als No-op in der History.
#[derive(Debug, Clone)]
pub struct AlignHandlersAction {
    axis: AlignAxis,
    handler_indices: Vec<usize>,
    original_positions: Vec<Vec2>,
}

impl AlignHandlersAction {
    /// Erfasst die aktuelle Selektion von `target` und deren Positionen.
    pub fn new(axis: AlignAxis, target: &BoundPolygon) -> Self {
        let (handler_indices, original_positions) = target
            .selected_indices()
            .into_iter()
            .filter_map(|i| target.vertex(i).ok().map(|v| (i, v)))
            .unzip();
        Self {
            axis,
            handler_indices,
            original_positions,
        }
    }

    /// Vertikale Ausrichtung: gemeinsame Y-Koordinate (Taste `X`).
    pub fn vertically(target: &BoundPolygon) -> Self {
        Self::new(AlignAxis::Y, target)
    }

    /// Horizontale Ausrichtung: gemeinsame X-Koordinate (Taste `Y`).
    pub fn horizontally(target: &BoundPolygon) -> Self {
        Self::new(AlignAxis::X, target)
    }

    fn mean(&self) -> f32 {
        let sum: f32 = self
            .original_positions
            .iter()
            .map(|&v| self.axis.value(v))
            .sum();
        sum / self.original_positions.len() as f32
    }
}

impl Action<BoundPolygon> for AlignHandlersAction {
    fn name(&self) -> &'static str {
        match self.axis {
            AlignAxis::X => "Handler horizontal ausrichten",
            AlignAxis::Y => "Handler vertikal ausrichten",
        }
    }

    fn apply(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        if self.original_positions.is_empty() {
            return Ok(());
        }
        let mean = self.mean();
        for (&index, &original) in self.handler_indices.iter().zip(&self.original_positions) {
            target.set_vertex(index, self.axis.with_value(original, mean))?;
        }
        Ok(())
    }

    fn revert(&mut self, target: &mut BoundPolygon) -> EditorResult<()> {
        for (&index, &original) in self.handler_indices.iter().zip(&self.original_positions) {
            target.set_vertex(index, original)?;
        }
        Ok(())
    }

    fn is_valid(&self, target: &BoundPolygon) -> bool {
        if self.handler_indices.len() < 2 {
            return false;
        }
        let live: Result<Vec<f32>, _> = self
            .handler_indices
            .iter()
            .map(|&i| target.vertex(i).map(|v| self.axis.value(v)))
            .collect();
        match live {
            Ok(values) => !all_equal(&values),
            Err(_) => false,
        }
    }
}
