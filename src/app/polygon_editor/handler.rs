//! Interaktionszustand eines einzelnen Polygon-Vertex.

use glam::Vec2;

use crate::core::within_box;

/// Anfasser für einen Vertex des gebundenen Polygons.
///
/// `vertex_index` ist eine Positions-Referenz in den Vertex-Buffer, keine
/// Ownership. Strukturelle Änderungen am Polygon nummerieren die Handler neu.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexHandler {
    /// Index in den Vertex-Buffer des gebundenen Polygons
    pub vertex_index: usize,
    /// Hit-Größe in Screen-Pixeln (Kantenlänge der Hit-Box)
    pub hit_size: f32,
    /// Maus liegt über dem Anfasser
    pub hovered: bool,
    /// Anfasser wird gerade gezogen
    pub dragged: bool,
    /// Anfasser ist selektiert
    pub selected: bool,
}

impl VertexHandler {
    /// Erstellt einen Handler ohne gesetzte Flags.
    pub fn new(vertex_index: usize, hit_size: f32) -> Self {
        Self {
            vertex_index,
            hit_size,
            hovered: false,
            dragged: false,
            selected: false,
        }
    }

    /// Box-Test in Welt-Koordinaten; die Box schrumpft mit dem Zoom,
    /// damit die Hit-Fläche auf dem Bildschirm konstant bleibt.
    pub fn hit_test(&self, vertex: Vec2, mouse_world: Vec2, zoom: f32) -> bool {
        within_box(vertex, mouse_world, self.hit_size / 2.0 / zoom)
    }
}
