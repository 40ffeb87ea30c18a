//! Gebundenes Polygon samt Handler-Set: das Ziel aller Polygon-Actions.

use glam::Vec2;

use super::handler::VertexHandler;
use crate::core::{EditorError, EditorResult, Polygon};

/// Polygon plus ein Handler pro Vertex, in Vertex-Reihenfolge.
///
/// Alle Vertex-Schreibzugriffe laufen über `set_vertex`/`move_vertex`, damit
/// es genau einen Durchsetzungspunkt für Einschränkungen gibt.
#[derive(Debug, Clone)]
pub struct BoundPolygon {
    polygon: Polygon,
    handlers: Vec<VertexHandler>,
    hit_size: f32,
    hovered_nearest: Option<usize>,
    /// Letzte Hover-Abfrage (Welt-Position, Zoom) für die Neuberechnung nach Renummerierung
    last_hover: Option<(Vec2, f32)>,
}

impl BoundPolygon {
    /// Bindet ein Polygon und baut das Handler-Set neu auf.
    pub fn new(polygon: Polygon, hit_size: f32) -> Self {
        let handlers = (0..polygon.len())
            .map(|i| VertexHandler::new(i, hit_size))
            .collect();
        Self {
            polygon,
            handlers,
            hit_size,
            hovered_nearest: None,
            last_hover: None,
        }
    }

    /// Gibt das Polygon frei; die Handler werden verworfen.
    pub fn into_polygon(self) -> Polygon {
        self.polygon
    }

    /// Read-only Sicht auf das Polygon.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Alle Handler in Vertex-Reihenfolge.
    pub fn handlers(&self) -> &[VertexHandler] {
        &self.handlers
    }

    /// Handler am Index.
    pub fn handler(&self, index: usize) -> EditorResult<&VertexHandler> {
        self.handlers.get(index).ok_or(EditorError::HandlerMismatch {
            index,
            len: self.handlers.len(),
        })
    }

    fn handler_mut(&mut self, index: usize) -> EditorResult<&mut VertexHandler> {
        let len = self.handlers.len();
        self.handlers
            .get_mut(index)
            .ok_or(EditorError::HandlerMismatch { index, len })
    }

    /// Position des Vertex, auf den der Handler zeigt.
    pub fn vertex(&self, handler_index: usize) -> EditorResult<Vec2> {
        let vertex_index = self.handler(handler_index)?.vertex_index;
        self.polygon.vertex(vertex_index)
    }

    /// Setzt die Position des Vertex, auf den der Handler zeigt.
    pub fn set_vertex(&mut self, handler_index: usize, position: Vec2) -> EditorResult<()> {
        let vertex_index = self.handler(handler_index)?.vertex_index;
        self.polygon.set_vertex(vertex_index, position)
    }

    /// Verschiebt den Vertex um `delta`.
    pub fn move_vertex(&mut self, handler_index: usize, delta: Vec2) -> EditorResult<()> {
        let position = self.vertex(handler_index)?;
        self.set_vertex(handler_index, position + delta)
    }

    /// Setzt das Selektions-Flag eines Handlers.
    pub fn set_selected(&mut self, handler_index: usize, selected: bool) -> EditorResult<()> {
        self.handler_mut(handler_index)?.selected = selected;
        Ok(())
    }

    /// Setzt das Drag-Flag eines Handlers.
    pub fn set_dragged(&mut self, handler_index: usize, dragged: bool) -> EditorResult<()> {
        self.handler_mut(handler_index)?.dragged = dragged;
        Ok(())
    }

    /// Indizes aller selektierten Handler, aufsteigend.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.handlers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// Handler unter der Maus; bei Überlappung der dem Mauszeiger nächste.
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_nearest
    }

    /// Aktuell gezogener Handler.
    pub fn dragged_index(&self) -> Option<usize> {
        self.handlers.iter().position(|h| h.dragged)
    }

    /// Berechnet das Hover-Flag aller Handler neu (rein visuell, keine Action).
    pub fn update_hover(&mut self, mouse_world: Vec2, zoom: f32) {
        let mut nearest: Option<(usize, f32)> = None;
        for (i, handler) in self.handlers.iter_mut().enumerate() {
            handler.hovered = false;
            let Ok(vertex) = self.polygon.vertex(handler.vertex_index) else {
                continue;
            };
            if handler.hit_test(vertex, mouse_world, zoom) {
                handler.hovered = true;
                let distance_sq = vertex.distance_squared(mouse_world);
                if nearest.map_or(true, |(_, best)| distance_sq < best) {
                    nearest = Some((i, distance_sq));
                }
            }
        }
        self.hovered_nearest = nearest.map(|(i, _)| i);
        self.last_hover = Some((mouse_world, zoom));
    }

    /// Fügt einen Vertex samt Handler ein und nummeriert nachfolgende Handler neu.
    pub fn insert_vertex(&mut self, index: usize, position: Vec2, selected: bool) -> EditorResult<()> {
        self.polygon.insert_vertex(index, position)?;
        let mut handler = VertexHandler::new(index, self.hit_size);
        handler.selected = selected;
        self.handlers.insert(index, handler);
        self.renumber();
        Ok(())
    }

    /// Entfernt einen Vertex samt Handler; gibt Position und Selektions-Flag zurück.
    pub fn remove_vertex(&mut self, index: usize) -> EditorResult<(Vec2, bool)> {
        let selected = self.handler(index)?.selected;
        let position = self.polygon.remove_vertex(index)?;
        self.handlers.remove(index);
        self.renumber();
        Ok((position, selected))
    }

    fn renumber(&mut self) {
        for (i, handler) in self.handlers.iter_mut().enumerate() {
            handler.vertex_index = i;
        }
        if let Some((mouse_world, zoom)) = self.last_hover {
            self.update_hover(mouse_world, zoom);
        }
    }
}
