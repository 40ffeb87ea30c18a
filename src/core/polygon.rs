//! Geschlossenes Polygon als index-adressierbarer Vertex-Buffer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::{EditorError, EditorResult};

/// Mindestanzahl Vertices für ein gültiges Polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Geordnete Vertex-Liste; der letzte Vertex ist mit dem ersten verbunden.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Erstellt ein Polygon aus einer Vertex-Liste.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    /// Erstellt ein Polygon aus flachen (x, y)-Paaren. Ein überzähliger Wert wird ignoriert.
    pub fn from_flat(coords: &[f32]) -> Self {
        Self {
            vertices: coords
                .chunks_exact(2)
                .map(|xy| Vec2::new(xy[0], xy[1]))
                .collect(),
        }
    }

    /// Flache (x, y)-Darstellung des Vertex-Buffers.
    pub fn to_flat(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| [v.x, v.y]).collect()
    }

    /// Anzahl der Vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true`, wenn das Polygon keine Vertices hat.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Gültig für Rendering und Geometrie-Tests (mindestens 3 Vertices).
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    /// Read-only Sicht auf alle Vertices.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Liest den Vertex an `index`.
    pub fn vertex(&self, index: usize) -> EditorResult<Vec2> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(EditorError::VertexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    /// Überschreibt den Vertex an `index`.
    pub fn set_vertex(&mut self, index: usize, position: Vec2) -> EditorResult<()> {
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(EditorError::VertexOutOfRange { index, len })?;
        *slot = position;
        Ok(())
    }

    /// Fügt einen Vertex an `index` ein (`index == len` hängt an).
    pub fn insert_vertex(&mut self, index: usize, position: Vec2) -> EditorResult<()> {
        if index > self.vertices.len() {
            return Err(EditorError::VertexOutOfRange {
                index,
                len: self.vertices.len(),
            });
        }
        self.vertices.insert(index, position);
        Ok(())
    }

    /// Entfernt den Vertex an `index` und gibt seine Position zurück.
    pub fn remove_vertex(&mut self, index: usize) -> EditorResult<Vec2> {
        if index >= self.vertices.len() {
            return Err(EditorError::VertexOutOfRange {
                index,
                len: self.vertices.len(),
            });
        }
        Ok(self.vertices.remove(index))
    }

    /// Iteriert über alle Kanten als `(start_index, start, end)`, inklusive Schlusskante.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Vec2, Vec2)> + '_ {
        let len = self.vertices.len();
        (0..len).map(move |i| (i, self.vertices[i], self.vertices[(i + 1) % len]))
    }
}
