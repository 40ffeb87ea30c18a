//! Reine Geometrie-Hilfsfunktionen: Orientierung, Dreieckstests, Rechtecke.
//!
//! Alle Funktionen sind seiteneffektfrei und liefern bei identischen
//! Float-Eingaben identische Ergebnisse.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Dreieck aus drei Eckpunkten (Umlaufsinn beliebig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v1: Vec2,
    pub v2: Vec2,
    pub v3: Vec2,
}

impl Triangle {
    /// Erstellt ein Dreieck aus drei Punkten.
    pub fn new(v1: Vec2, v2: Vec2, v3: Vec2) -> Self {
        Self { v1, v2, v3 }
    }

    /// Die drei Orientierungs-Vorzeichen von `p` gegen die Kanten v1→v2, v2→v3, v3→v1.
    fn edge_signs(&self, p: Vec2) -> [i8; 3] {
        [
            orientation_sign(self.v1, self.v2, p),
            orientation_sign(self.v2, self.v3, p),
            orientation_sign(self.v3, self.v1, p),
        ]
    }
}

/// Achsen-aligniertes Rechteck mit nicht-negativer Breite und Höhe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Linke untere Ecke (komponentenweises Minimum)
    pub min: Vec2,
    /// Rechte obere Ecke (komponentenweises Maximum)
    pub max: Vec2,
}

impl Rect {
    /// Breite (immer >= 0)
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Höhe (immer >= 0)
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Punkt-im-Rechteck-Test inklusive Rand.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Vorzeichen des 2D-Kreuzprodukts von `(v2 - v1)` und `(p - v1)`.
///
/// `0` bedeutet kollinear.
pub fn orientation_sign(v1: Vec2, v2: Vec2, p: Vec2) -> i8 {
    let cross = (v2 - v1).perp_dot(p - v1);
    if cross < 0.0 {
        -1
    } else if cross > 0.0 {
        1
    } else {
        0
    }
}

/// `true`, wenn alle drei Kanten-Vorzeichen gleich sind.
///
/// Der entartete Fall "alle drei null" zählt ebenfalls als innen.
pub fn point_in_triangle(p: Vec2, triangle: &Triangle) -> bool {
    all_equal(&triangle.edge_signs(p))
}

/// `true`, wenn `p` mit mindestens einer Dreieckskante kollinear ist.
pub fn point_on_triangle_perimeter(p: Vec2, triangle: &Triangle) -> bool {
    triangle.edge_signs(p).contains(&0)
}

/// Rechteck aus zwei beliebigen Eckpunkten, unabhängig von der Drag-Richtung.
pub fn rectangle_from_points(a: Vec2, b: Vec2) -> Rect {
    Rect {
        min: a.min(b),
        max: a.max(b),
    }
}

/// `true` bei weniger als zwei Werten oder wenn alle Werte gleich sind.
pub fn all_equal<T: PartialEq>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

/// Abstand von `p` zur Strecke `a`–`b`.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Achsen-alignierter Box-Test mit halber Kantenlänge `half_extent`, Rand exklusiv.
pub fn within_box(center: Vec2, p: Vec2, half_extent: f32) -> bool {
    (center.x - p.x).abs() < half_extent && (center.y - p.y).abs() < half_extent
}
