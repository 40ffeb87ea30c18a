//! Platziertes Level-Sprite mit Transformation (Position, Skalierung, Rotation).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{orientation_sign, point_in_triangle, Triangle};

/// Transformation eines Sprites; Grundlage für Undo/Redo im Sprite-Editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteTransform {
    /// Mittelpunkt in Welt-Koordinaten
    pub position: Vec2,
    /// Skalierung pro Achse
    pub scale: Vec2,
    /// Rotation in Radiant (gegen den Uhrzeigersinn)
    pub rotation: f32,
}

impl Default for SpriteTransform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

/// Ein im Level platziertes Sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSprite {
    /// Asset-Name der Textur (wird vom Editor-Kern nicht aufgelöst)
    pub asset: String,
    /// Unskalierte Größe in Welteinheiten
    pub size: Vec2,
    /// Aktuelle Transformation
    pub transform: SpriteTransform,
}

impl LevelSprite {
    /// Erstellt ein Sprite ohne Skalierung und Rotation.
    pub fn new(asset: impl Into<String>, size: Vec2, position: Vec2) -> Self {
        Self {
            asset: asset.into(),
            size,
            transform: SpriteTransform {
                position,
                ..SpriteTransform::default()
            },
        }
    }

    /// Halbe skalierte Ausdehnung.
    fn half_extent(&self) -> Vec2 {
        self.size * self.transform.scale * 0.5
    }

    /// Transformiert einen lokalen Offset (relativ zum Mittelpunkt) in Welt-Koordinaten.
    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        self.transform.position + Vec2::from_angle(self.transform.rotation).rotate(local)
    }

    /// Eckpunkte gegen den Uhrzeigersinn: unten-links, unten-rechts, oben-rechts, oben-links.
    pub fn corners(&self) -> [Vec2; 4] {
        let h = self.half_extent();
        [
            self.local_to_world(Vec2::new(-h.x, -h.y)),
            self.local_to_world(Vec2::new(h.x, -h.y)),
            self.local_to_world(Vec2::new(h.x, h.y)),
            self.local_to_world(Vec2::new(-h.x, h.y)),
        ]
    }

    /// Obere rechte Ecke (Anfasser für Skalierung).
    pub fn top_right(&self) -> Vec2 {
        self.corners()[2]
    }

    /// Mitte der Oberkante, um `offset` Welteinheiten nach außen verschoben.
    pub fn top_center_offset(&self, offset: f32) -> Vec2 {
        self.local_to_world(Vec2::new(0.0, self.half_extent().y + offset))
    }

    /// Punkt-im-Sprite-Test über die beiden Dreiecke des Quads (Außenrand exklusiv).
    pub fn contains(&self, p: Vec2) -> bool {
        let extent = self.half_extent();
        if extent.x == 0.0 || extent.y == 0.0 {
            // Entartetes Quad: jeder Punkt wäre "kollinear"
            return false;
        }
        let [bl, br, tr, tl] = self.corners();
        point_in_triangle(p, &Triangle::new(bl, br, tr))
            || point_in_triangle(p, &Triangle::new(bl, tr, tl))
            || on_open_segment(p, bl, tr)
    }
}

/// Punkte exakt auf der Diagonale liegen auf dem Rand beider Dreiecke.
fn on_open_segment(p: Vec2, a: Vec2, b: Vec2) -> bool {
    orientation_sign(a, b, p) == 0 && (p - a).dot(b - a) > 0.0 && (p - b).dot(a - b) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn corners_follow_scale_and_rotation() {
        let mut sprite = LevelSprite::new("saw", Vec2::new(4.0, 2.0), Vec2::new(10.0, 10.0));
        sprite.transform.scale = Vec2::splat(2.0);
        sprite.transform.rotation = FRAC_PI_2;

        let tr = sprite.top_right();
        // Halbe Ausdehnung (4, 2) um 90° gedreht → (-2, 4)
        assert_relative_eq!(tr.x, 8.0, epsilon = 1e-4);
        assert_relative_eq!(tr.y, 14.0, epsilon = 1e-4);
    }

    #[test]
    fn contains_respects_rotation() {
        let mut sprite = LevelSprite::new("saw", Vec2::new(10.0, 2.0), Vec2::ZERO);
        assert!(sprite.contains(Vec2::new(4.0, 0.5)));
        assert!(!sprite.contains(Vec2::new(0.5, 4.0)));

        sprite.transform.rotation = FRAC_PI_2;
        assert!(!sprite.contains(Vec2::new(4.0, 0.5)));
        assert!(sprite.contains(Vec2::new(0.5, 4.0)));
    }

    #[test]
    fn center_on_diagonal_is_contained() {
        let sprite = LevelSprite::new("dirt", Vec2::new(4.0, 4.0), Vec2::new(2.0, 2.0));
        assert!(sprite.contains(Vec2::new(2.0, 2.0)));
        assert!(!sprite.contains(Vec2::new(4.0, 2.0)));
    }

    #[test]
    fn zero_sized_sprite_contains_nothing() {
        let sprite = LevelSprite::new("dirt", Vec2::ZERO, Vec2::ZERO);
        assert!(!sprite.contains(Vec2::ZERO));
    }
}
