//! Overlay-Szene als expliziter Übergabevertrag zwischen Editor und Host-Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie nur liest.
//! Alle Positionen in Welt-Koordinaten.

use glam::Vec2;

use crate::core::Rect;

/// Anfasser eines Polygon-Vertex für einen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlerMarker {
    /// Vertex-Position
    pub position: Vec2,
    /// Maus über dem Anfasser
    pub hovered: bool,
    /// Vertex selektiert
    pub selected: bool,
    /// Vertex wird gezogen
    pub dragged: bool,
}

/// Polygon-Editor-Anteil der Szene.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonOverlay {
    /// Geschlossener Umriss (letzter Vertex verbindet zum ersten)
    pub outline: Vec<Vec2>,
    /// Ein Marker pro Vertex, in Vertex-Reihenfolge
    pub handlers: Vec<HandlerMarker>,
    /// Kantenlänge der Marker in Welteinheiten beim aktuellen Zoom
    pub handler_size_world: f32,
    /// Anzeigename des aktiven Modus
    pub edit_mode: &'static str,
    /// Rubber-Band-Rechteck des Select-Modus während eines Drags
    pub selection_rect: Option<Rect>,
    /// Mehrfachselektion aktiv (Control)
    pub multi_select: bool,
}

/// Sprite-Editor-Anteil der Szene.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteOverlay {
    /// Ecken des (rotierten) Sprite-Quads: unten-links, unten-rechts, oben-rechts, oben-links
    pub corners: [Vec2; 4],
    /// Mittelpunkt des Skalier-Handlers
    pub scale_handler: Vec2,
    /// Mittelpunkt des Rotations-Handlers
    pub rotate_handler: Vec2,
    /// Kantenlänge der Handler in Welteinheiten beim aktuellen Zoom
    pub handler_size_world: f32,
    /// Skalier-Handler unter der Maus
    pub scale_hovered: bool,
    /// Rotations-Handler unter der Maus
    pub rotate_hovered: bool,
}

/// Read-only Daten für einen Overlay-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayScene {
    /// Aktueller Zoom der Kamera
    pub zoom: f32,
    /// Gebundenes Polygon, falls vorhanden
    pub polygon: Option<PolygonOverlay>,
    /// Gebundenes Sprite, falls vorhanden
    pub sprite: Option<SpriteOverlay>,
}

impl OverlayScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.polygon.is_none() && self.sprite.is_none()
    }
}
