//! 2D-Kamera für Pan und Zoom sowie der schmale Viewport-Vertrag für Hit-Tests.

use glam::Vec2;

/// Vertrag, über den Modi Screen-Eingaben in Welt-Koordinaten umrechnen.
pub trait Viewport {
    /// Konvertiert einen Screen-Punkt (Pixel) in Welt-Koordinaten.
    fn screen_to_world(&self, screen_pos: Vec2) -> Vec2;

    /// Aktueller Zoom-Faktor (1.0 = ein Pixel pro Welteinheit).
    fn current_zoom(&self) -> f32;
}

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Welt-Position in der Bildschirm-Mitte
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
    zoom_min: f32,
    zoom_max: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 100.0;
    /// Untergrenze für konfigurierte Zoom-Grenzen; Zoom geht in Divisionen ein.
    pub const ZOOM_FLOOR: f32 = 0.001;

    /// Erstellt eine Kamera für einen Viewport der gegebenen Größe.
    pub fn new(viewport_size: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            viewport_size,
            zoom_min: Self::ZOOM_MIN,
            zoom_max: Self::ZOOM_MAX,
        }
    }

    /// Übernimmt konfigurierte Zoom-Grenzen, mindestens `ZOOM_FLOOR`.
    pub fn with_zoom_limits(mut self, zoom_min: f32, zoom_max: f32) -> Self {
        let zoom_min = zoom_min.max(Self::ZOOM_FLOOR);
        let zoom_max = zoom_max.max(Self::ZOOM_FLOOR);
        self.zoom_min = zoom_min.min(zoom_max);
        self.zoom_max = zoom_max.max(zoom_min);
        self.zoom = self.zoom.clamp(self.zoom_min, self.zoom_max);
        self
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level. Nicht-positive oder ungültige Faktoren werden ignoriert.
    pub fn zoom_by(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            log::warn!("Ungültiger Zoom-Faktor {} ignoriert", factor);
            return;
        }
        self.zoom = (self.zoom * factor).clamp(self.zoom_min, self.zoom_max);
    }

    /// Passt die Viewport-Größe an (z.B. nach Fenster-Resize).
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport_size = size;
    }
}

impl Viewport for Camera2D {
    fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.viewport_size * 0.5) / self.zoom + self.position
    }

    fn current_zoom(&self) -> f32 {
        self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Vec2::new(1280.0, 720.0))
    }
}
