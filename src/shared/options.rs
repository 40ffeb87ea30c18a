//! Zentrale Konfiguration für den DSR Level-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 100.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Polygon-Editor ──────────────────────────────────────────────────

/// Kantenlänge der Vertex-Hitbox in Screen-Pixeln.
pub const HANDLER_HIT_SIZE_PX: f32 = 12.0;
/// Minimale Vertex-Anzahl, unter die nicht gelöscht werden darf.
pub const MIN_POLYGON_VERTICES: usize = crate::core::MIN_POLYGON_VERTICES;
/// Quadrat-Distanz (Welteinheiten), ab der eine Verschiebung aufgezeichnet wird.
pub const MOVE_THRESHOLD_SQ: f32 = 1.0;
/// Maximaler Screen-Abstand eines Klicks zur Kante im AddVertex-Modus.
pub const ADD_VERTEX_MAX_DISTANCE_PX: f32 = 24.0;

// ── Sprite-Editor ───────────────────────────────────────────────────

/// Kantenlänge der Sprite-Handler (Skalieren/Rotieren) in Screen-Pixeln.
pub const SPRITE_HANDLER_SIZE_PX: f32 = 12.0;
/// Abstand des Rotations-Handlers über der Sprite-Oberkante in Screen-Pixeln.
pub const SPRITE_ROTATE_HANDLER_OFFSET_PX: f32 = 24.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte pro Editor.
pub const HISTORY_MAX_DEPTH: usize = 200;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `dsr_level_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Polygon-Editor ──────────────────────────────────────────
    /// Kantenlänge der Vertex-Hitbox in Screen-Pixeln
    pub handler_hit_size_px: f32,
    /// Untergrenze beim Löschen von Vertices
    pub min_polygon_vertices: usize,
    /// Quadrat-Distanz, ab der Vertex- und Sprite-Verschiebungen in die History gehen
    pub move_threshold_sq: f32,
    /// Maximaler Klick-Abstand zur Kante beim Einfügen (Screen-Pixel)
    #[serde(default = "default_add_vertex_max_distance_px")]
    pub add_vertex_max_distance_px: f32,

    // ── Sprite-Editor ───────────────────────────────────────────
    /// Kantenlänge der Sprite-Handler in Screen-Pixeln
    pub sprite_handler_size_px: f32,
    /// Abstand des Rotations-Handlers über der Oberkante (Screen-Pixel)
    pub sprite_rotate_handler_offset_px: f32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    pub history_max_depth: usize,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            handler_hit_size_px: HANDLER_HIT_SIZE_PX,
            min_polygon_vertices: MIN_POLYGON_VERTICES,
            move_threshold_sq: MOVE_THRESHOLD_SQ,
            add_vertex_max_distance_px: ADD_VERTEX_MAX_DISTANCE_PX,

            sprite_handler_size_px: SPRITE_HANDLER_SIZE_PX,
            sprite_rotate_handler_offset_px: SPRITE_ROTATE_HANDLER_OFFSET_PX,

            history_max_depth: HISTORY_MAX_DEPTH,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

/// Serde-Default für `add_vertex_max_distance_px` (Abwärtskompatibilität).
fn default_add_vertex_max_distance_px() -> f32 {
    ADD_VERTEX_MAX_DISTANCE_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt Werte, mit denen Zoom oder Hit-Tests entarten würden, durch Standardwerte.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let positive = |value: f32| value.is_finite() && value > 0.0;

        if !positive(self.camera_zoom_min) {
            log::warn!(
                "camera_zoom_min = {} ungültig, verwende {}",
                self.camera_zoom_min,
                defaults.camera_zoom_min
            );
            self.camera_zoom_min = defaults.camera_zoom_min;
        }
        if !positive(self.camera_zoom_max) || self.camera_zoom_max < self.camera_zoom_min {
            log::warn!(
                "camera_zoom_max = {} ungültig, verwende {}",
                self.camera_zoom_max,
                defaults.camera_zoom_max
            );
            self.camera_zoom_max = defaults.camera_zoom_max.max(self.camera_zoom_min);
        }
        if !positive(self.camera_scroll_zoom_step) {
            log::warn!(
                "camera_scroll_zoom_step = {} ungültig, verwende {}",
                self.camera_scroll_zoom_step,
                defaults.camera_scroll_zoom_step
            );
            self.camera_scroll_zoom_step = defaults.camera_scroll_zoom_step;
        }
        if !positive(self.handler_hit_size_px) {
            self.handler_hit_size_px = defaults.handler_hit_size_px;
        }
        if !positive(self.sprite_handler_size_px) {
            self.sprite_handler_size_px = defaults.sprite_handler_size_px;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("dsr_level_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("dsr_level_editor.toml")
    }

    /// Maximaler Klick-Abstand zur Kante in Welteinheiten beim aktuellen Zoom.
    pub fn add_vertex_max_distance_world(&self, zoom: f32) -> f32 {
        self.add_vertex_max_distance_px / zoom
    }
}
