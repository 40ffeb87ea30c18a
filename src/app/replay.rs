//! Headless Replay aufgezeichneter Eingaben gegen eine frische Session.
//!
//! Debug-Werkzeug für den Editier-Kern, kein Level-Format.

use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::EditorInput;
use super::session::LevelEditor;
use crate::core::{LevelSprite, Polygon, SpriteTransform};
use crate::shared::EditorOptions;

/// Eingabe-Skript: Viewport, Startgeometrie und Event-Folge.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport: [f32; 2],
    /// Welt-Punkt in der Bildschirm-Mitte; Standard: Screen = Welt bei Zoom 1
    #[serde(default)]
    pub look_at: Option<Vec2>,
    /// Start-Vertices des Polygons
    #[serde(default)]
    pub polygon: Vec<Vec2>,
    /// Optionales Sprite; wird nach dem Polygon gebunden und erhält den Fokus
    #[serde(default)]
    pub sprite: Option<LevelSprite>,
    /// Abzuspielende Eingaben
    pub inputs: Vec<EditorInput>,
}

/// Endzustand nach dem Replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Vertices des Polygons nach allen Eingaben
    pub vertices: Vec<Vec2>,
    /// Selektierte Handler
    pub selected: Vec<usize>,
    /// Aktiver Edit-Modus
    pub edit_mode: &'static str,
    /// Namen der angewendeten Polygon-Actions, älteste zuerst
    pub applied: Vec<&'static str>,
    /// Anzahl wiederholbarer Polygon-Actions
    pub redo_len: usize,
    /// Sprite-Transformation, falls ein Sprite gebunden war
    pub sprite: Option<SpriteTransform>,
    /// Anzahl verbrauchter Eingaben
    pub consumed_inputs: usize,
}

impl ReplayScript {
    /// Liest ein Skript aus JSON.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("Replay-Skript ist kein gültiges JSON")
    }
}

/// Spielt das Skript ab und liefert den Endzustand.
pub fn replay(script: &ReplayScript, options: EditorOptions) -> anyhow::Result<ReplayReport> {
    let size = Vec2::from(script.viewport);
    let mut session = LevelEditor::new(options, size);
    session
        .camera_mut()
        .look_at(script.look_at.unwrap_or(size * 0.5));

    if !script.polygon.is_empty() {
        session.bind_polygon(Polygon::new(script.polygon.clone()));
    }
    if let Some(sprite) = &script.sprite {
        session.bind_sprite(sprite.clone());
    }

    let mut consumed_inputs = 0;
    for (i, input) in script.inputs.iter().enumerate() {
        if session
            .handle_input(*input)
            .with_context(|| format!("Eingabe #{} fehlgeschlagen", i))?
        {
            consumed_inputs += 1;
        }
    }
    log::info!(
        "Replay beendet: {} von {} Eingaben verbraucht",
        consumed_inputs,
        script.inputs.len()
    );

    let polygon_editor = session.polygon_editor();
    Ok(ReplayReport {
        vertices: polygon_editor
            .polygon()
            .map(|p| p.vertices().to_vec())
            .unwrap_or_default(),
        selected: polygon_editor.selected_handlers(),
        edit_mode: polygon_editor.edit_mode().name(),
        applied: polygon_editor.history().applied_names(),
        redo_len: polygon_editor.history().redo_len(),
        sprite: session.sprite_editor().sprite().map(|s| s.transform),
        consumed_inputs,
    })
}
