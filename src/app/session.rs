//! Editor-Session: Kamera, Optionen und beide Editoren hinter einem Eingang.
//!
//! Der Host reicht jedes Fenster-Event als `EditorInput` an `handle_input`.
//! Die Session verarbeitet globale Eingaben (Zoom, Undo/Redo) selbst und
//! leitet den Rest an den fokussierten Editor weiter.

use anyhow::Context;
use glam::Vec2;

use super::input::{EditorInput, Key, PointerButton};
use super::polygon_editor::PolygonEditor;
use super::sprite_editor::SpriteEditor;
use crate::core::{Camera2D, LevelSprite, Polygon};
use crate::shared::{EditorOptions, OverlayScene};

/// Welcher Editor Eingaben erhält.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    /// Kein Editor fokussiert
    #[default]
    None,
    /// Polygon-Editor
    Polygon,
    /// Sprite-Editor
    Sprite,
}

/// Eine Editor-Session mit Kamera und beiden Editoren.
pub struct LevelEditor {
    options: EditorOptions,
    camera: Camera2D,
    polygon_editor: PolygonEditor,
    sprite_editor: SpriteEditor,
    focus: EditorFocus,
    control_down: bool,
}

impl LevelEditor {
    /// Erstellt eine Session für einen Viewport der gegebenen Größe.
    pub fn new(options: EditorOptions, viewport_size: Vec2) -> Self {
        let options = options.sanitized();
        let camera = Camera2D::new(viewport_size)
            .with_zoom_limits(options.camera_zoom_min, options.camera_zoom_max);
        Self {
            polygon_editor: PolygonEditor::new(options.clone()),
            sprite_editor: SpriteEditor::new(options.clone()),
            options,
            camera,
            focus: EditorFocus::None,
            control_down: false,
        }
    }

    /// Laufzeit-Optionen der Session.
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Kamera (read-only).
    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    /// Kamera für Pan und Resize durch den Host.
    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.camera
    }

    /// Polygon-Editor (read-only).
    pub fn polygon_editor(&self) -> &PolygonEditor {
        &self.polygon_editor
    }

    /// Polygon-Editor für direkte Aufrufe (z.B. Modus-Wechsel aus der Toolbar).
    pub fn polygon_editor_mut(&mut self) -> &mut PolygonEditor {
        &mut self.polygon_editor
    }

    /// Sprite-Editor (read-only).
    pub fn sprite_editor(&self) -> &SpriteEditor {
        &self.sprite_editor
    }

    /// Aktuell fokussierter Editor.
    pub fn focus(&self) -> EditorFocus {
        self.focus
    }

    /// Bindet ein Polygon und fokussiert den Polygon-Editor.
    pub fn bind_polygon(&mut self, polygon: Polygon) -> Option<Polygon> {
        self.focus = EditorFocus::Polygon;
        self.polygon_editor.bind(polygon)
    }

    /// Löst das Polygon; der Fokus fällt ggf. weg.
    pub fn unbind_polygon(&mut self) -> Option<Polygon> {
        if self.focus == EditorFocus::Polygon {
            self.focus = EditorFocus::None;
        }
        self.polygon_editor.unbind()
    }

    /// Bindet ein Sprite und fokussiert den Sprite-Editor.
    pub fn bind_sprite(&mut self, sprite: LevelSprite) -> Option<LevelSprite> {
        self.focus = EditorFocus::Sprite;
        self.sprite_editor.bind(sprite)
    }

    /// Löst das Sprite; der Fokus fällt ggf. weg.
    pub fn unbind_sprite(&mut self) -> Option<LevelSprite> {
        if self.focus == EditorFocus::Sprite {
            self.focus = EditorFocus::None;
        }
        self.sprite_editor.unbind()
    }

    /// Undo im fokussierten Editor.
    pub fn undo(&mut self) -> anyhow::Result<bool> {
        let done = match self.focus {
            EditorFocus::Polygon => self.polygon_editor.undo(),
            EditorFocus::Sprite => self.sprite_editor.undo(),
            EditorFocus::None => Ok(false),
        }
        .context("Undo fehlgeschlagen")?;
        Ok(done)
    }

    /// Redo im fokussierten Editor.
    pub fn redo(&mut self) -> anyhow::Result<bool> {
        let done = match self.focus {
            EditorFocus::Polygon => self.polygon_editor.redo(),
            EditorFocus::Sprite => self.sprite_editor.redo(),
            EditorFocus::None => Ok(false),
        }
        .context("Redo fehlgeschlagen")?;
        Ok(done)
    }

    /// Verarbeitet ein Eingabe-Event. Gibt zurück, ob es verbraucht wurde.
    pub fn handle_input(&mut self, input: EditorInput) -> anyhow::Result<bool> {
        match input {
            EditorInput::Scrolled { amount } => {
                self.camera
                    .zoom_by(self.options.camera_scroll_zoom_step.powf(amount));
                Ok(true)
            }
            EditorInput::KeyDown { key: Key::Z } if self.control_down => self.undo(),
            EditorInput::KeyDown { key: Key::Y } if self.control_down => self.redo(),
            EditorInput::KeyDown { key } => {
                if key == Key::Control {
                    self.control_down = true;
                }
                self.route_key(key, true)
            }
            EditorInput::KeyUp { key } => {
                if key == Key::Control {
                    self.control_down = false;
                }
                self.route_key(key, false)
            }
            EditorInput::PointerDown { button, .. } | EditorInput::PointerUp { button, .. }
                if button != PointerButton::Primary =>
            {
                Ok(false)
            }
            EditorInput::PointerDown { screen, .. } => self.route_pointer(PointerEvent::Down, screen),
            EditorInput::PointerUp { screen, .. } => self.route_pointer(PointerEvent::Up, screen),
            EditorInput::PointerMoved { screen } => self.route_pointer(PointerEvent::Moved, screen),
            EditorInput::PointerDragged { screen } => {
                self.route_pointer(PointerEvent::Dragged, screen)
            }
        }
    }

    /// Overlay-Szene für den aktuellen Frame.
    pub fn overlay(&self) -> OverlayScene {
        let zoom = self.camera.zoom;
        OverlayScene {
            zoom,
            polygon: self.polygon_editor.overlay(zoom),
            sprite: self.sprite_editor.overlay(zoom),
        }
    }

    fn route_key(&mut self, key: Key, down: bool) -> anyhow::Result<bool> {
        let consumed = match (self.focus, down) {
            (EditorFocus::Polygon, true) => self.polygon_editor.key_down(key),
            (EditorFocus::Polygon, false) => self.polygon_editor.key_up(key),
            (EditorFocus::Sprite, _) | (EditorFocus::None, _) => Ok(false),
        }
        .with_context(|| format!("Taste {:?} nicht verarbeitet", key))?;
        Ok(consumed)
    }

    fn route_pointer(&mut self, event: PointerEvent, screen: Vec2) -> anyhow::Result<bool> {
        let camera = &self.camera;
        let consumed = match self.focus {
            EditorFocus::Polygon => {
                let editor = &mut self.polygon_editor;
                match event {
                    PointerEvent::Down => editor.pointer_down(camera, screen),
                    PointerEvent::Up => editor.pointer_up(camera, screen),
                    PointerEvent::Moved => editor.pointer_moved(camera, screen),
                    PointerEvent::Dragged => editor.pointer_dragged(camera, screen),
                }
            }
            EditorFocus::Sprite => {
                let editor = &mut self.sprite_editor;
                match event {
                    PointerEvent::Down => editor.pointer_down(camera, screen),
                    PointerEvent::Up => editor.pointer_up(camera, screen),
                    PointerEvent::Moved => editor.pointer_moved(camera, screen),
                    PointerEvent::Dragged => editor.pointer_dragged(camera, screen),
                }
            }
            EditorFocus::None => Ok(false),
        }
        .with_context(|| format!("Pointer-Event {:?} nicht verarbeitet", event))?;
        Ok(consumed)
    }
}

#[derive(Debug, Clone, Copy)]
enum PointerEvent {
    Down,
    Up,
    Moved,
    Dragged,
}
