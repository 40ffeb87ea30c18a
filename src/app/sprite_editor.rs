//! Sprite-Editor: ein gebundenes Sprite verschieben, skalieren und rotieren.
//!
//! Wie der Polygon-Editor schreibt ein Drag live in das Sprite und legt beim
//! Loslassen genau eine `TransformSpriteAction` in die eigene History.

use glam::Vec2;

use crate::app::actions::TransformSpriteAction;
use crate::app::drag::DragTracker;
use crate::app::history::{Action, ActionHistory};
use crate::core::{within_box, EditorResult, LevelSprite, SpriteTransform, Viewport};
use crate::shared::{EditorOptions, SpriteOverlay};

/// Kleinste zulässige Skalierung pro Achse.
const MIN_SPRITE_SCALE: f32 = 0.01;

/// Welcher Teil des Sprites gezogen wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteHandle {
    /// Klick ins Sprite-Quad
    Move,
    /// Handler an der oberen rechten Ecke
    Scale,
    /// Handler über der Oberkante
    Rotate,
}

#[derive(Debug, Clone, Copy)]
struct ActiveTransform {
    handle: SpriteHandle,
    before: SpriteTransform,
}

/// Editor für genau ein gebundenes `LevelSprite`.
pub struct SpriteEditor {
    options: EditorOptions,
    sprite: Option<LevelSprite>,
    history: ActionHistory<LevelSprite>,
    drag: DragTracker,
    active: Option<ActiveTransform>,
    hovered: Option<SpriteHandle>,
}

impl SpriteEditor {
    /// Erstellt einen ungebundenen Sprite-Editor.
    pub fn new(options: EditorOptions) -> Self {
        let history = ActionHistory::new_with_capacity(options.history_max_depth);
        Self {
            options,
            sprite: None,
            history,
            drag: DragTracker::new(),
            active: None,
            hovered: None,
        }
    }

    /// Bindet ein Sprite; ein zuvor gebundenes wird zurückgegeben.
    pub fn bind(&mut self, sprite: LevelSprite) -> Option<LevelSprite> {
        let previous = self.unbind();
        log::info!("Sprite gebunden: {}", sprite.asset);
        self.sprite = Some(sprite);
        previous
    }

    /// Löst die Bindung; ein laufender Drag wird verworfen.
    pub fn unbind(&mut self) -> Option<LevelSprite> {
        self.cancel();
        self.history.clear();
        self.hovered = None;
        let sprite = self.sprite.take();
        if sprite.is_some() {
            log::info!("Sprite-Bindung gelöst");
        }
        sprite
    }

    /// Gibt zurück, ob ein Sprite gebunden ist.
    pub fn is_bound(&self) -> bool {
        self.sprite.is_some()
    }

    /// Gebundenes Sprite (read-only).
    pub fn sprite(&self) -> Option<&LevelSprite> {
        self.sprite.as_ref()
    }

    /// Teil des Sprites, der gerade gezogen wird.
    pub fn active_handle(&self) -> Option<SpriteHandle> {
        self.active.map(|active| active.handle)
    }

    /// Handler unter der Maus (Move zählt nicht als Handler).
    pub fn hovered_handle(&self) -> Option<SpriteHandle> {
        self.hovered
    }

    /// Führt eine Action über die History aus. Ungebunden oder während eines Drags: `Ok(false)`.
    pub fn run_action(&mut self, action: Box<dyn Action<LevelSprite>>) -> EditorResult<bool> {
        if self.active.is_some() {
            return Ok(false);
        }
        let Some(sprite) = self.sprite.as_mut() else {
            return Ok(false);
        };
        self.history.run(action, sprite)
    }

    /// Undo der letzten Transformation. Während eines Drags: `Ok(false)`.
    pub fn undo(&mut self) -> EditorResult<bool> {
        if self.active.is_some() {
            log::debug!("Undo während Sprite-Drag ignoriert");
            return Ok(false);
        }
        let Some(sprite) = self.sprite.as_mut() else {
            return Ok(false);
        };
        self.history.undo(sprite)
    }

    /// Redo der zuletzt zurückgenommenen Transformation. Während eines Drags: `Ok(false)`.
    pub fn redo(&mut self) -> EditorResult<bool> {
        if self.active.is_some() {
            log::debug!("Redo während Sprite-Drag ignoriert");
            return Ok(false);
        }
        let Some(sprite) = self.sprite.as_mut() else {
            return Ok(false);
        };
        self.history.redo(sprite)
    }

    /// Read-only Sicht auf die History.
    pub fn history(&self) -> &ActionHistory<LevelSprite> {
        &self.history
    }

    // ── Eingaben ────────────────────────────────────────────────

    /// Startet Move, Scale oder Rotate je nach Treffer.
    pub fn pointer_down(&mut self, viewport: &dyn Viewport, screen: Vec2) -> EditorResult<bool> {
        let Some(sprite) = self.sprite.as_ref() else {
            return Ok(false);
        };
        let world = viewport.screen_to_world(screen);
        let Some(handle) = self.pick(sprite, world, viewport.current_zoom()) else {
            return Ok(false);
        };

        self.active = Some(ActiveTransform {
            handle,
            before: sprite.transform,
        });
        self.drag.begin_drag(world);
        log::debug!("Sprite-Drag gestartet: {:?}", handle);
        Ok(true)
    }

    /// Wendet das Drag-Delta live auf das Sprite an.
    pub fn pointer_dragged(&mut self, viewport: &dyn Viewport, screen: Vec2) -> EditorResult<bool> {
        let (Some(active), Some(sprite)) = (self.active, self.sprite.as_mut()) else {
            return Ok(false);
        };
        let world = viewport.screen_to_world(screen);

        match active.handle {
            SpriteHandle::Move => {
                let offset = self.drag.offset(world)?;
                self.drag.reset(world)?;
                sprite.transform.position += offset;
            }
            SpriteHandle::Scale => {
                let offset = self.drag.offset(world)?;
                self.drag.reset(world)?;
                let local = Vec2::from_angle(-sprite.transform.rotation).rotate(offset);
                let half_size = sprite.size * 0.5;
                let scale = &mut sprite.transform.scale;
                if half_size.x > 0.0 {
                    scale.x = (scale.x + local.x / half_size.x).max(MIN_SPRITE_SCALE);
                }
                if half_size.y > 0.0 {
                    scale.y = (scale.y + local.y / half_size.y).max(MIN_SPRITE_SCALE);
                }
            }
            SpriteHandle::Rotate => {
                let start = self.drag.start_position()?;
                self.drag.notify_moved(world)?;
                let center = active.before.position;
                let swept = angle_of(world - center) - angle_of(start - center);
                sprite.transform.rotation = active.before.rotation + swept;
            }
        }
        Ok(true)
    }

    /// Beendet den Drag und zeichnet die Gesamt-Transformation auf.
    pub fn pointer_up(&mut self, _viewport: &dyn Viewport, _screen: Vec2) -> EditorResult<bool> {
        let Some(active) = self.active.take() else {
            return Ok(false);
        };
        self.drag.end_drag();
        let Some(sprite) = self.sprite.as_mut() else {
            return Ok(false);
        };

        let after = sprite.transform;
        if active.handle == SpriteHandle::Move
            && active.before.position.distance_squared(after.position)
                < self.options.move_threshold_sq
        {
            // Zu kleine Verschiebung: wie ein Klick behandeln
            sprite.transform = active.before;
            return Ok(true);
        }

        let action = TransformSpriteAction::new(active.before, after);
        self.history.run(Box::new(action), sprite)?;
        Ok(true)
    }

    /// Aktualisiert den Hover-Zustand der Handler.
    pub fn pointer_moved(&mut self, viewport: &dyn Viewport, screen: Vec2) -> EditorResult<bool> {
        let Some(sprite) = self.sprite.as_ref() else {
            return Ok(false);
        };
        let world = viewport.screen_to_world(screen);
        self.hovered = self
            .pick(sprite, world, viewport.current_zoom())
            .filter(|handle| *handle != SpriteHandle::Move);
        Ok(false)
    }

    /// Overlay-Daten für den aktuellen Frame; `None` wenn ungebunden.
    pub fn overlay(&self, zoom: f32) -> Option<SpriteOverlay> {
        let sprite = self.sprite.as_ref()?;
        Some(SpriteOverlay {
            corners: sprite.corners(),
            scale_handler: sprite.top_right(),
            rotate_handler: self.rotate_handler_position(sprite, zoom),
            handler_size_world: self.options.sprite_handler_size_px / zoom,
            scale_hovered: self.hovered == Some(SpriteHandle::Scale),
            rotate_hovered: self.hovered == Some(SpriteHandle::Rotate),
        })
    }

    fn rotate_handler_position(&self, sprite: &LevelSprite, zoom: f32) -> Vec2 {
        sprite.top_center_offset(self.options.sprite_rotate_handler_offset_px / zoom)
    }

    /// Trefferreihenfolge: Rotations-Handler, Skalier-Handler, Sprite-Fläche.
    fn pick(&self, sprite: &LevelSprite, world: Vec2, zoom: f32) -> Option<SpriteHandle> {
        let half = self.options.sprite_handler_size_px / 2.0 / zoom;
        if within_box(self.rotate_handler_position(sprite, zoom), world, half) {
            Some(SpriteHandle::Rotate)
        } else if within_box(sprite.top_right(), world, half) {
            Some(SpriteHandle::Scale)
        } else if sprite.contains(world) {
            Some(SpriteHandle::Move)
        } else {
            None
        }
    }

    /// Bricht einen laufenden Drag ab und stellt die Ausgangs-Transformation her.
    fn cancel(&mut self) {
        self.drag.end_drag();
        if let (Some(active), Some(sprite)) = (self.active.take(), self.sprite.as_mut()) {
            sprite.transform = active.before;
        }
    }
}

fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
