//! Polygon-Editor: bindet ein Polygon, besitzt Handler, History und aktiven Modus.
//!
//! Alle Eingaben kommen in Screen-Koordinaten an und werden über den
//! `Viewport` in Welt-Koordinaten umgerechnet, bevor der aktive Modus sie
//! sieht. Ohne gebundenes Polygon liefern alle Eingaben `Ok(false)`.

mod binding;
mod handler;
pub mod modes;

pub use binding::BoundPolygon;
pub use handler::VertexHandler;
pub use modes::{EditMode, EditModeKind, ModeContext, ModeOverlay, MultiSelect};

use glam::Vec2;

use crate::app::history::{Action, ActionHistory};
use crate::app::input::Key;
use crate::core::{EditorResult, Polygon, Viewport};
use crate::shared::{EditorOptions, HandlerMarker, PolygonOverlay};

/// Fassade über gebundenes Polygon, Handler-Set, History und Edit-Modus.
pub struct PolygonEditor {
    options: EditorOptions,
    target: Option<BoundPolygon>,
    history: ActionHistory<BoundPolygon>,
    mode: Box<dyn EditMode>,
}

impl PolygonEditor {
    /// Erstellt einen ungebundenen Editor im Default-Modus.
    pub fn new(options: EditorOptions) -> Self {
        let history = ActionHistory::new_with_capacity(options.history_max_depth);
        Self {
            options,
            target: None,
            history,
            mode: EditModeKind::default().create(),
        }
    }

    /// Bindet ein Polygon; ein zuvor gebundenes wird zurückgegeben.
    ///
    /// Baut das Handler-Set neu auf und verwirft die History.
    pub fn bind(&mut self, polygon: Polygon) -> Option<Polygon> {
        let previous = self.unbind();
        log::info!("Polygon gebunden ({} Vertices)", polygon.len());
        self.target = Some(BoundPolygon::new(polygon, self.options.handler_hit_size_px));
        self.mode = self.mode.kind().create();
        if let Err(e) = self.with_mode(1.0, |mode, ctx| mode.start(ctx).map(|_| true)) {
            log::error!("Modus-Start fehlgeschlagen: {}", e);
        }
        previous
    }

    /// Löst die Bindung; Handler und History werden verworfen.
    pub fn unbind(&mut self) -> Option<Polygon> {
        if let Err(e) = self.with_mode(1.0, |mode, ctx| mode.stop(ctx).map(|_| true)) {
            log::error!("Modus-Stop beim Lösen fehlgeschlagen: {}", e);
        }
        self.history.clear();
        let polygon = self.target.take().map(BoundPolygon::into_polygon);
        if polygon.is_some() {
            log::info!("Polygon-Bindung gelöst");
        }
        polygon
    }

    /// Gibt zurück, ob ein Polygon gebunden ist.
    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// Gebundenes Polygon (read-only).
    pub fn polygon(&self) -> Option<&Polygon> {
        self.target.as_ref().map(BoundPolygon::polygon)
    }

    /// Gebundenes Polygon samt Handlern, z.B. zum Erstellen von Actions.
    pub fn bound(&self) -> Option<&BoundPolygon> {
        self.target.as_ref()
    }

    /// Handler des gebundenen Polygons; leer wenn ungebunden.
    pub fn handlers(&self) -> &[VertexHandler] {
        match &self.target {
            Some(target) => target.handlers(),
            None => &[],
        }
    }

    /// Aktiver Edit-Modus.
    pub fn edit_mode(&self) -> EditModeKind {
        self.mode.kind()
    }

    /// Wechselt den Modus: `stop()` auf dem alten, `start()` auf dem neuen.
    pub fn set_edit_mode(&mut self, kind: EditModeKind) -> EditorResult<()> {
        if self.mode.kind() == kind {
            return Ok(());
        }
        self.with_mode(1.0, |mode, ctx| mode.stop(ctx).map(|_| true))?;
        self.mode = kind.create();
        self.with_mode(1.0, |mode, ctx| mode.start(ctx).map(|_| true))?;
        log::info!("Edit-Modus: {}", kind.name());
        Ok(())
    }

    /// Handler unter der Maus.
    pub fn hovered_handler(&self) -> Option<usize> {
        self.target.as_ref()?.hovered_index()
    }

    /// Aktuell gezogener Handler.
    pub fn dragged_handler(&self) -> Option<usize> {
        self.target.as_ref()?.dragged_index()
    }

    /// Indizes aller selektierten Handler.
    pub fn selected_handlers(&self) -> Vec<usize> {
        self.target
            .as_ref()
            .map(BoundPolygon::selected_indices)
            .unwrap_or_default()
    }

    /// Vertex-Position eines Handlers; `None` wenn ungebunden oder unbekannt.
    pub fn vertex(&self, handler_index: usize) -> Option<Vec2> {
        self.target.as_ref()?.vertex(handler_index).ok()
    }

    /// Setzt die Vertex-Position eines Handlers. Ungebunden: `Ok(false)`.
    pub fn set_vertex(&mut self, handler_index: usize, position: Vec2) -> EditorResult<bool> {
        let Some(target) = self.target.as_mut() else {
            return Ok(false);
        };
        target.set_vertex(handler_index, position)?;
        Ok(true)
    }

    /// Gibt zurück, ob der aktive Modus gerade eine Geste verarbeitet.
    pub fn is_busy(&self) -> bool {
        self.mode.is_busy()
    }

    /// Führt eine Action über die History aus.
    ///
    /// Ungebunden oder während einer laufenden Geste: `Ok(false)`.
    pub fn run_action(&mut self, action: Box<dyn Action<BoundPolygon>>) -> EditorResult<bool> {
        if self.refuse_while_busy(action.name()) {
            return Ok(false);
        }
        let Some(target) = self.target.as_mut() else {
            return Ok(false);
        };
        self.history.run(action, target)
    }

    /// Undo der letzten Action. Während einer laufenden Geste: `Ok(false)`.
    pub fn undo(&mut self) -> EditorResult<bool> {
        if self.refuse_while_busy("Undo") {
            return Ok(false);
        }
        let Some(target) = self.target.as_mut() else {
            return Ok(false);
        };
        self.history.undo(target)
    }

    /// Redo der zuletzt zurückgenommenen Action. Während einer laufenden Geste: `Ok(false)`.
    pub fn redo(&mut self) -> EditorResult<bool> {
        if self.refuse_while_busy("Redo") {
            return Ok(false);
        }
        let Some(target) = self.target.as_mut() else {
            return Ok(false);
        };
        self.history.redo(target)
    }

    /// Read-only Sicht auf die History.
    pub fn history(&self) -> &ActionHistory<BoundPolygon> {
        &self.history
    }

    // ── Eingaben ────────────────────────────────────────────────

    /// Maustaste gedrückt.
    pub fn pointer_down(&mut self, viewport: &dyn Viewport, screen: Vec2) -> EditorResult<bool> {
        let world = viewport.screen_to_world(screen);
        self.with_mode(viewport.current_zoom(), |mode, ctx| {
            mode.pointer_down(ctx, world)
        })
    }

    /// Maustaste losgelassen.
    pub fn pointer_up(&mut self, viewport: &dyn Viewport, screen: Vec2) -> EditorResult<bool> {
        let world = viewport.screen_to_world(screen);
        self.with_mode(viewport.current_zoom(), |mode, ctx| mode.pointer_up(ctx, world))
    }

    /// Maus bewegt: Hover neu berechnen, dann an den Modus weiterreichen.
    pub fn pointer_moved(&mut self, viewport: &dyn Viewport, screen: Vec2) -> EditorResult<bool> {
        let world = viewport.screen_to_world(screen);
        let zoom = viewport.current_zoom();
        self.with_mode(zoom, |mode, ctx| {
            ctx.target.update_hover(world, ctx.zoom);
            mode.pointer_moved(ctx, world)
        })
    }

    /// Maus bewegt mit gedrückter Taste.
    pub fn pointer_dragged(&mut self, viewport: &dyn Viewport, screen: Vec2) -> EditorResult<bool> {
        let world = viewport.screen_to_world(screen);
        self.with_mode(viewport.current_zoom(), |mode, ctx| {
            mode.pointer_dragged(ctx, world)
        })
    }

    /// Taste gedrückt; `1`/`2`/`3` wechseln den Modus.
    pub fn key_down(&mut self, key: Key) -> EditorResult<bool> {
        if !self.is_bound() {
            return Ok(false);
        }
        if let Some(kind) = EditModeKind::from_hotkey(key) {
            self.set_edit_mode(kind)?;
            return Ok(true);
        }
        self.with_mode(1.0, |mode, ctx| mode.key_down(ctx, key))
    }

    /// Taste losgelassen.
    pub fn key_up(&mut self, key: Key) -> EditorResult<bool> {
        self.with_mode(1.0, |mode, ctx| mode.key_up(ctx, key))
    }

    /// Overlay-Daten für den aktuellen Frame; `None` wenn ungebunden.
    pub fn overlay(&self, zoom: f32) -> Option<PolygonOverlay> {
        let target = self.target.as_ref()?;
        let mode_overlay = self.mode.overlay();
        let handlers = target
            .handlers()
            .iter()
            .filter_map(|handler| {
                let position = target.polygon().vertex(handler.vertex_index).ok()?;
                Some(HandlerMarker {
                    position,
                    hovered: handler.hovered,
                    selected: handler.selected,
                    dragged: handler.dragged,
                })
            })
            .collect();

        Some(PolygonOverlay {
            outline: target.polygon().vertices().to_vec(),
            handlers,
            handler_size_world: self.options.handler_hit_size_px / zoom,
            edit_mode: self.mode.kind().name(),
            selection_rect: mode_overlay.selection_rect,
            multi_select: mode_overlay.multi_select,
        })
    }

    /// Laufende Gesten halten Handler-Indizes, die Undo/Redo neu nummerieren würden.
    fn refuse_while_busy(&self, operation: &str) -> bool {
        let busy = self.mode.is_busy();
        if busy {
            log::debug!("{} während laufender Geste ignoriert", operation);
        }
        busy
    }

    /// Baut den Modus-Kontext; ungebunden wird `f` nicht aufgerufen.
    fn with_mode<F>(&mut self, zoom: f32, f: F) -> EditorResult<bool>
    where
        F: FnOnce(&mut dyn EditMode, &mut ModeContext<'_>) -> EditorResult<bool>,
    {
        let Some(target) = self.target.as_mut() else {
            return Ok(false);
        };
        let mut ctx = ModeContext {
            target,
            history: &mut self.history,
            options: &self.options,
            zoom,
        };
        f(self.mode.as_mut(), &mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::{AlignHandlersAction, SelectHandlersAction};
    use crate::core::Camera2D;

    fn identity_camera() -> Camera2D {
        let size = Vec2::new(200.0, 200.0);
        let mut camera = Camera2D::new(size);
        camera.look_at(size * 0.5);
        camera
    }

    fn square() -> Polygon {
        Polygon::from_flat(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0])
    }

    #[test]
    fn unbound_editor_ignores_input() {
        let mut editor = PolygonEditor::new(EditorOptions::default());
        let camera = identity_camera();
        assert!(!editor.is_bound());
        assert!(!editor.pointer_down(&camera, Vec2::ZERO).unwrap());
        assert!(!editor.key_down(Key::Num3).unwrap());
        assert!(!editor.undo().unwrap());
        assert!(!editor.set_vertex(0, Vec2::ONE).unwrap());
        assert_eq!(editor.vertex(0), None);
        assert!(editor.overlay(1.0).is_none());
    }

    #[test]
    fn bind_builds_handlers_and_unbind_returns_polygon() {
        let mut editor = PolygonEditor::new(EditorOptions::default());
        assert!(editor.bind(square()).is_none());
        assert!(editor.is_bound());
        assert_eq!(editor.handlers().len(), 4);

        let polygon = editor.unbind().unwrap();
        assert_eq!(polygon, square());
        assert!(editor.handlers().is_empty());
    }

    #[test]
    fn rebinding_clears_history() {
        let mut editor = PolygonEditor::new(EditorOptions::default());
        editor.bind(square());
        editor.set_vertex(0, Vec2::new(1.0, 1.0)).unwrap();
        editor
            .run_action(Box::new(SelectHandlersAction::new([0, 2])))
            .unwrap();
        let action = AlignHandlersAction::vertically(editor.bound().unwrap());
        assert!(editor.run_action(Box::new(action)).unwrap());
        assert!(editor.history().can_undo());

        let previous = editor.bind(square()).unwrap();
        assert_eq!(previous.vertex(0).unwrap(), Vec2::new(1.0, 5.5));
        assert!(!editor.history().can_undo());
    }

    #[test]
    fn hotkeys_switch_modes() {
        let mut editor = PolygonEditor::new(EditorOptions::default());
        editor.bind(square());
        assert_eq!(editor.edit_mode(), EditModeKind::Default);

        assert!(editor.key_down(Key::Num3).unwrap());
        assert_eq!(editor.edit_mode(), EditModeKind::Select);
        assert!(editor.key_down(Key::Num2).unwrap());
        assert_eq!(editor.edit_mode(), EditModeKind::AddVertex);
        assert!(editor.key_down(Key::Num1).unwrap());
        assert_eq!(editor.edit_mode(), EditModeKind::Default);
    }

    #[test]
    fn hover_and_drag_through_viewport() {
        let mut editor = PolygonEditor::new(EditorOptions::default());
        editor.bind(square());
        let camera = identity_camera();

        editor.pointer_moved(&camera, Vec2::new(11.0, 1.0)).unwrap();
        assert_eq!(editor.hovered_handler(), Some(1));

        assert!(editor.pointer_down(&camera, Vec2::new(11.0, 1.0)).unwrap());
        assert_eq!(editor.dragged_handler(), Some(1));
        editor.pointer_dragged(&camera, Vec2::new(14.0, 1.0)).unwrap();
        editor.pointer_up(&camera, Vec2::new(14.0, 1.0)).unwrap();

        assert_eq!(editor.vertex(1), Some(Vec2::new(13.0, 0.0)));
        assert!(editor.undo().unwrap());
        assert_eq!(editor.vertex(1), Some(Vec2::new(10.0, 0.0)));
        assert!(editor.redo().unwrap());
        assert_eq!(editor.vertex(1), Some(Vec2::new(13.0, 0.0)));
    }

    #[test]
    fn history_is_locked_while_dragging() {
        let mut editor = PolygonEditor::new(EditorOptions::default());
        editor.bind(square());
        let camera = identity_camera();
        assert!(editor
            .run_action(Box::new(SelectHandlersAction::new([0])))
            .unwrap());

        editor.pointer_moved(&camera, Vec2::new(10.0, 10.0)).unwrap();
        editor.pointer_down(&camera, Vec2::new(10.0, 10.0)).unwrap();
        assert!(editor.is_busy());
        assert!(!editor.undo().unwrap());
        assert!(!editor
            .run_action(Box::new(SelectHandlersAction::new([1])))
            .unwrap());
        assert_eq!(editor.selected_handlers(), vec![0]);

        editor.pointer_up(&camera, Vec2::new(10.0, 10.0)).unwrap();
        assert!(!editor.is_busy());
        assert!(editor.undo().unwrap());
        assert!(editor.selected_handlers().is_empty());
    }

    #[test]
    fn overlay_reports_markers_and_mode() {
        let mut editor = PolygonEditor::new(EditorOptions::default());
        editor.bind(square());
        editor.set_edit_mode(EditModeKind::Select).unwrap();
        let camera = identity_camera();
        editor.pointer_down(&camera, Vec2::new(-1.0, -1.0)).unwrap();
        editor.pointer_dragged(&camera, Vec2::new(1.0, 1.0)).unwrap();

        let overlay = editor.overlay(2.0).unwrap();
        assert_eq!(overlay.handlers.len(), 4);
        assert!(overlay.handlers[0].selected);
        assert_eq!(overlay.handler_size_world, 6.0);
        assert_eq!(overlay.edit_mode, "Selektieren");
        assert!(overlay.selection_rect.is_some());
    }
}
