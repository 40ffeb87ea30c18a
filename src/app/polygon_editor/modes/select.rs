//! Select-Modus: Rubber-Band-Selektion, Ausrichten und Löschen.

use glam::Vec2;
use indexmap::IndexSet;

use super::{EditMode, EditModeKind, ModeContext, ModeOverlay};
use crate::app::actions::{
    AlignHandlersAction, DeselectAllHandlersAction, RemoveVerticesAction, SelectHandlersAction,
};
use crate::app::drag::DragTracker;
use crate::app::input::Key;
use crate::core::EditorResult;

/// Zustand der Mehrfachselektion (Control).
///
/// `OnUntilDragEnd` entsteht, wenn Control während eines Drags losgelassen
/// wird: die laufende Geste bleibt additiv, erst ihr Pointer-Up schaltet ab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiSelect {
    /// Neuer Drag hebt die bestehende Selektion auf
    #[default]
    Off,
    /// Control gehalten: Selektion wird erweitert
    On,
    /// Control losgelassen, aber Drag läuft noch
    OnUntilDragEnd,
}

impl MultiSelect {
    /// Gibt zurück, ob die Selektion gerade additiv ist.
    pub fn is_active(self) -> bool {
        self != MultiSelect::Off
    }
}

/// Rubber-Band-Selektion mit Alignment- und Lösch-Hotkeys.
#[derive(Debug, Default)]
pub struct SelectMode {
    drag: DragTracker,
    multi_select: MultiSelect,
    /// In dieser Geste neu selektierte Handler, in Selektions-Reihenfolge
    newly_selected: IndexSet<usize>,
}

impl SelectMode {
    /// Erstellt den Modus ohne laufende Geste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Zustand der Mehrfachselektion.
    pub fn multi_select(&self) -> MultiSelect {
        self.multi_select
    }
}

impl EditMode for SelectMode {
    fn kind(&self) -> EditModeKind {
        EditModeKind::Select
    }

    fn is_busy(&self) -> bool {
        self.drag.is_dragging()
    }

    fn stop(&mut self, ctx: &mut ModeContext<'_>) -> EditorResult<()> {
        self.drag.end_drag();
        // Nicht committete Live-Selektion wieder entfernen
        for index in self.newly_selected.drain(..) {
            ctx.target.set_selected(index, false)?;
        }
        self.multi_select = MultiSelect::Off;
        Ok(())
    }

    fn pointer_down(&mut self, ctx: &mut ModeContext<'_>, world: Vec2) -> EditorResult<bool> {
        self.drag.begin_drag(world);
        if !self.multi_select.is_active() {
            let action = DeselectAllHandlersAction::new(ctx.target);
            ctx.history.run(Box::new(action), ctx.target)?;
        }
        self.newly_selected.clear();
        Ok(true)
    }

    fn pointer_up(&mut self, ctx: &mut ModeContext<'_>, _world: Vec2) -> EditorResult<bool> {
        if !self.drag.is_dragging() {
            return Ok(false);
        }
        self.drag.end_drag();

        if self.multi_select == MultiSelect::OnUntilDragEnd {
            self.multi_select = MultiSelect::Off;
        }

        if !self.newly_selected.is_empty() {
            let action = SelectHandlersAction::new(self.newly_selected.drain(..));
            ctx.history.run(Box::new(action), ctx.target)?;
        }
        Ok(true)
    }

    fn pointer_dragged(&mut self, ctx: &mut ModeContext<'_>, world: Vec2) -> EditorResult<bool> {
        if !self.drag.is_dragging() {
            return Ok(false);
        }
        self.drag.notify_moved(world)?;
        let Some(rect) = self.drag.selection_rect() else {
            return Ok(false);
        };

        for index in 0..ctx.target.handlers().len() {
            let vertex = ctx.target.vertex(index)?;
            if rect.contains(vertex) {
                if !ctx.target.handler(index)?.selected {
                    self.newly_selected.insert(index);
                    ctx.target.set_selected(index, true)?;
                }
            } else if self.newly_selected.shift_remove(&index) {
                ctx.target.set_selected(index, false)?;
            }
        }
        Ok(true)
    }

    fn key_down(&mut self, ctx: &mut ModeContext<'_>, key: Key) -> EditorResult<bool> {
        match key {
            Key::X => {
                let action = AlignHandlersAction::vertically(ctx.target);
                ctx.history.run(Box::new(action), ctx.target)?;
                Ok(true)
            }
            Key::Y => {
                let action = AlignHandlersAction::horizontally(ctx.target);
                ctx.history.run(Box::new(action), ctx.target)?;
                Ok(true)
            }
            Key::Delete => {
                if self.drag.is_dragging() {
                    log::debug!("Löschen während der Rubber-Band-Selektion ignoriert");
                    return Ok(false);
                }
                let action =
                    RemoveVerticesAction::selected(ctx.target, ctx.options.min_polygon_vertices);
                if !ctx.history.run(Box::new(action), ctx.target)? {
                    log::info!(
                        "Löschen verworfen: Polygon braucht mindestens {} Vertices",
                        ctx.options.min_polygon_vertices
                    );
                }
                Ok(true)
            }
            Key::Control => {
                self.multi_select = MultiSelect::On;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn key_up(&mut self, _ctx: &mut ModeContext<'_>, key: Key) -> EditorResult<bool> {
        if key != Key::Control {
            return Ok(false);
        }
        self.multi_select = if self.drag.is_dragging() {
            MultiSelect::OnUntilDragEnd
        } else {
            MultiSelect::Off
        };
        Ok(true)
    }

    fn overlay(&self) -> ModeOverlay {
        ModeOverlay {
            selection_rect: self.drag.selection_rect(),
            multi_select: self.multi_select.is_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::history::ActionHistory;
    use crate::app::polygon_editor::BoundPolygon;
    use crate::core::Polygon;
    use crate::shared::EditorOptions;

    struct Fixture {
        target: BoundPolygon,
        history: ActionHistory<BoundPolygon>,
        options: EditorOptions,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                target: BoundPolygon::new(
                    Polygon::from_flat(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0]),
                    12.0,
                ),
                history: ActionHistory::new_with_capacity(20),
                options: EditorOptions::default(),
            }
        }

        fn ctx(&mut self) -> ModeContext<'_> {
            ModeContext {
                target: &mut self.target,
                history: &mut self.history,
                options: &self.options,
                zoom: 1.0,
            }
        }

        fn rubber_band(&mut self, mode: &mut SelectMode, from: Vec2, to: Vec2) {
            mode.pointer_down(&mut self.ctx(), from).unwrap();
            mode.pointer_dragged(&mut self.ctx(), to).unwrap();
            mode.pointer_up(&mut self.ctx(), to).unwrap();
        }
    }

    #[test]
    fn rubber_band_selects_and_commits_once() {
        let mut fx = Fixture::new();
        let mut mode = SelectMode::new();

        fx.rubber_band(&mut mode, Vec2::new(-1.0, -1.0), Vec2::new(11.0, 5.0));
        assert_eq!(fx.target.selected_indices(), vec![0, 1]);
        assert_eq!(fx.history.applied_names(), vec!["Handler selektieren"]);

        fx.history.undo(&mut fx.target).unwrap();
        assert!(fx.target.selected_indices().is_empty());
    }

    #[test]
    fn shrinking_rectangle_drops_newly_selected_handlers() {
        let mut fx = Fixture::new();
        let mut mode = SelectMode::new();

        mode.pointer_down(&mut fx.ctx(), Vec2::new(-1.0, -1.0)).unwrap();
        mode.pointer_dragged(&mut fx.ctx(), Vec2::new(11.0, 11.0)).unwrap();
        assert_eq!(fx.target.selected_indices(), vec![0, 1, 2, 3]);

        mode.pointer_dragged(&mut fx.ctx(), Vec2::new(5.0, 5.0)).unwrap();
        assert_eq!(fx.target.selected_indices(), vec![0]);

        mode.pointer_up(&mut fx.ctx(), Vec2::new(5.0, 5.0)).unwrap();
        assert_eq!(fx.target.selected_indices(), vec![0]);
    }

    #[test]
    fn new_drag_without_control_clears_previous_selection() {
        let mut fx = Fixture::new();
        let mut mode = SelectMode::new();

        fx.rubber_band(&mut mode, Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        fx.rubber_band(&mut mode, Vec2::new(9.0, 9.0), Vec2::new(11.0, 11.0));
        assert_eq!(fx.target.selected_indices(), vec![2]);
        assert_eq!(
            fx.history.applied_names(),
            vec![
                "Handler selektieren",
                "Selektion aufheben",
                "Handler selektieren"
            ]
        );
    }

    #[test]
    fn control_extends_selection() {
        let mut fx = Fixture::new();
        let mut mode = SelectMode::new();

        fx.rubber_band(&mut mode, Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        mode.key_down(&mut fx.ctx(), Key::Control).unwrap();
        fx.rubber_band(&mut mode, Vec2::new(9.0, 9.0), Vec2::new(11.0, 11.0));
        assert_eq!(fx.target.selected_indices(), vec![0, 2]);
        assert_eq!(mode.multi_select(), MultiSelect::On);
    }

    #[test]
    fn control_release_mid_drag_is_deferred() {
        let mut fx = Fixture::new();
        let mut mode = SelectMode::new();
        fx.rubber_band(&mut mode, Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));

        mode.key_down(&mut fx.ctx(), Key::Control).unwrap();
        mode.pointer_down(&mut fx.ctx(), Vec2::new(9.0, 9.0)).unwrap();
        mode.key_up(&mut fx.ctx(), Key::Control).unwrap();
        assert_eq!(mode.multi_select(), MultiSelect::OnUntilDragEnd);

        mode.pointer_dragged(&mut fx.ctx(), Vec2::new(11.0, 11.0)).unwrap();
        assert_eq!(fx.target.selected_indices(), vec![0, 2]);

        mode.pointer_up(&mut fx.ctx(), Vec2::new(11.0, 11.0)).unwrap();
        assert_eq!(fx.target.selected_indices(), vec![0, 2]);
        assert_eq!(mode.multi_select(), MultiSelect::Off);
    }

    #[test]
    fn control_pressed_and_released_mid_drag_keeps_selection_until_pointer_up() {
        let mut fx = Fixture::new();
        let mut mode = SelectMode::new();
        fx.rubber_band(&mut mode, Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));

        // Ohne Control: Pointer-Down hebt die Selektion auf
        mode.pointer_down(&mut fx.ctx(), Vec2::new(9.0, 9.0)).unwrap();
        mode.pointer_dragged(&mut fx.ctx(), Vec2::new(10.5, 10.5)).unwrap();
        assert_eq!(fx.target.selected_indices(), vec![2]);

        mode.key_down(&mut fx.ctx(), Key::Control).unwrap();
        assert_eq!(mode.multi_select(), MultiSelect::On);
        mode.key_up(&mut fx.ctx(), Key::Control).unwrap();
        assert_eq!(mode.multi_select(), MultiSelect::OnUntilDragEnd);

        mode.pointer_dragged(&mut fx.ctx(), Vec2::new(11.0, 11.0)).unwrap();
        assert_eq!(fx.target.selected_indices(), vec![2]);

        mode.pointer_up(&mut fx.ctx(), Vec2::new(11.0, 11.0)).unwrap();
        assert_eq!(fx.target.selected_indices(), vec![2]);
        assert_eq!(mode.multi_select(), MultiSelect::Off);
    }

    #[test]
    fn delete_during_drag_is_refused() {
        let mut fx = Fixture::new();
        fx.target.insert_vertex(1, Vec2::new(5.0, -2.0), false).unwrap();
        let mut mode = SelectMode::new();

        mode.pointer_down(&mut fx.ctx(), Vec2::new(4.0, -3.0)).unwrap();
        mode.pointer_dragged(&mut fx.ctx(), Vec2::new(11.0, 1.0)).unwrap();
        assert_eq!(fx.target.selected_indices(), vec![1, 2]);
        assert!(mode.is_busy());

        assert!(!mode.key_down(&mut fx.ctx(), Key::Delete).unwrap());
        assert_eq!(fx.target.polygon().len(), 5);

        mode.pointer_up(&mut fx.ctx(), Vec2::new(11.0, 1.0)).unwrap();
        assert!(!mode.is_busy());
        assert!(mode.key_down(&mut fx.ctx(), Key::Delete).unwrap());
        assert_eq!(fx.target.polygon().len(), 3);
    }

    #[test]
    fn stop_discards_uncommitted_selection() {
        let mut fx = Fixture::new();
        let mut mode = SelectMode::new();

        mode.pointer_down(&mut fx.ctx(), Vec2::new(-1.0, -1.0)).unwrap();
        mode.pointer_dragged(&mut fx.ctx(), Vec2::new(11.0, 11.0)).unwrap();
        assert!(mode.overlay().selection_rect.is_some());

        mode.stop(&mut fx.ctx()).unwrap();
        assert!(fx.target.selected_indices().is_empty());
        assert!(mode.overlay().selection_rect.is_none());
        assert!(!fx.history.can_undo());
    }

    #[test]
    fn delete_key_removes_selected_vertices_down_to_minimum() {
        let mut fx = Fixture::new();
        let mut mode = SelectMode::new();

        fx.rubber_band(&mut mode, Vec2::new(9.0, -1.0), Vec2::new(11.0, 11.0));
        assert_eq!(fx.target.selected_indices(), vec![1, 2]);

        // 4 - 2 < 3: ungültig, nichts passiert
        assert!(mode.key_down(&mut fx.ctx(), Key::Delete).unwrap());
        assert_eq!(fx.target.polygon().len(), 4);

        fx.rubber_band(&mut mode, Vec2::new(9.0, -1.0), Vec2::new(11.0, 1.0));
        mode.key_down(&mut fx.ctx(), Key::Delete).unwrap();
        assert_eq!(fx.target.polygon().len(), 3);
        assert_eq!(fx.target.vertex(1).unwrap(), Vec2::new(10.0, 10.0));
    }
}
