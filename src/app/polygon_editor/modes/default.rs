//! Default-Modus: einen einzelnen Vertex per Drag verschieben.

use glam::Vec2;

use super::{EditMode, EditModeKind, ModeContext};
use crate::app::actions::MoveHandlerAction;
use crate::app::drag::DragTracker;
use crate::core::EditorResult;

/// Laufender Vertex-Drag.
#[derive(Debug, Clone, Copy)]
struct ActiveMove {
    handler_index: usize,
    original_position: Vec2,
}

/// Zieht den Vertex unter der Maus.
///
/// Während des Drags wird direkt in den Vertex-Buffer geschrieben; beim
/// Loslassen landet die Gesamtverschiebung als `MoveHandlerAction` in der
/// History. Verschiebungen unter der Schwelle gelten als Klick und werden
/// auf die Ausgangsposition zurückgesetzt.
#[derive(Debug, Default)]
pub struct DefaultMode {
    drag: DragTracker,
    active: Option<ActiveMove>,
}

impl DefaultMode {
    /// Erstellt den Modus ohne laufenden Drag.
    pub fn new() -> Self {
        Self::default()
    }

    fn finish(&mut self, ctx: &mut ModeContext<'_>) -> EditorResult<Option<(ActiveMove, Vec2)>> {
        self.drag.end_drag();
        let Some(active) = self.active.take() else {
            return Ok(None);
        };
        ctx.target.set_dragged(active.handler_index, false)?;
        let final_position = ctx.target.vertex(active.handler_index)?;
        Ok(Some((active, final_position)))
    }
}

impl EditMode for DefaultMode {
    fn kind(&self) -> EditModeKind {
        EditModeKind::Default
    }

    fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    fn stop(&mut self, ctx: &mut ModeContext<'_>) -> EditorResult<()> {
        // Abgebrochener Drag: Vertex zurück auf die Ausgangsposition
        if let Some((active, _)) = self.finish(ctx)? {
            ctx.target
                .set_vertex(active.handler_index, active.original_position)?;
        }
        Ok(())
    }

    fn pointer_down(&mut self, ctx: &mut ModeContext<'_>, world: Vec2) -> EditorResult<bool> {
        let Some(index) = ctx.target.hovered_index() else {
            return Ok(false);
        };
        let original_position = ctx.target.vertex(index)?;
        ctx.target.set_dragged(index, true)?;
        self.drag.begin_drag(world);
        self.active = Some(ActiveMove {
            handler_index: index,
            original_position,
        });
        Ok(true)
    }

    fn pointer_up(&mut self, ctx: &mut ModeContext<'_>, _world: Vec2) -> EditorResult<bool> {
        let Some((active, final_position)) = self.finish(ctx)? else {
            return Ok(false);
        };

        let action = MoveHandlerAction::new(
            active.handler_index,
            active.original_position,
            final_position,
            ctx.options.move_threshold_sq,
        );
        if !ctx.history.run(Box::new(action), ctx.target)? {
            ctx.target
                .set_vertex(active.handler_index, active.original_position)?;
        }
        Ok(true)
    }

    fn pointer_dragged(&mut self, ctx: &mut ModeContext<'_>, world: Vec2) -> EditorResult<bool> {
        let Some(active) = self.active else {
            return Ok(false);
        };
        let offset = self.drag.offset(world)?;
        self.drag.reset(world)?;
        ctx.target.move_vertex(active.handler_index, offset)?;
        Ok(true)
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
                history: ActionHistory::new_with_capacity(10),
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
    }

    #[test]
    fn drag_moves_vertex_and_records_one_action() {
        let mut fx = Fixture::new();
        let mut mode = DefaultMode::new();
        fx.target.update_hover(Vec2::new(10.0, 10.0), 1.0);

        assert!(mode.pointer_down(&mut fx.ctx(), Vec2::new(10.0, 10.0)).unwrap());
        assert_eq!(fx.target.dragged_index(), Some(2));
        assert!(mode.pointer_dragged(&mut fx.ctx(), Vec2::new(12.0, 11.0)).unwrap());
        assert!(mode.pointer_dragged(&mut fx.ctx(), Vec2::new(15.0, 13.0)).unwrap());
        assert_eq!(fx.target.vertex(2).unwrap(), Vec2::new(15.0, 13.0));

        assert!(mode.pointer_up(&mut fx.ctx(), Vec2::new(15.0, 13.0)).unwrap());
        assert_eq!(fx.target.dragged_index(), None);
        assert_eq!(fx.history.undo_len(), 1);

        fx.history.undo(&mut fx.target).unwrap();
        assert_eq!(fx.target.vertex(2).unwrap(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn pointer_down_without_hover_is_not_consumed() {
        let mut fx = Fixture::new();
        let mut mode = DefaultMode::new();
        fx.target.update_hover(Vec2::new(5.0, 5.0), 1.0);

        assert!(!mode.pointer_down(&mut fx.ctx(), Vec2::new(5.0, 5.0)).unwrap());
        assert!(!mode.pointer_dragged(&mut fx.ctx(), Vec2::new(6.0, 5.0)).unwrap());
        assert!(!mode.pointer_up(&mut fx.ctx(), Vec2::new(6.0, 5.0)).unwrap());
    }

    #[test]
    fn tiny_drag_snaps_back_without_history_entry() {
        let mut fx = Fixture::new();
        let mut mode = DefaultMode::new();
        fx.target.update_hover(Vec2::ZERO, 1.0);

        mode.pointer_down(&mut fx.ctx(), Vec2::ZERO).unwrap();
        mode.pointer_dragged(&mut fx.ctx(), Vec2::new(0.5, 0.0)).unwrap();
        mode.pointer_up(&mut fx.ctx(), Vec2::new(0.5, 0.0)).unwrap();

        assert_eq!(fx.target.vertex(0).unwrap(), Vec2::ZERO);
        assert!(!fx.history.can_undo());
    }

    #[test]
    fn mode_is_busy_only_while_dragging() {
        let mut fx = Fixture::new();
        let mut mode = DefaultMode::new();
        fx.target.update_hover(Vec2::new(10.0, 0.0), 1.0);
        assert!(!mode.is_busy());

        mode.pointer_down(&mut fx.ctx(), Vec2::new(10.0, 0.0)).unwrap();
        assert!(mode.is_busy());
        mode.pointer_up(&mut fx.ctx(), Vec2::new(10.0, 0.0)).unwrap();
        assert!(!mode.is_busy());
    }

    #[test]
    fn stop_cancels_running_drag() {
        let mut fx = Fixture::new();
        let mut mode = DefaultMode::new();
        fx.target.update_hover(Vec2::new(10.0, 0.0), 1.0);

        mode.pointer_down(&mut fx.ctx(), Vec2::new(10.0, 0.0)).unwrap();
        mode.pointer_dragged(&mut fx.ctx(), Vec2::new(20.0, 0.0)).unwrap();
        mode.stop(&mut fx.ctx()).unwrap();

        assert_eq!(fx.target.vertex(1).unwrap(), Vec2::new(10.0, 0.0));
        assert_eq!(fx.target.dragged_index(), None);
        assert!(!fx.history.can_undo());
    }
}
