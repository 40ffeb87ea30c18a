//! Drag-Tracker: inkrementelle Offsets während einer Pointer-Drag-Geste.

use glam::Vec2;

use crate::core::{rectangle_from_points, EditorError, EditorResult, Rect};

/// Zustand einer laufenden Drag-Geste (Welt-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    start: Vec2,
    last: Vec2,
}

/// Verfolgt höchstens eine laufende Drag-Geste.
///
/// Zwischen `begin_drag` und `end_drag` liefert `offset` das Delta seit dem
/// letzten `reset`/`notify_moved`. Abfragen ohne aktive Session sind eine
/// Vorbedingungsverletzung und liefern `EditorError::NotDragging`.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    /// Erstellt einen Tracker ohne aktive Session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine Session; `world_pos` wird Start- und letzte Position.
    ///
    /// Eine bereits laufende Session wird ersetzt.
    pub fn begin_drag(&mut self, world_pos: Vec2) {
        if self.session.is_some() {
            log::debug!("Drag neu gestartet, vorherige Session verworfen");
        }
        self.session = Some(DragSession {
            start: world_pos,
            last: world_pos,
        });
    }

    /// Aktualisiert die letzte Position, ohne den Start zu verändern.
    pub fn notify_moved(&mut self, world_pos: Vec2) -> EditorResult<()> {
        self.session_mut()?.last = world_pos;
        Ok(())
    }

    /// Delta von der letzten Position zu `world_pos`.
    pub fn offset(&self, world_pos: Vec2) -> EditorResult<Vec2> {
        Ok(world_pos - self.session()?.last)
    }

    /// Setzt die letzte Position nach dem Verbrauch eines Offsets.
    pub fn reset(&mut self, world_pos: Vec2) -> EditorResult<()> {
        self.notify_moved(world_pos)
    }

    /// Beendet die Session. Ohne aktive Session ein No-op.
    pub fn end_drag(&mut self) {
        self.session = None;
    }

    /// Gibt zurück, ob eine Session aktiv ist.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Startposition der laufenden Session.
    pub fn start_position(&self) -> EditorResult<Vec2> {
        Ok(self.session()?.start)
    }

    /// Letzte bekannte Position der laufenden Session.
    pub fn last_position(&self) -> EditorResult<Vec2> {
        Ok(self.session()?.last)
    }

    /// Aufgespanntes Rechteck von Start bis letzter Position, falls aktiv.
    pub fn selection_rect(&self) -> Option<Rect> {
        self.session
            .map(|session| rectangle_from_points(session.start, session.last))
    }

    fn session(&self) -> EditorResult<&DragSession> {
        self.session.as_ref().ok_or(EditorError::NotDragging)
    }

    fn session_mut(&mut self) -> EditorResult<&mut DragSession> {
        self.session.as_mut().ok_or(EditorError::NotDragging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_incremental_after_reset() {
        let mut tracker = DragTracker::new();
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(3.0, 4.0);
        let p2 = Vec2::new(10.0, -2.0);

        tracker.begin_drag(p0);
        tracker.notify_moved(p1).unwrap();
        assert_eq!(tracker.offset(p1).unwrap(), Vec2::ZERO);
        tracker.reset(p1).unwrap();
        assert_eq!(tracker.offset(p2).unwrap(), p2 - p1);
        assert_eq!(tracker.start_position().unwrap(), p0);
    }

    #[test]
    fn queries_without_session_are_precondition_errors() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.offset(Vec2::ONE), Err(EditorError::NotDragging));
        assert_eq!(tracker.reset(Vec2::ONE), Err(EditorError::NotDragging));
        assert_eq!(tracker.notify_moved(Vec2::ONE), Err(EditorError::NotDragging));
        assert_eq!(tracker.start_position(), Err(EditorError::NotDragging));
        assert!(tracker.selection_rect().is_none());
    }

    #[test]
    fn end_drag_clears_session() {
        let mut tracker = DragTracker::new();
        tracker.begin_drag(Vec2::ONE);
        assert!(tracker.is_dragging());
        tracker.end_drag();
        assert!(!tracker.is_dragging());
        // Doppeltes Beenden bleibt folgenlos
        tracker.end_drag();
        assert!(tracker.last_position().is_err());
    }

    #[test]
    fn selection_rect_spans_start_and_last() {
        let mut tracker = DragTracker::new();
        tracker.begin_drag(Vec2::new(9.0, 9.0));
        tracker.notify_moved(Vec2::new(1.0, 1.0)).unwrap();
        let rect = tracker.selection_rect().unwrap();
        assert_eq!(rect.min, Vec2::new(1.0, 1.0));
        assert_eq!(rect.max, Vec2::new(9.0, 9.0));
    }
}
