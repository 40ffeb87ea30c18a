//! Undo/Redo-Framework: rücknehmbare Actions und ihre lineare History.
//!
//! Eine Action wird nur aufgezeichnet, wenn `is_valid()` vor der Ausführung
//! `true` liefert und `apply()` erfolgreich war. Neue Actions nach einem Undo
//! verwerfen den Redo-Schwanz; es gibt keine Verzweigung und kein Mergen.

use crate::core::EditorResult;

/// Rücknehmbare Zustandsänderung an einem Ziel `T`.
///
/// Konstruktoren erfassen den minimalen Vorher-Zustand. `revert()` stellt
/// exakt den beobachtbaren Zustand vor `apply()` wieder her; ein erneutes
/// `apply()` nach `revert()` reproduziert exakt den Nachher-Zustand.
pub trait Action<T> {
    /// Kurzer Name für Logs
    fn name(&self) -> &'static str;

    /// Führt die Änderung genau einmal aus.
    fn apply(&mut self, target: &mut T) -> EditorResult<()>;

    /// Macht die Änderung rückgängig.
    fn revert(&mut self, target: &mut T) -> EditorResult<()>;

    /// Seiteneffektfreie Prüfung vor dem Aufzeichnen (z.B. "ändert sich überhaupt etwas?").
    fn is_valid(&self, target: &T) -> bool;
}

/// Lineare Undo/Redo-History über Actions auf `T`.
pub struct ActionHistory<T> {
    undo_stack: Vec<Box<dyn Action<T>>>,
    redo_stack: Vec<Box<dyn Action<T>>>,
    max_depth: usize,
}

impl<T> Default for ActionHistory<T> {
    fn default() -> Self {
        Self::new_with_capacity(200)
    }
}

impl<T> ActionHistory<T> {
    /// Erstellt eine History mit maximaler Tiefe (mindestens 1).
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(256)),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Validiert, führt aus und zeichnet auf.
    ///
    /// `Ok(false)`: Action ungültig und verworfen (kein Fehler).
    /// `Err(_)`: `apply()` fehlgeschlagen, History unverändert.
    pub fn run(&mut self, mut action: Box<dyn Action<T>>, target: &mut T) -> EditorResult<bool> {
        if !action.is_valid(target) {
            log::debug!("Action '{}' ungültig, verworfen", action.name());
            return Ok(false);
        }

        if let Err(e) = action.apply(target) {
            log::error!("Action '{}' fehlgeschlagen: {}", action.name(), e);
            return Err(e);
        }

        log::debug!("Action '{}' ausgeführt", action.name());
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(action);
        self.redo_stack.clear();
        Ok(true)
    }

    /// Nimmt die zuletzt angewendete Action zurück. Leere History: `Ok(false)`.
    pub fn undo(&mut self, target: &mut T) -> EditorResult<bool> {
        let Some(mut action) = self.undo_stack.pop() else {
            log::debug!("Undo: nichts zu tun");
            return Ok(false);
        };

        if let Err(e) = action.revert(target) {
            log::error!("Undo von '{}' fehlgeschlagen: {}", action.name(), e);
            self.undo_stack.push(action);
            return Err(e);
        }

        log::info!("Undo ausgeführt: {}", action.name());
        self.redo_stack.push(action);
        Ok(true)
    }

    /// Wendet die zuletzt zurückgenommene Action erneut an. Leerer Redo-Stack: `Ok(false)`.
    pub fn redo(&mut self, target: &mut T) -> EditorResult<bool> {
        let Some(mut action) = self.redo_stack.pop() else {
            log::debug!("Redo: nichts zu tun");
            return Ok(false);
        };

        if let Err(e) = action.apply(target) {
            log::error!("Redo von '{}' fehlgeschlagen: {}", action.name(), e);
            self.redo_stack.push(action);
            return Err(e);
        }

        log::info!("Redo ausgeführt: {}", action.name());
        self.undo_stack.push(action);
        Ok(true)
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl angewendeter Actions.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl zurückgenommener, wiederholbarer Actions.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Namen der angewendeten Actions, älteste zuerst.
    pub fn applied_names(&self) -> Vec<&'static str> {
        self.undo_stack.iter().map(|a| a.name()).collect()
    }

    /// Verwirft die komplette History (z.B. beim Binden eines neuen Ziels).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
