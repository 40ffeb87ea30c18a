//! Edit-Modi des Polygon-Editors als austauschbare Zustände.
//!
//! Genau ein Modus ist aktiv. Beim Wechsel ruft der Editor `stop()` auf dem
//! alten und `start()` auf dem neuen Modus auf. Jeder Modus bekommt pro
//! Event einen `ModeContext` mit gebundenem Polygon, History und Optionen;
//! Welt-Positionen rechnet der Editor vorher aus Screen-Positionen um.

mod add_vertex;
mod default;
mod select;

pub use add_vertex::AddVertexMode;
pub use default::DefaultMode;
pub use select::{MultiSelect, SelectMode};

use glam::Vec2;

use super::BoundPolygon;
use crate::app::history::ActionHistory;
use crate::app::input::Key;
use crate::core::{EditorResult, Rect};
use crate::shared::EditorOptions;

/// Verfügbare Edit-Modi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditModeKind {
    /// Einzelnen Vertex ziehen
    #[default]
    Default,
    /// Vertex in die nächste Kante einfügen
    AddVertex,
    /// Rubber-Band-Selektion und Ausrichten
    Select,
}

impl EditModeKind {
    /// Erstellt eine frische Modus-Instanz.
    pub fn create(self) -> Box<dyn EditMode> {
        match self {
            EditModeKind::Default => Box::new(DefaultMode::new()),
            EditModeKind::AddVertex => Box::new(AddVertexMode::new()),
            EditModeKind::Select => Box::new(SelectMode::new()),
        }
    }

    /// Anzeigename für Overlay und Logs
    pub fn name(self) -> &'static str {
        match self {
            EditModeKind::Default => "Verschieben",
            EditModeKind::AddVertex => "Vertex einfügen",
            EditModeKind::Select => "Selektieren",
        }
    }

    /// Modus-Hotkey (`1`, `2`, `3`).
    pub fn from_hotkey(key: Key) -> Option<Self> {
        match key {
            Key::Num1 => Some(EditModeKind::Default),
            Key::Num2 => Some(EditModeKind::AddVertex),
            Key::Num3 => Some(EditModeKind::Select),
            _ => None,
        }
    }
}

/// Alles, was ein Modus für ein Event vom Editor braucht.
pub struct ModeContext<'a> {
    /// Gebundenes Polygon samt Handlern
    pub target: &'a mut BoundPolygon,
    /// History des Polygon-Editors
    pub history: &'a mut ActionHistory<BoundPolygon>,
    /// Laufzeit-Optionen
    pub options: &'a EditorOptions,
    /// Aktueller Kamera-Zoom
    pub zoom: f32,
}

/// Per-Frame-Zustand eines Modus für das Overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModeOverlay {
    /// Rubber-Band-Rechteck während eines Select-Drags
    pub selection_rect: Option<Rect>,
    /// Mehrfachselektion aktiv
    pub multi_select: bool,
}

/// Schnittstelle aller Edit-Modi.
///
/// Event-Methoden geben zurück, ob das Event verbraucht wurde.
pub trait EditMode {
    /// Art des Modus
    fn kind(&self) -> EditModeKind;

    /// Läuft gerade eine Geste, die Handler-Indizes zwischenspeichert?
    ///
    /// Solange `true`, verweigert der Editor History-Operationen und
    /// strukturelle Änderungen, weil sie die Handler neu nummerieren.
    fn is_busy(&self) -> bool {
        false
    }

    /// Modus wird aktiv.
    fn start(&mut self, _ctx: &mut ModeContext<'_>) -> EditorResult<()> {
        Ok(())
    }

    /// Modus wird verlassen: laufende Drags beenden, transiente Flags entfernen.
    fn stop(&mut self, ctx: &mut ModeContext<'_>) -> EditorResult<()>;

    /// Maustaste gedrückt.
    fn pointer_down(&mut self, ctx: &mut ModeContext<'_>, world: Vec2) -> EditorResult<bool>;

    /// Maustaste losgelassen.
    fn pointer_up(&mut self, ctx: &mut ModeContext<'_>, world: Vec2) -> EditorResult<bool>;

    /// Maus bewegt ohne Taste. Hover berechnet der Editor bereits vorher neu.
    fn pointer_moved(&mut self, _ctx: &mut ModeContext<'_>, _world: Vec2) -> EditorResult<bool> {
        Ok(false)
    }

    /// Maus bewegt mit gedrückter Taste.
    fn pointer_dragged(&mut self, ctx: &mut ModeContext<'_>, world: Vec2) -> EditorResult<bool>;

    /// Taste gedrückt.
    fn key_down(&mut self, _ctx: &mut ModeContext<'_>, _key: Key) -> EditorResult<bool> {
        Ok(false)
    }

    /// Taste losgelassen.
    fn key_up(&mut self, _ctx: &mut ModeContext<'_>, _key: Key) -> EditorResult<bool> {
        Ok(false)
    }

    /// Zustand für das Overlay dieses Frames.
    fn overlay(&self) -> ModeOverlay {
        ModeOverlay::default()
    }
}
