//! Roh-Eingaben des Hosts in Screen-Koordinaten.
//!
//! Der Host übersetzt Fenster-Events in `EditorInput`; die Umrechnung in
//! Welt-Koordinaten passiert erst im Editor über den `Viewport`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tasten, auf die der Editor reagiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Modus "Default"
    Num1,
    /// Modus "AddVertex"
    Num2,
    /// Modus "Select"
    Num3,
    /// Vertikal ausrichten (Select)
    X,
    /// Horizontal ausrichten (Select) bzw. Redo mit Control
    Y,
    /// Undo mit Control
    Z,
    /// Selektierte Vertices löschen (Select)
    Delete,
    /// Mehrfachselektion / Modifier für Undo/Redo
    Control,
}

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Linke Maustaste
    #[default]
    Primary,
    /// Rechte Maustaste
    Secondary,
    /// Mittlere Maustaste
    Middle,
}

/// Ein einzelnes Eingabe-Event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorInput {
    /// Taste gedrückt
    PointerDown {
        /// Screen-Position
        screen: Vec2,
        /// Maustaste
        #[serde(default)]
        button: PointerButton,
    },
    /// Taste losgelassen
    PointerUp {
        /// Screen-Position
        screen: Vec2,
        /// Maustaste
        #[serde(default)]
        button: PointerButton,
    },
    /// Maus bewegt, keine Taste gedrückt
    PointerMoved {
        /// Screen-Position
        screen: Vec2,
    },
    /// Maus bewegt mit gedrückter Taste
    PointerDragged {
        /// Screen-Position
        screen: Vec2,
    },
    /// Tastatur: Taste gedrückt
    KeyDown {
        /// Taste
        key: Key,
    },
    /// Tastatur: Taste losgelassen
    KeyUp {
        /// Taste
        key: Key,
    },
    /// Mausrad; positive Werte zoomen hinein
    Scrolled {
        /// Anzahl Rasterschritte
        amount: f32,
    },
}
