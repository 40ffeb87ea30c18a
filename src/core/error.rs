//! Fehlertypen für Invarianten-Verletzungen im Editor-Kern.
//!
//! Ungültige Actions sind keine Fehler (sie werden still verworfen),
//! ebenso Undo/Redo auf leerer History.

use thiserror::Error;

/// Verletzte Vorbedingung oder Programm-Invariante.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Drag-Abfrage ohne aktive Drag-Session
    #[error("keine aktive Drag-Session")]
    NotDragging,
    /// Vertex-Index außerhalb des Vertex-Buffers
    #[error("Vertex-Index {index} außerhalb des Buffers (Länge {len})")]
    VertexOutOfRange { index: usize, len: usize },
    /// Operation würde das Polygon unter die Mindestgröße bringen
    #[error("Polygon hätte nur {len} Vertices (Minimum {min})")]
    PolygonTooSmall { len: usize, min: usize },
    /// Handler-Set passt nicht zum Vertex-Buffer
    #[error("Handler {index} existiert nicht (Handler-Anzahl {len})")]
    HandlerMismatch { index: usize, len: usize },
}

/// Ergebnis-Typ des Editor-Kerns.
pub type EditorResult<T> = Result<T, EditorError>;
