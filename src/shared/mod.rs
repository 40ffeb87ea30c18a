//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration und die Overlay-Szene, die zwischen `app` und
//! dem Host-Renderer geteilt werden.

pub mod options;
mod overlay;

pub use options::EditorOptions;
pub use overlay::{HandlerMarker, OverlayScene, PolygonOverlay, SpriteOverlay};
