//! Transformation eines Sprites (Verschieben, Skalieren, Rotieren).

use crate::app::history::Action;
use crate::core::{EditorResult, LevelSprite, SpriteTransform};

/// Zeichnet eine abgeschlossene Sprite-Transformation auf.
#[derive(Debug, Clone)]
pub struct TransformSpriteAction {
    before: SpriteTransform,
    after: SpriteTransform,
}

impl TransformSpriteAction {
    /// Erstellt die Action aus Vorher- und Nachher-Transformation.
    pub fn new(before: SpriteTransform, after: SpriteTransform) -> Self {
        Self { before, after }
    }
}

impl Action<LevelSprite> for TransformSpriteAction {
    fn name(&self) -> &'static str {
        "Sprite transformieren"
    }

    fn apply(&mut self, target: &mut LevelSprite) -> EditorResult<()> {
        target.transform = self.after;
        Ok(())
    }

    fn revert(&mut self, target: &mut LevelSprite) -> EditorResult<()> {
        target.transform = self.before;
        Ok(())
    }

    fn is_valid(&self, _target: &LevelSprite) -> bool {
        self.before != self.after
    }
}
