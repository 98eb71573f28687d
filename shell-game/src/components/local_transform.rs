use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The entity's position on the screen, in pixels.
///
/// Coordinates follow screen convention: x grows to the right, y grows
/// *downward*. A cup that has been lifted therefore has a smaller y than a cup
/// resting on the board.
///
/// This is the only positional state in the simulation - there is no parent
/// hierarchy. Animation scripts mutate it one axis at a time.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec2,
    /// The non-uniform scale of the entity
    pub scale: Vec2,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: Vec2::ONE,
        }
    }
}

impl LocalTransform {
    /// Convenience constructor for an unscaled entity at `translation`
    pub fn from_translation(translation: Vec2) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }
}
