use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::LocalTransform;

/// The natural (unscaled) size of the texture an entity is drawn with, in
/// pixels.
///
/// The simulation never touches pixel data - it only needs the footprint to
/// lay the board out and to anchor the prize beneath a cup. The host maps the
/// entity to an actual texture however it likes.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct Sprite {
    /// Width and height of the texture before scaling
    pub size: Vec2,
}

impl Sprite {
    /// The on-screen height of the sprite under the given transform
    pub fn drawn_height(&self, transform: &LocalTransform) -> f32 {
        self.size.y * transform.scale.y
    }
}
