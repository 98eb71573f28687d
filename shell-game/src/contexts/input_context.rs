use hecs::Entity;

/// Pointer input shared with the host.
///
/// The host performs its own hit-testing and pushes the tapped entity here;
/// the game system drains the queue once per tick. Taps on entities without
/// an [`crate::components::Interactive`] component are ignored, so the host
/// does not need to know which entities are currently tappable.
#[derive(Debug, Default)]
pub struct InputContext {
    /// Entities tapped since the last tick, in delivery order
    pub taps: Vec<Entity>,
}

impl InputContext {
    /// Record a tap on `target`
    pub fn push_tap(&mut self, target: Entity) {
        self.taps.push(target);
    }

    pub(crate) fn drain_taps(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.taps)
    }
}
