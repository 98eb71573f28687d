/// Marks an entity as accepting pointer taps.
///
/// Toggled by insertion and removal, like [`super::Visible`]. The game system
/// ignores taps on entities that do not carry this component, which is how
/// cups are debounced during animation.
#[derive(Debug, Clone, Copy)]
pub struct Interactive {}
