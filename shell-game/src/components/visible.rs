/// The Visible component determines whether a given entity is shown or hidden
/// by the host's renderer.
///
/// Visibility is toggled by inserting or removing the component, never by a
/// flag: `world.insert_one(entity, Visible {})` to show,
/// `world.remove_one::<Visible>(entity)` to hide.
#[derive(Debug, Clone, Copy)]
pub struct Visible {}
