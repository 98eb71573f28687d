use std::time::Duration;

use hecs::World;

use crate::GameContext;

/// Animation system
/// Advances the running animation script, if any, by `dt`.
pub fn animation_system(world: &mut World, game_context: &mut GameContext, dt: Duration) {
    game_context.sequencer.tick(world, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        animation::{Axis, Step},
        components::LocalTransform,
        systems::layout_system,
    };
    use approx::assert_relative_eq;

    #[test]
    pub fn animation_system_test() {
        let mut world = World::new();
        let mut game_context = GameContext::new(&mut world);
        layout_system(&mut world, &game_context, 1200., 900.);

        let cup = game_context.cups[0];
        let before = world.get::<&LocalTransform>(cup).unwrap().translation;

        game_context.sequencer.begin(vec![Step::Move {
            target: cup,
            axis: Axis::Y,
            delta: -120.,
            duration: Duration::from_millis(350),
        }]);
        animation_system(&mut world, &mut game_context, Duration::from_millis(175));

        let after = world.get::<&LocalTransform>(cup).unwrap().translation;
        assert_relative_eq!(after.y, before.y - 60.);
        assert_relative_eq!(after.x, before.x);
    }
}
