use glam::{vec2, Vec2};
use hecs::World;

use crate::{
    animation::sequencer::place_under,
    components::{LocalTransform, Sprite},
    GameContext,
};

const ICON_SCALE: f32 = 1.8;
const PAUSE_ICON_POSITION: Vec2 = Vec2::new(20., 40.);
const SETTINGS_ICON_INSET: f32 = 20.;
const SETTINGS_ICON_Y: f32 = 120.;
const PLAY_BUTTON_Y_FRACTION: f32 = 0.875;
const MAX_CUP_SPACING: f32 = 300.;
const CUP_DRAWN_HEIGHT: f32 = 250.;
const MAX_CUP_SCALE: f32 = 2.;
const PRIZE_SCALE: f32 = 0.7;

/// Layout system
/// Lays the screen out for the given viewport: icons in the top corners, the
/// play button low and centred, the background covering everything, the cups
/// evenly spaced along the vertical centre line with the prize seated under
/// the middle cup. Pure arithmetic; the host calls this whenever its viewport
/// changes.
pub fn layout_system(world: &mut World, game_context: &GameContext, width: f32, height: f32) {
    if let Ok(mut transform) = world.get::<&mut LocalTransform>(game_context.pause_icon) {
        transform.translation = PAUSE_ICON_POSITION;
        transform.scale = Vec2::splat(ICON_SCALE);
    }
    if let Ok(mut transform) = world.get::<&mut LocalTransform>(game_context.settings_icon) {
        transform.translation = vec2(width - SETTINGS_ICON_INSET, SETTINGS_ICON_Y);
        transform.scale = Vec2::splat(ICON_SCALE);
    }
    if let Ok(mut transform) = world.get::<&mut LocalTransform>(game_context.play_button) {
        transform.translation = vec2(width * 0.5, height * PLAY_BUTTON_Y_FRACTION);
    }

    // Stretch the background over the whole viewport.
    if let Ok((transform, sprite)) =
        world.query_one_mut::<(&mut LocalTransform, &Sprite)>(game_context.background)
    {
        transform.translation = vec2(width * 0.5, height * 0.5);
        transform.scale = vec2(width / sprite.size.x, height / sprite.size.y);
    }

    // One row of cups, centred on the viewport.
    let spacing = MAX_CUP_SPACING.min(width / 3.);
    let group_width = game_context.cups.len().saturating_sub(1) as f32 * spacing;
    let row_y = height * 0.5;
    for (index, &cup) in game_context.cups.iter().enumerate() {
        if let Ok((transform, sprite)) =
            world.query_one_mut::<(&mut LocalTransform, &Sprite)>(cup)
        {
            transform.translation = vec2(
                width * 0.5 - group_width / 2. + index as f32 * spacing,
                row_y,
            );
            if sprite.size.y > 0. {
                transform.scale = Vec2::splat(MAX_CUP_SCALE.min(CUP_DRAWN_HEIGHT / sprite.size.y));
            }
        }
    }

    // Seat the prize under the middle cup.
    if let Ok(mut transform) = world.get::<&mut LocalTransform>(game_context.prize) {
        transform.scale = Vec2::splat(PRIZE_SCALE);
    }
    if let Some(&middle) = game_context.cups.get(game_context.cups.len() / 2) {
        let _ = place_under(world, game_context.prize, middle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PRIZE_ANCHOR_RATIO;
    use approx::assert_relative_eq;

    fn translation(world: &World, entity: hecs::Entity) -> Vec2 {
        world.get::<&LocalTransform>(entity).unwrap().translation
    }

    #[test]
    pub fn layout_system_test() {
        let mut world = World::new();
        let game_context = GameContext::new(&mut world);
        layout_system(&mut world, &game_context, 1200., 900.);

        // Wide viewport: spacing caps at 300 and the row centres on 600.
        let xs: Vec<f32> = game_context
            .cups
            .iter()
            .map(|&cup| translation(&world, cup).x)
            .collect();
        assert_relative_eq!(xs[0], 300.);
        assert_relative_eq!(xs[1], 600.);
        assert_relative_eq!(xs[2], 900.);
        for &cup in &game_context.cups {
            assert_relative_eq!(translation(&world, cup).y, 450.);
            // 256px texture scaled to a 250px drawn height
            assert_relative_eq!(
                world.get::<&LocalTransform>(cup).unwrap().scale.y,
                250. / 256.
            );
        }

        assert_relative_eq!(translation(&world, game_context.play_button).x, 600.);
        assert_relative_eq!(translation(&world, game_context.play_button).y, 787.5);
        assert_relative_eq!(translation(&world, game_context.pause_icon).x, 20.);
        assert_relative_eq!(translation(&world, game_context.pause_icon).y, 40.);
        assert_relative_eq!(translation(&world, game_context.settings_icon).x, 1180.);
        assert_relative_eq!(translation(&world, game_context.settings_icon).y, 120.);

        // Background stretched over the full viewport.
        assert_relative_eq!(translation(&world, game_context.background).x, 600.);
        assert_relative_eq!(translation(&world, game_context.background).y, 450.);
        let background_scale = world
            .get::<&LocalTransform>(game_context.background)
            .unwrap()
            .scale;
        assert_relative_eq!(background_scale.x, 2.);
        assert_relative_eq!(background_scale.y, 1.5);

        // Prize seated under the middle cup.
        let prize = translation(&world, game_context.prize);
        assert_relative_eq!(prize.x, 600.);
        assert_relative_eq!(prize.y, 450. + CUP_DRAWN_HEIGHT * PRIZE_ANCHOR_RATIO);
        assert_relative_eq!(
            world.get::<&LocalTransform>(game_context.prize).unwrap().scale.x,
            PRIZE_SCALE
        );
    }

    #[test]
    pub fn narrow_viewports_tighten_the_cup_row() {
        let mut world = World::new();
        let game_context = GameContext::new(&mut world);
        layout_system(&mut world, &game_context, 600., 900.);

        let xs: Vec<f32> = game_context
            .cups
            .iter()
            .map(|&cup| translation(&world, cup).x)
            .collect();
        // spacing = 600 / 3 = 200, centred on 300
        assert_relative_eq!(xs[0], 100.);
        assert_relative_eq!(xs[1], 300.);
        assert_relative_eq!(xs[2], 500.);
    }
}
