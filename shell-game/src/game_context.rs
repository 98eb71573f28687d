use std::fmt::Debug;

use glam::vec2;
use hecs::{Entity, World};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    animation::Sequencer,
    components::{Cup, Interactive, LocalTransform, Prize, Sprite, Visible},
    ShellGameError, ShellGameResult, NUM_CUPS,
};

/// Which phase of the round the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to press play
    Title,
    /// The intro shuffle is playing; input is locked out
    Shuffling,
    /// The board is face down and the cups are tappable
    Guessing,
    /// The win or lose reveal is playing
    Revealing {
        /// Index of the cup the player picked
        selected: usize,
    },
}

/// Per-round flags, transitioned only by the game system.
///
/// Invariants: exactly one cup index is winning at a time, and
/// `cups_interactive` is true only while `animation_in_progress` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundState {
    /// The cup the prize currently sits under, redrawn at each selection
    pub winning_cup: usize,
    /// Is an animation script running?
    pub animation_in_progress: bool,
    /// Are the cups accepting taps?
    pub cups_interactive: bool,
}

/// Everything the shell game needs to run a round: handles to the entities it
/// owns, the current state, the animation sequencer and its own rng.
///
/// Fields are public in the engine's style; tests reach in to seed the rng or
/// force a state.
pub struct GameContext {
    /// Current phase of the round
    pub state: GameState,
    /// The round's mutable flags
    pub round: RoundState,
    /// The cups, in board order (index i holds `Cup { index: i }`)
    pub cups: Vec<Entity>,
    /// The prize entity
    pub prize: Entity,
    /// The play button
    pub play_button: Entity,
    /// Pause icon, top left
    pub pause_icon: Entity,
    /// Settings icon, top right
    pub settings_icon: Entity,
    /// Full-viewport background
    pub background: Entity,
    /// Executes the current animation script, if any
    pub sequencer: Sequencer,
    /// Random source for the winning cup and the shuffle's random picks
    pub rng: StdRng,
}

impl Debug for GameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameContext")
            .field("state", &self.state)
            .field("round", &self.round)
            .finish()
    }
}

// Natural texture sizes the host is expected to draw with. The simulation
// only uses them for layout arithmetic and the prize anchor.
const CUP_TEXTURE_SIZE: [f32; 2] = [256., 256.];
const PRIZE_TEXTURE_SIZE: [f32; 2] = [128., 128.];
const PLAY_BUTTON_TEXTURE_SIZE: [f32; 2] = [300., 120.];
const ICON_TEXTURE_SIZE: [f32; 2] = [96., 96.];
const BACKGROUND_TEXTURE_SIZE: [f32; 2] = [600., 600.];

impl GameContext {
    /// Populate the world with the board and return the context.
    ///
    /// Everything starts visible except for interactivity: only the play
    /// button accepts taps until the first shuffle has finished. Positions
    /// are all zero until the host reports a viewport through
    /// [`crate::systems::layout_system`].
    pub fn new(world: &mut World) -> Self {
        let background = add_sprite(world, BACKGROUND_TEXTURE_SIZE);

        // The prize is spawned before the cups: the host draws in spawn
        // order, so the cups cover it.
        let prize = add_sprite(world, PRIZE_TEXTURE_SIZE);
        world.insert_one(prize, Prize {}).unwrap();

        let cups = (0..NUM_CUPS)
            .map(|index| {
                let cup = add_sprite(world, CUP_TEXTURE_SIZE);
                world.insert_one(cup, Cup { index }).unwrap();
                cup
            })
            .collect();

        let play_button = add_sprite(world, PLAY_BUTTON_TEXTURE_SIZE);
        world.insert_one(play_button, Interactive {}).unwrap();

        let pause_icon = add_sprite(world, ICON_TEXTURE_SIZE);
        let settings_icon = add_sprite(world, ICON_TEXTURE_SIZE);

        Self {
            state: GameState::Title,
            round: RoundState::default(),
            cups,
            prize,
            play_button,
            pause_icon,
            settings_icon,
            background,
            sequencer: Sequencer::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// The entity for the cup at `index`
    pub fn cup(&self, index: usize) -> ShellGameResult<Entity> {
        self.cups
            .get(index)
            .copied()
            .ok_or(ShellGameError::InvalidCupIndex {
                index,
                num_cups: self.cups.len(),
            })
    }

    /// Which cup is `entity`, if it is one of ours?
    pub fn cup_index(&self, entity: Entity) -> Option<usize> {
        self.cups.iter().position(|&cup| cup == entity)
    }
}

fn add_sprite(world: &mut World, size: [f32; 2]) -> Entity {
    world.spawn((
        LocalTransform::default(),
        Sprite {
            size: vec2(size[0], size[1]),
        },
        Visible {},
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_has_three_face_down_cups() {
        let mut world = World::new();
        let game_context = GameContext::new(&mut world);

        assert_eq!(game_context.cups.len(), NUM_CUPS);
        assert_eq!(game_context.state, GameState::Title);
        assert!(!game_context.round.animation_in_progress);
        assert!(!game_context.round.cups_interactive);

        for (index, &cup) in game_context.cups.iter().enumerate() {
            assert_eq!(world.get::<&Cup>(cup).unwrap().index, index);
            assert!(world.get::<&Visible>(cup).is_ok());
            // Cups start locked; only the play button is tappable.
            assert!(world.get::<&Interactive>(cup).is_err());
        }
        assert!(world
            .get::<&Interactive>(game_context.play_button)
            .is_ok());
        assert!(world.get::<&Prize>(game_context.prize).is_ok());

        assert_eq!(game_context.cup_index(game_context.cups[2]), Some(2));
        assert_eq!(game_context.cup_index(game_context.prize), None);
        assert!(matches!(
            game_context.cup(NUM_CUPS),
            Err(ShellGameError::InvalidCupIndex { .. })
        ));
    }
}
