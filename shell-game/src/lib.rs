#![deny(missing_docs)]

//! A three-cup shell game, modelled as a headless simulation.
//!
//! The crate owns the game state: three cups, a prize hidden beneath one of
//! them, a scripted shuffle animation and the win/lose reveal. It does *not*
//! own a renderer or a clock. The host draws whatever the entity state says,
//! delivers pointer taps through [`contexts::InputContext`], reports viewport
//! changes through [`systems::layout_system`], and advances the simulation by
//! calling [`tick`] once per frame with the elapsed time.
//!
//! All animation is driven by [`animation::Tween`] values sampled against the
//! host's tick, so every timed behaviour in the crate can be exercised in
//! tests with a synthetic clock.

pub use glam;
pub use hecs;

pub use error::ShellGameError;
pub use game_context::{GameContext, GameState, RoundState};

/// Timed interpolation primitives and the step sequencer
pub mod animation;
/// Components are data attached to entities in the game world
pub mod components;
/// Contexts are wrappers around state shared with the host
pub mod contexts;
mod error;
mod game_context;
/// Systems are functions called each tick to update the simulation
pub mod systems;

use std::time::Duration;

use contexts::InputContext;
use hecs::World;
use systems::{animation_system, game_system};

/// Shell game result type
pub type ShellGameResult<T> = std::result::Result<T, ShellGameError>;

/// Number of cups on the board
pub const NUM_CUPS: usize = 3;

/// How far a cup travels upwards when lifted, in pixels. Screen space grows
/// downward, so a lifted cup's y is its resting y minus this.
pub const CUP_LIFT_HEIGHT: f32 = 120.;

/// Duration of a single lift, lower or swap movement
pub const MOVE_DURATION: Duration = Duration::from_millis(350);

/// Pause either side of a mid-shuffle prize reveal
pub const REVEAL_PAUSE: Duration = Duration::from_millis(200);

/// Pause between the mid-shuffle reveal and the second round of swaps
pub const SHUFFLE_PAUSE: Duration = Duration::from_millis(400);

/// Fraction of a cup's drawn height at which the prize sits beneath it
pub const PRIZE_ANCHOR_RATIO: f32 = 0.45;

/// Advance the simulation by one frame.
///
/// Runs the game state machine over the input gathered since the last tick,
/// then advances any running animation script by `dt`.
pub fn tick(
    world: &mut World,
    game_context: &mut GameContext,
    input_context: &mut InputContext,
    dt: Duration,
) {
    game_system(world, game_context, input_context);
    animation_system(world, game_context, dt);
}
