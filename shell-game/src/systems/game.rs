use hecs::{Entity, World};
use rand::Rng;

use crate::{
    animation::scripts::{reveal_script, shuffle_script},
    components::{Cup, Interactive},
    contexts::InputContext,
    GameContext, GameState, ShellGameResult,
};

/// Game system
/// Drains the tick's pointer taps, works out whether the round moves to a new
/// state, and applies the transition's side effects.
pub fn game_system(
    world: &mut World,
    game_context: &mut GameContext,
    input_context: &mut InputContext,
) {
    let taps = input_context.drain_taps();
    if let Some(next_state) = run(world, game_context, &taps) {
        transition(world, game_context, next_state);
    }
}

fn run(world: &World, game_context: &GameContext, taps: &[Entity]) -> Option<GameState> {
    match game_context.state {
        GameState::Title => {
            if taps.contains(&game_context.play_button)
                && !game_context.round.animation_in_progress
            {
                return Some(GameState::Shuffling);
            }
        }
        GameState::Shuffling => {
            if game_context.sequencer.is_idle() {
                return Some(GameState::Guessing);
            }
        }
        GameState::Guessing => {
            for &tap in taps {
                // Taps only count on entities that are currently tappable.
                if world.get::<&Interactive>(tap).is_err() {
                    continue;
                }
                if let Ok(cup) = world.get::<&Cup>(tap) {
                    return Some(GameState::Revealing {
                        selected: cup.index,
                    });
                }
                if tap == game_context.play_button {
                    // Pressing play while the board waits for a guess starts
                    // the shuffle over.
                    return Some(GameState::Shuffling);
                }
            }
        }
        GameState::Revealing { .. } => {
            if game_context.sequencer.is_idle() {
                return Some(GameState::Title);
            }
        }
    }

    None
}

fn transition(world: &mut World, game_context: &mut GameContext, next_state: GameState) {
    let current_state = &game_context.state;
    match (current_state, &next_state) {
        (GameState::Title | GameState::Guessing, GameState::Shuffling) => {
            println!("[SHELL_GAME] Shuffling the board");
            set_cups_interactive(world, &game_context.cups, false);
            game_context.round.cups_interactive = false;
            game_context.round.animation_in_progress = true;
            let script = shuffle_script(
                world,
                &game_context.cups,
                game_context.prize,
                &mut game_context.rng,
            );
            game_context.sequencer.begin(script);
        }
        (GameState::Shuffling, GameState::Guessing) => {
            set_cups_interactive(world, &game_context.cups, true);
            game_context.round.cups_interactive = true;
            game_context.round.animation_in_progress = false;
        }
        (GameState::Guessing, GameState::Revealing { selected }) => {
            let winning = game_context.rng.gen_range(0..game_context.cups.len());
            if let Err(error) = resolve_selection(world, game_context, *selected, winning) {
                println!("[SHELL_GAME] Could not resolve the selection: {error}");
                return;
            }
        }
        (GameState::Revealing { .. }, GameState::Title) => {
            game_context.round.animation_in_progress = false;
        }
        _ => panic!(
            "Invalid state transition {:?} -> {:?}",
            current_state, next_state
        ),
    }

    game_context.state = next_state;
}

/// Lock the board and start the reveal for `selected` against `winning`.
///
/// Split out from [`transition`] (which draws `winning` from the context's
/// rng) so the win and lose paths can be exercised deterministically.
pub fn resolve_selection(
    world: &mut World,
    game_context: &mut GameContext,
    selected: usize,
    winning: usize,
) -> ShellGameResult<()> {
    let script = reveal_script(&game_context.cups, game_context.prize, selected, winning)?;

    // Interactivity drops before anything animates so double taps are moot.
    set_cups_interactive(world, &game_context.cups, false);
    game_context.round.cups_interactive = false;
    game_context.round.animation_in_progress = true;
    game_context.round.winning_cup = winning;

    if selected == winning {
        println!("[SHELL_GAME] Cup {selected} was the winner!");
    } else {
        println!("[SHELL_GAME] Cup {selected} was empty - the prize was under cup {winning}");
    }
    game_context.sequencer.begin(script);

    Ok(())
}

fn set_cups_interactive(world: &mut World, cups: &[Entity], enabled: bool) {
    for &cup in cups {
        if enabled {
            if world.insert_one(cup, Interactive {}).is_err() {
                println!("[SHELL_GAME] Tried to make {cup:?} tappable but it no longer exists");
            }
        } else {
            let _ = world.remove_one::<Interactive>(cup);
        }
    }
}
