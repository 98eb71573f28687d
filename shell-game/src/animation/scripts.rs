//! Builders for the game's two animation scripts.
//!
//! The choreography lives here as data: each builder returns the ordered
//! [`Step`] list the sequencer will execute. Random choices (which cup gets
//! the mid-shuffle reveal, which pairs the random swaps trade) are drawn when
//! the script is built; positions are resolved when each step runs, so a swap
//! always picks the cups up from wherever the earlier steps left them.

use hecs::{Entity, World};
use rand::Rng;

use super::{Axis, Step};
use crate::{
    components::LocalTransform, ShellGameError, ShellGameResult, CUP_LIFT_HEIGHT, MOVE_DURATION,
    REVEAL_PAUSE, SHUFFLE_PAUSE,
};

/// The intro shuffle: tease the prize under the middle cup, shuffle, flash
/// the prize's (random) hiding spot, then shuffle again and leave the board
/// face down.
pub fn shuffle_script(
    world: &World,
    cups: &[Entity],
    prize: Entity,
    rng: &mut impl Rng,
) -> Vec<Step> {
    let mut steps = Vec::new();
    let Some(&middle) = cups.get(cups.len() / 2) else {
        return steps;
    };
    // All cups rest on the same row, so the middle cup's y is the row's y.
    let Ok(resting_y) = world
        .get::<&LocalTransform>(middle)
        .map(|transform| transform.translation.y)
    else {
        println!("[SCRIPTS] The middle cup has no transform, skipping the shuffle");
        return steps;
    };

    // Tease: raise and lower the middle cup over the prize.
    push_lift(&mut steps, middle, resting_y);

    // Hide the prize and let the moment land.
    steps.push(Step::SetVisible {
        target: prize,
        visible: false,
    });
    steps.push(Step::Delay {
        duration: REVEAL_PAUSE,
    });

    // First round of swaps, fixed order.
    for (a, b) in [(0, 1), (1, 2), (0, 2)] {
        push_swap(&mut steps, cups, a, b);
    }

    // Flash where the prize now lives: a uniformly random cup.
    let reveal = cups[rng.gen_range(0..cups.len())];
    steps.push(Step::PlaceUnder {
        target: prize,
        anchor: reveal,
    });
    steps.push(Step::SetVisible {
        target: prize,
        visible: true,
    });
    steps.push(Step::Move {
        target: reveal,
        axis: Axis::Y,
        delta: -CUP_LIFT_HEIGHT,
        duration: MOVE_DURATION,
    });
    steps.push(Step::Delay {
        duration: REVEAL_PAUSE,
    });
    steps.push(Step::Move {
        target: reveal,
        axis: Axis::Y,
        delta: CUP_LIFT_HEIGHT,
        duration: MOVE_DURATION,
    });
    steps.push(Step::Place {
        target: reveal,
        axis: Axis::Y,
        value: resting_y,
    });
    steps.push(Step::SetVisible {
        target: prize,
        visible: false,
    });
    steps.push(Step::Delay {
        duration: SHUFFLE_PAUSE,
    });

    // Second round: six random swaps of distinct cups.
    for _ in 0..6 {
        if let Some((a, b)) = distinct_pair(rng, cups.len()) {
            push_swap(&mut steps, cups, a, b);
        }
    }

    // Two fixed swaps to finish.
    push_swap(&mut steps, cups, 0, 2);
    push_swap(&mut steps, cups, 1, 0);

    // The board ends face down, waiting for the player's pick.
    steps.push(Step::SetVisible {
        target: prize,
        visible: false,
    });

    steps
}

/// The reveal after a selection. A win lifts only the selected cup and shows
/// the prize beneath it; a loss lifts the winning cup first, then exposes the
/// rest of the board one cup at a time.
pub fn reveal_script(
    cups: &[Entity],
    prize: Entity,
    selected: usize,
    winning: usize,
) -> ShellGameResult<Vec<Step>> {
    let revealed = if selected == winning { selected } else { winning };
    let &cup = cups
        .get(revealed)
        .ok_or(ShellGameError::InvalidCupIndex {
            index: revealed,
            num_cups: cups.len(),
        })?;

    let mut steps = vec![
        Step::SetVisible {
            target: prize,
            visible: false,
        },
        Step::Delay {
            duration: REVEAL_PAUSE,
        },
        Step::Move {
            target: cup,
            axis: Axis::Y,
            delta: -CUP_LIFT_HEIGHT,
            duration: MOVE_DURATION,
        },
        Step::PlaceUnder {
            target: prize,
            anchor: cup,
        },
        Step::SetVisible {
            target: prize,
            visible: true,
        },
    ];

    if selected != winning {
        for (index, &other) in cups.iter().enumerate() {
            if index == revealed {
                continue;
            }
            steps.push(Step::Move {
                target: other,
                axis: Axis::Y,
                delta: -CUP_LIFT_HEIGHT,
                duration: MOVE_DURATION,
            });
        }
    }

    Ok(steps)
}

/// Draw two *distinct* cup indices by rejection sampling.
///
/// Returns `None` when the board has fewer than two cups, where resampling
/// would otherwise never terminate; the caller skips the swap.
pub fn distinct_pair(rng: &mut impl Rng, num_cups: usize) -> Option<(usize, usize)> {
    if num_cups < 2 {
        return None;
    }
    let a = rng.gen_range(0..num_cups);
    let mut b = rng.gen_range(0..num_cups);
    while b == a {
        b = rng.gen_range(0..num_cups);
    }
    Some((a, b))
}

/// Raise a cup by the lift height and lower it back, restoring its exact
/// resting y afterwards so float error never accumulates across rounds.
fn push_lift(steps: &mut Vec<Step>, cup: Entity, resting_y: f32) {
    steps.push(Step::Move {
        target: cup,
        axis: Axis::Y,
        delta: -CUP_LIFT_HEIGHT,
        duration: MOVE_DURATION,
    });
    steps.push(Step::Move {
        target: cup,
        axis: Axis::Y,
        delta: CUP_LIFT_HEIGHT,
        duration: MOVE_DURATION,
    });
    steps.push(Step::Place {
        target: cup,
        axis: Axis::Y,
        value: resting_y,
    });
}

fn push_swap(steps: &mut Vec<Step>, cups: &[Entity], a: usize, b: usize) {
    let (Some(&cup_a), Some(&cup_b)) = (cups.get(a), cups.get(b)) else {
        return;
    };
    steps.push(Step::Swap {
        a: cup_a,
        b: cup_b,
        duration: MOVE_DURATION,
    });
}
