use std::{collections::VecDeque, time::Duration};

use hecs::{Entity, World};

use super::tween::{Axis, Tween};
use crate::{
    components::{LocalTransform, Sprite, Visible},
    PRIZE_ANCHOR_RATIO,
};

/// A single entry in an animation script.
///
/// Steps are plain data: a script is a `Vec<Step>` that tests can build and
/// inspect without running any clock. The timed variants read the entities'
/// positions when the step *starts*, not when the script is built, so a swap
/// always moves a cup from wherever the previous steps left it.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Tween one coordinate of `target` by `delta`, relative to wherever the
    /// entity is when the step starts
    Move {
        /// Entity to move
        target: Entity,
        /// Coordinate to move along
        axis: Axis,
        /// Signed distance to travel, in pixels
        delta: f32,
        /// How long the movement takes
        duration: Duration,
    },
    /// Tween `a` and `b` to each other's starting x at the same time. This is
    /// the only step that moves two entities, and it is still a single step:
    /// the sequence never runs two steps concurrently.
    Swap {
        /// One entity of the pair
        a: Entity,
        /// The other entity of the pair
        b: Entity,
        /// How long the crossing takes
        duration: Duration,
    },
    /// Do nothing for a fixed time
    Delay {
        /// How long to wait
        duration: Duration,
    },
    /// Show or hide `target` immediately
    SetVisible {
        /// Entity to show or hide
        target: Entity,
        /// `true` to show, `false` to hide
        visible: bool,
    },
    /// Set one coordinate of `target` immediately
    Place {
        /// Entity to position
        target: Entity,
        /// Coordinate to write
        axis: Axis,
        /// The new value, in pixels
        value: f32,
    },
    /// Snap `target` to its resting spot beneath `anchor` immediately
    PlaceUnder {
        /// Entity to position
        target: Entity,
        /// The cup to sit beneath
        anchor: Entity,
    },
}

/// One in-flight coordinate tween.
#[derive(Debug)]
struct Motion {
    target: Entity,
    axis: Axis,
    tween: Tween,
}

#[derive(Debug)]
enum ActiveStep {
    Motions(Vec<Motion>),
    Delay { remaining: Duration },
}

/// Executes an ordered list of [`Step`]s against the world, strictly one step
/// at a time.
///
/// Each call to [`Sequencer::tick`] applies any instantaneous steps at the
/// head of the queue, then advances at most one timed step by `dt`. A timed
/// step must fully complete before the next step begins. Steps whose entities
/// have gone missing are skipped and the sequence continues.
#[derive(Debug, Default)]
pub struct Sequencer {
    pending: VecDeque<Step>,
    active: Option<ActiveStep>,
}

impl Sequencer {
    /// Start executing `steps`, replacing anything still queued.
    ///
    /// The game system only begins a script while the sequencer is idle;
    /// a running script is never cancelled mid-flight.
    pub fn begin(&mut self, steps: Vec<Step>) {
        self.pending = steps.into();
        self.active = None;
    }

    /// Is there nothing queued and nothing in flight?
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.pending.is_empty()
    }

    /// Advance the script by `dt`
    pub fn tick(&mut self, world: &mut World, dt: Duration) {
        if self.active.is_none() {
            self.advance(world);
        }

        let Some(active) = &mut self.active else {
            return;
        };

        let finished = match active {
            ActiveStep::Delay { remaining } => {
                *remaining = remaining.saturating_sub(dt);
                remaining.is_zero()
            }
            ActiveStep::Motions(motions) => {
                let mut finished = true;
                for motion in motions.iter_mut() {
                    let value = motion.tween.tick(dt);
                    if let Ok(mut transform) = world.get::<&mut LocalTransform>(motion.target) {
                        write_axis(&mut transform, motion.axis, value);
                    }
                    finished &= motion.tween.is_complete();
                }
                finished
            }
        };

        if finished {
            self.active = None;
            // Flush any instantaneous steps that follow, and arm the next
            // timed step so it starts sampling from the next tick. The
            // remainder of this tick's dt is not carried over.
            self.advance(world);
        }
    }

    /// Pop steps off the queue, applying instantaneous ones, until a timed
    /// step is armed or the queue runs dry.
    fn advance(&mut self, world: &mut World) {
        while let Some(step) = self.pending.pop_front() {
            if let Some(active) = start_step(world, step) {
                self.active = Some(active);
                return;
            }
        }
    }
}

/// Begin a single step. Returns the in-flight state for timed steps, `None`
/// once an instantaneous step has been applied (or a broken step skipped).
fn start_step(world: &mut World, step: Step) -> Option<ActiveStep> {
    match step {
        Step::Move {
            target,
            axis,
            delta,
            duration,
        } => {
            let Ok(transform) = world.get::<&LocalTransform>(target) else {
                println!("[SEQUENCER] Tried to move {target:?} but it has no transform, skipping");
                return None;
            };
            let start = read_axis(&transform, axis);
            drop(transform);
            Some(ActiveStep::Motions(vec![Motion {
                target,
                axis,
                tween: Tween::new(start, start + delta, duration),
            }]))
        }
        Step::Swap { a, b, duration } => {
            let (Ok(transform_a), Ok(transform_b)) = (
                world.get::<&LocalTransform>(a),
                world.get::<&LocalTransform>(b),
            ) else {
                println!("[SEQUENCER] Tried to swap {a:?} and {b:?} but a transform is missing, skipping");
                return None;
            };
            let start_a = transform_a.translation.x;
            let start_b = transform_b.translation.x;
            drop(transform_a);
            drop(transform_b);
            Some(ActiveStep::Motions(vec![
                Motion {
                    target: a,
                    axis: Axis::X,
                    tween: Tween::new(start_a, start_b, duration),
                },
                Motion {
                    target: b,
                    axis: Axis::X,
                    tween: Tween::new(start_b, start_a, duration),
                },
            ]))
        }
        Step::Delay { duration } => {
            if duration.is_zero() {
                return None;
            }
            Some(ActiveStep::Delay {
                remaining: duration,
            })
        }
        Step::SetVisible { target, visible } => {
            if visible {
                if world.insert_one(target, Visible {}).is_err() {
                    println!("[SEQUENCER] Tried to show {target:?} but it no longer exists");
                }
            } else {
                // Hiding something already hidden is fine.
                let _ = world.remove_one::<Visible>(target);
            }
            None
        }
        Step::Place {
            target,
            axis,
            value,
        } => {
            if let Ok(mut transform) = world.get::<&mut LocalTransform>(target) {
                write_axis(&mut transform, axis, value);
            } else {
                println!("[SEQUENCER] Tried to place {target:?} but it has no transform, skipping");
            }
            None
        }
        Step::PlaceUnder { target, anchor } => {
            if place_under(world, target, anchor).is_none() {
                println!(
                    "[SEQUENCER] Tried to place {target:?} under {anchor:?} but a component is missing, skipping"
                );
            }
            None
        }
    }
}

/// Snap `target` to the prize's resting spot beneath `anchor`: centred on the
/// anchor's x, hanging [`PRIZE_ANCHOR_RATIO`] of its drawn height below its
/// centre. Also used by the layout system to seat the prize on a resize.
pub(crate) fn place_under(world: &mut World, target: Entity, anchor: Entity) -> Option<()> {
    let anchor_transform = world.get::<&LocalTransform>(anchor).ok()?;
    let anchor_sprite = world.get::<&Sprite>(anchor).ok()?;
    let x = anchor_transform.translation.x;
    let y = anchor_transform.translation.y
        + anchor_sprite.drawn_height(&anchor_transform) * PRIZE_ANCHOR_RATIO;
    drop(anchor_transform);
    drop(anchor_sprite);

    let mut transform = world.get::<&mut LocalTransform>(target).ok()?;
    transform.translation.x = x;
    transform.translation.y = y;
    Some(())
}

fn read_axis(transform: &LocalTransform, axis: Axis) -> f32 {
    match axis {
        Axis::X => transform.translation.x,
        Axis::Y => transform.translation.y,
    }
}

fn write_axis(transform: &mut LocalTransform, axis: Axis, value: f32) {
    match axis {
        Axis::X => transform.translation.x = value,
        Axis::Y => transform.translation.y = value,
    }
}
