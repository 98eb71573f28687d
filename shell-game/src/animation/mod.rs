#![allow(missing_docs)]
pub mod scripts;
pub mod sequencer;
pub mod tween;

pub use sequencer::{Sequencer, Step};
pub use tween::{Axis, Tween};
