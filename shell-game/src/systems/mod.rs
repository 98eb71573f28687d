#![allow(missing_docs)]
pub mod animation;
pub mod game;
pub mod layout;

pub use animation::animation_system;
pub use game::{game_system, resolve_selection};
pub use layout::layout_system;
