#![allow(missing_docs)]
pub mod cup;
pub mod interactive;
pub mod local_transform;
pub mod prize;
pub mod sprite;
pub mod visible;

pub use cup::Cup;
pub use interactive::Interactive;
pub use local_transform::LocalTransform;
pub use prize::Prize;
pub use sprite::Sprite;
pub use visible::Visible;
