pub mod ball;
pub mod events;

pub use ball::*;
