pub mod behaviours;
pub mod player;

pub use behaviours::*;
pub use player::*;
