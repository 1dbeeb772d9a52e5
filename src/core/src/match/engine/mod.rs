pub mod ball;
pub mod context;
pub mod decision;
pub mod engine;
pub mod events;
pub mod field;
pub mod geometry;
pub mod player;
pub mod possession;

pub use ball::*;
pub use context::*;
pub use decision::*;
pub use engine::*;
pub use events::*;
pub use field::*;
pub use player::*;
pub use possession::*;
