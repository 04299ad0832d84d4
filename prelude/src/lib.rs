//! Board geometry for a game of dots: region outlines, player styles, and the seam to the engine
//! deciding the turns.

pub mod config;
pub mod draw;
pub mod game;

pub use config::RenderConfig;
pub use game::*;
