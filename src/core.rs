pub mod definitions;
pub mod engine;
pub mod error;
pub mod game;
pub mod utils;
