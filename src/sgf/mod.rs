pub mod game;
pub mod parse;
pub mod write;
