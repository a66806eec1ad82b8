pub mod board;
pub mod engine;
pub mod error;
pub mod session;

pub use board::{Board, Coord, Player};
pub use engine::{choose_move, Choice};
pub use error::Error;
