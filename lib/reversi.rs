mod apply;
mod board;
mod direction;
mod draw;
mod game;
mod outcome;
mod player;
mod position;
mod rules;
mod score;
mod setup;

pub use apply::*;
pub use board::*;
pub use direction::*;
pub use draw::*;
pub use game::*;
pub use outcome::*;
pub use player::*;
pub use position::*;
pub use rules::*;
pub use score::*;
pub use setup::*;
