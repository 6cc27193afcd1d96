pub mod action;
pub use action::*;

pub mod contract;
pub use contract::*;

pub mod error;
pub use error::*;

pub mod game;
pub use game::*;

pub mod judger;
pub use judger::*;

pub mod observe;
pub use observe::*;

pub mod round;
pub use round::*;

pub mod score;
pub use score::*;

pub mod seat;
pub use seat::*;

pub mod tray;
pub use tray::*;

pub mod turn;
pub use turn::*;
