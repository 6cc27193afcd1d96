/// the denomination a bid names: one of the four suits as trump, or no trump.
/// ordering breaks ties between bids at the same level.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strain {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
    NoTrump = 4,
}

impl Strain {
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Strain::NoTrump => None,
            strain => Some(Suit::from(u8::from(*strain))),
        }
    }
}

impl From<u8> for Strain {
    fn from(n: u8) -> Strain {
        match n {
            0 => Strain::Club,
            1 => Strain::Diamond,
            2 => Strain::Heart,
            3 => Strain::Spade,
            4 => Strain::NoTrump,
            _ => panic!("Invalid strain u8: {}", n),
        }
    }
}
impl From<Strain> for u8 {
    fn from(s: Strain) -> u8 {
        s as u8
    }
}

impl Display for Strain {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Strain::Club => write!(f, "C"),
            Strain::Diamond => write!(f, "D"),
            Strain::Heart => write!(f, "H"),
            Strain::Spade => write!(f, "S"),
            Strain::NoTrump => write!(f, "NT"),
        }
    }
}

/// the closed set of game actions. NoBid is an encoding placeholder that the
/// judger never offers; it pads the id space so the bijection covers 0..91.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    NoBid,
    Bid(u8, Strain),
    Pass,
    Double,
    Redouble,
    Play(Card),
}

impl Action {
    /// size of the id space; the adapter's action selector must match it
    pub const COUNT: usize = 91;

    const FIRST_BID: u8 = 1;
    const PASS: u8 = 36;
    const DOUBLE: u8 = 37;
    const REDOUBLE: u8 = 38;
    const FIRST_PLAY: u8 = 39;

    pub fn is_call(&self) -> bool {
        !matches!(self, Action::Play(_))
    }
}

/// u8 isomorphism
/// stable global numbering: the 39 call ids sit in a contiguous block
/// below the 52 card-play ids.
impl From<Action> for u8 {
    fn from(action: Action) -> u8 {
        match action {
            Action::NoBid => 0,
            Action::Bid(level, strain) => {
                Action::FIRST_BID + (level - 1) * 5 + u8::from(strain)
            }
            Action::Pass => Action::PASS,
            Action::Double => Action::DOUBLE,
            Action::Redouble => Action::REDOUBLE,
            Action::Play(card) => Action::FIRST_PLAY + u8::from(card),
        }
    }
}
impl TryFrom<u8> for Action {
    type Error = GameError;
    fn try_from(n: u8) -> std::result::Result<Self, Self::Error> {
        match n {
            0 => Ok(Action::NoBid),
            1..=35 => Ok(Action::Bid(1 + (n - 1) / 5, Strain::from((n - 1) % 5))),
            36 => Ok(Action::Pass),
            37 => Ok(Action::Double),
            38 => Ok(Action::Redouble),
            39..=90 => Ok(Action::Play(Card::from(n - Action::FIRST_PLAY))),
            _ => Err(GameError::IllegalAction(n)),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Action::NoBid => write!(f, "--"),
            Action::Bid(level, strain) => write!(f, "{}{}", level, strain),
            Action::Pass => write!(f, "PASS"),
            Action::Double => write!(f, "DBL"),
            Action::Redouble => write!(f, "RDBL"),
            Action::Play(card) => write!(f, "{}", card),
        }
    }
}

use super::error::GameError;
use crate::cards::card::Card;
use crate::cards::suit::Suit;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
