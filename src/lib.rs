pub mod cards;
pub mod gameplay;

pub type Payoff = i16;

/// seats at the table
pub const N: usize = 4;
/// tricks in a completed deal
pub const TRICKS: usize = 13;
