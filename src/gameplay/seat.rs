use crate::cards::card::Card;
use crate::cards::hand::Hand;

/// one player's position and remaining cards. the hand only ever shrinks;
/// it is empty once the round is over.
#[derive(Debug, Clone, Copy)]
pub struct Seat {
    position: usize,
    hand: Hand,
}

impl Seat {
    pub fn new(position: usize, hand: Hand) -> Self {
        assert!(position < crate::N);
        Self { position, hand }
    }
    pub fn position(&self) -> usize {
        self.position
    }
    pub fn hand(&self) -> Hand {
        self.hand
    }
    /// 0 for N-S, 1 for E-W
    pub fn pair(&self) -> usize {
        self.position % 2
    }
    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }
    pub fn remove(&mut self, card: Card) {
        assert!(self.holds(&card));
        self.hand.remove(card);
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{} {}", self.position, self.hand)
    }
}
