use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// Deck extends much of Hand functionality, with the ability to remove cards
/// from itself. the caller supplies the random source so deals can be seeded.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::full())
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a uniformly random card from the deck
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        assert!(self.0.size() > 0);
        let i = rng.random_range(0..self.0.size());
        let card = self.0.into_iter().nth(i).expect("index within deck");
        self.0.remove(card);
        card
    }

    /// partition the full deck into four hands of thirteen
    pub fn deal(rng: &mut impl Rng) -> [Hand; crate::N] {
        let mut deck = Self::new();
        let mut hands = [Hand::empty(); crate::N];
        for n in 0..crate::N * crate::TRICKS {
            hands[n % crate::N].insert(deck.draw(rng));
        }
        hands
    }
}
