use super::action::Strain;
use crate::cards::suit::Suit;
use serde::Deserialize;
use serde::Serialize;

/// doubling state of the standing bid. recorded on the contract but, in this
/// simplified payoff scheme, never scales the score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Doubling {
    #[default]
    Undoubled,
    Doubled,
    Redoubled,
}

/// what the auction settled on: the last (highest) bid, who made it, and any
/// doubling carried over. the declarer is the player who named the final
/// level+strain, unique because bids strictly increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub declarer: usize,
    pub level: u8,
    pub strain: Strain,
    pub doubling: Doubling,
}

impl Contract {
    /// tricks the declaring side must take
    pub fn target(&self) -> u8 {
        self.level + 6
    }
    pub fn trump(&self) -> Option<Suit> {
        self.strain.suit()
    }
    pub fn dummy(&self) -> usize {
        (self.declarer + 2) % crate::N
    }
    /// declarer's left-hand opponent leads the first trick
    pub fn leader(&self) -> usize {
        (self.declarer + 1) % crate::N
    }
    /// 0 for the N-S pair, 1 for E-W
    pub fn pair(&self) -> usize {
        self.declarer % 2
    }
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let doubling = match self.doubling {
            Doubling::Undoubled => "",
            Doubling::Doubled => "x",
            Doubling::Redoubled => "xx",
        };
        write!(f, "{}{}{} by P{}", self.level, self.strain, doubling, self.declarer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seating() {
        let contract = Contract {
            declarer: 3,
            level: 4,
            strain: Strain::Heart,
            doubling: Doubling::Doubled,
        };
        assert_eq!(contract.target(), 10);
        assert_eq!(contract.trump(), Some(Suit::Heart));
        assert_eq!(contract.dummy(), 1);
        assert_eq!(contract.leader(), 0);
        assert_eq!(contract.pair(), 1);
        assert_eq!(contract.to_string(), "4Hx by P3");
    }

    #[test]
    fn notrump_has_no_trump() {
        let contract = Contract {
            declarer: 0,
            level: 3,
            strain: Strain::NoTrump,
            doubling: Doubling::Undoubled,
        };
        assert_eq!(contract.trump(), None);
    }
}
