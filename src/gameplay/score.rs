use super::round::Round;
use crate::Payoff;

/// simplified payoff scheme: making the contract earns the pair its trick
/// count plus a flat bonus, going down scores tricks minus the target, and
/// the defending pair always keeps its own trick count. doubling and
/// vulnerability are tracked on the round but never scale the payoff; full
/// duplicate scoring tables are out of scope.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    pub bonus: Payoff,
}

impl Default for Scorer {
    fn default() -> Self {
        Self { bonus: 2 }
    }
}

impl Scorer {
    /// per-player payoffs, meaningful once the round is over. partners
    /// always receive the identical pair payoff; a passed-out round is
    /// all zeros.
    pub fn payoffs(&self, round: &Round) -> [Payoff; crate::N] {
        let Some(contract) = round.contract() else {
            return [0; crate::N];
        };
        let tricks = round.tricks();
        let made = tricks[contract.pair()] as Payoff;
        let target = contract.target() as Payoff;
        let declarers = if made >= target {
            made + self.bonus
        } else {
            made - target
        };
        let defenders = tricks[1 - contract.pair()] as Payoff;
        std::array::from_fn(|p| {
            if p % 2 == contract.pair() {
                declarers
            } else {
                defenders
            }
        })
    }
}
