use super::action::Action;
use super::judger::Judger;
use super::round::Round;

/// fixed-shape numeric encoding of a round from one player's point of view,
/// plus the judger's legal set for the player to act. every block is always
/// emitted; blocks that do not apply to the current phase stay all-zero, so
/// the vector length never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    obs: Vec<u8>,
    legal: Vec<Action>,
}

impl Observation {
    /// hands + trick + hidden + vulnerability + dealer + actor
    /// + bidding-over flag + call history + last call + level + strain
    pub const SIZE: usize =
        crate::N * 52 + crate::N * 52 + 52 + 2 + crate::N + crate::N + 1 + Self::CALLS + Self::LAST + 8 + 5;
    /// call history slots; calls beyond this are silently truncated
    const CALLS: usize = 40;
    /// one-hot over {NoBid, the 35 bids, Pass, Double, Redouble}
    const LAST: usize = 39;

    pub fn obs(&self) -> &[u8] {
        &self.obs
    }
    pub fn legal(&self) -> &[Action] {
        &self.legal
    }
    /// boolean mask over the full action-id space, for the adapter
    pub fn mask(&self) -> [bool; Action::COUNT] {
        let mut mask = [false; Action::COUNT];
        for action in self.legal.iter() {
            mask[u8::from(*action) as usize] = true;
        }
        mask
    }
}

impl From<(&Round, usize)> for Observation {
    fn from((round, viewer): (&Round, usize)) -> Self {
        assert!(viewer < crate::N);
        let mut obs = Vec::with_capacity(Self::SIZE);
        Self::hands(round, viewer, &mut obs);
        Self::trick(round, &mut obs);
        Self::hidden(round, viewer, &mut obs);
        Self::table(round, &mut obs);
        Self::auction(round, &mut obs);
        Self::contract(round, &mut obs);
        assert!(obs.len() == Self::SIZE);
        Self {
            obs,
            legal: Judger::legal_actions(round),
        }
    }
}

impl Observation {
    /// the viewer's own hand always; once the auction closes the dummy is
    /// public, and the declarer is visible to the dummy symmetrically.
    /// all-zero once the round is over.
    fn hands(round: &Round, viewer: usize, obs: &mut Vec<u8>) {
        let mut rep = [[0u8; 52]; crate::N];
        if !round.is_over() {
            for card in round.hand(viewer) {
                rep[viewer][u8::from(card) as usize] = 1;
            }
            if let (Some(declarer), Some(dummy)) = (round.declarer(), round.dummy()) {
                let shown = if viewer == dummy { declarer } else { dummy };
                for card in round.hand(shown) {
                    rep[shown][u8::from(card) as usize] = 1;
                }
            }
        }
        for row in rep {
            obs.extend(row);
        }
    }

    /// who has played what in the trick in progress. a completed trick
    /// stays on the table until the next lead.
    fn trick(round: &Round, obs: &mut Vec<u8>) {
        let mut rep = [[0u8; 52]; crate::N];
        if round.is_bidding_over() && !round.is_over() {
            for m in round.trick() {
                if let Some(card) = m.card() {
                    rep[m.player][u8::from(card) as usize] = 1;
                }
            }
        }
        for row in rep {
            obs.extend(row);
        }
    }

    /// union of the hands the viewer cannot see, recomputed each call
    fn hidden(round: &Round, viewer: usize, obs: &mut Vec<u8>) {
        let mut rep = [0u8; 52];
        if !round.is_over() {
            for seat in 0..crate::N {
                if !Self::visible(round, viewer, seat) {
                    for card in round.hand(seat) {
                        rep[u8::from(card) as usize] = 1;
                    }
                }
            }
        }
        obs.extend(rep);
    }
    fn visible(round: &Round, viewer: usize, seat: usize) -> bool {
        seat == viewer
            || round.dummy() == Some(seat)
            || (round.declarer() == Some(seat) && round.dummy() == Some(viewer))
    }

    /// vulnerability, dealer one-hot, current-player one-hot, bidding-over
    fn table(round: &Round, obs: &mut Vec<u8>) {
        obs.extend(round.tray().vul().map(|v| v as u8));
        let mut dealer = [0u8; crate::N];
        dealer[round.tray().dealer()] = 1;
        obs.extend(dealer);
        let mut actor = [0u8; crate::N];
        actor[round.actor()] = 1;
        obs.extend(actor);
        obs.push(round.is_bidding_over() as u8);
    }

    /// raw call ids slotted from the dealer's seat, then a one-hot of the
    /// latest call (NoBid before any call, cleared once a card is played)
    fn auction(round: &Round, obs: &mut Vec<u8>) {
        let mut history = [0u8; Self::CALLS];
        let mut slot = round.tray().dealer();
        for m in round.sheet().iter().take_while(|m| m.is_call()) {
            if slot >= Self::CALLS {
                break;
            }
            history[slot] = u8::from(m.action);
            slot += 1;
        }
        obs.extend(history);
        let mut last = [0u8; Self::LAST];
        match round.sheet().last() {
            None => last[u8::from(Action::NoBid) as usize] = 1,
            Some(m) if m.is_call() => last[u8::from(m.action) as usize] = 1,
            Some(_) => (),
        }
        obs.extend(last);
    }

    /// level and strain one-hots, shown only between the close of the
    /// auction and the opening lead
    fn contract(round: &Round, obs: &mut Vec<u8>) {
        let mut level = [0u8; 8];
        let mut strain = [0u8; 5];
        if round.is_bidding_over() && !round.is_over() && round.plays() == 0 {
            if let Some(contract) = round.contract() {
                level[contract.level as usize] = 1;
                strain[u8::from(contract.strain) as usize] = 1;
            }
        }
        obs.extend(level);
        obs.extend(strain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::cards::suit::Suit;
    use crate::gameplay::action::Strain;
    use crate::gameplay::tray::Tray;

    fn suited() -> [Hand; crate::N] {
        std::array::from_fn(|i| Hand::from(u64::from(Suit::from(i as u8))))
    }
    fn north_deals() -> Round {
        Round::new(Tray::new(0, [true, false]), suited()).unwrap()
    }
    fn block(obs: &Observation, start: usize, len: usize) -> &[u8] {
        &obs.obs()[start..start + len]
    }

    #[test]
    fn size_is_constant_across_phases() {
        let mut round = north_deals();
        assert_eq!(Observation::SIZE, 571);
        assert_eq!(Observation::from((&round, 0)).obs().len(), Observation::SIZE);
        round.apply(Action::Bid(1, Strain::Club)).unwrap();
        assert_eq!(Observation::from((&round, 1)).obs().len(), Observation::SIZE);
        round.apply(Action::Pass).unwrap();
        round.apply(Action::Pass).unwrap();
        round.apply(Action::Pass).unwrap();
        assert_eq!(Observation::from((&round, 2)).obs().len(), Observation::SIZE);
    }

    #[test]
    fn extraction_is_deterministic() {
        let mut round = north_deals();
        round.apply(Action::Bid(2, Strain::Spade)).unwrap();
        let a = Observation::from((&round, 3));
        let b = Observation::from((&round, 3));
        assert_eq!(a, b);
    }

    #[test]
    fn own_hand_only_while_bidding() {
        let round = north_deals();
        let obs = Observation::from((&round, 1));
        let hands = block(&obs, 0, crate::N * 52);
        assert_eq!(hands[52..104].iter().sum::<u8>(), 13);
        assert_eq!(hands[0..52].iter().sum::<u8>(), 0);
        assert_eq!(hands[104..208].iter().sum::<u8>(), 0);
        let hidden = block(&obs, 2 * crate::N * 52, 52);
        assert_eq!(hidden.iter().sum::<u8>(), 39);
    }

    #[test]
    fn dummy_is_public_once_bidding_closes() {
        let mut round = north_deals();
        round.apply(Action::Bid(1, Strain::Club)).unwrap();
        round.apply(Action::Pass).unwrap();
        round.apply(Action::Pass).unwrap();
        round.apply(Action::Pass).unwrap();
        // North declares; South is dummy, visible to the defender East
        let obs = Observation::from((&round, 1));
        let hands = block(&obs, 0, crate::N * 52);
        assert_eq!(hands[52..104].iter().sum::<u8>(), 13);
        assert_eq!(hands[104..156].iter().sum::<u8>(), 13);
        assert_eq!(hands[0..52].iter().sum::<u8>(), 0);
        let hidden = block(&obs, 2 * crate::N * 52, 52);
        assert_eq!(hidden.iter().sum::<u8>(), 26);
        // the dummy sees declarer instead of itself twice
        let obs = Observation::from((&round, 2));
        let hands = block(&obs, 0, crate::N * 52);
        assert_eq!(hands[0..52].iter().sum::<u8>(), 13);
        assert_eq!(hands[104..156].iter().sum::<u8>(), 13);
        let hidden = block(&obs, 2 * crate::N * 52, 52);
        assert_eq!(hidden.iter().sum::<u8>(), 26);
    }

    #[test]
    fn table_blocks() {
        let round = north_deals();
        let obs = Observation::from((&round, 0));
        let start = 2 * crate::N * 52 + 52;
        assert_eq!(block(&obs, start, 2), &[1, 0]);
        assert_eq!(block(&obs, start + 2, crate::N), &[1, 0, 0, 0]);
        assert_eq!(block(&obs, start + 2 + crate::N, crate::N), &[1, 0, 0, 0]);
        assert_eq!(block(&obs, start + 2 + 2 * crate::N, 1), &[0]);
    }

    #[test]
    fn call_history_aligns_to_the_dealer_seat() {
        let mut round = Round::new(Tray::from(2), suited()).unwrap();
        round.apply(Action::Pass).unwrap();
        round.apply(Action::Bid(1, Strain::Heart)).unwrap();
        let obs = Observation::from((&round, 0));
        let start = 2 * crate::N * 52 + 52 + 2 + 2 * crate::N + 1;
        let history = block(&obs, start, 40);
        // East dealt: slot 1 holds East's pass, slot 2 South's 1H
        assert_eq!(history[0], 0);
        assert_eq!(history[1], u8::from(Action::Pass));
        assert_eq!(history[2], u8::from(Action::Bid(1, Strain::Heart)));
        assert_eq!(history[3], 0);
    }

    #[test]
    fn call_history_truncates_past_forty() {
        // bids climb through the first 21 ids, each answered by one pass, so
        // the auction stays open across 42 calls
        let mut round = north_deals();
        for id in 1..=21u8 {
            round.apply(Action::try_from(id).unwrap()).unwrap();
            round.apply(Action::Pass).unwrap();
        }
        assert_eq!(round.sheet().len(), 42);
        assert!(!round.is_bidding_over());
        let obs = Observation::from((&round, 0));
        assert_eq!(obs.obs().len(), Observation::SIZE);
        let start = 2 * crate::N * 52 + 52 + 2 + 2 * crate::N + 1;
        let history = block(&obs, start, 40);
        // the first forty calls fill the block; the last two fall off
        for i in 0..40 {
            match i % 2 {
                0 => assert_eq!(history[i], 1 + (i as u8) / 2),
                _ => assert_eq!(history[i], u8::from(Action::Pass)),
            }
        }
    }

    #[test]
    fn last_call_one_hot() {
        let mut round = north_deals();
        let start = 2 * crate::N * 52 + 52 + 2 + 2 * crate::N + 1 + 40;
        let obs = Observation::from((&round, 0));
        assert_eq!(block(&obs, start, 39)[0], 1);
        round.apply(Action::Bid(1, Strain::Club)).unwrap();
        let obs = Observation::from((&round, 1));
        let last = block(&obs, start, 39);
        assert_eq!(last[u8::from(Action::Bid(1, Strain::Club)) as usize], 1);
        assert_eq!(last.iter().sum::<u8>(), 1);
    }

    #[test]
    fn contract_shows_until_the_opening_lead() {
        let mut round = north_deals();
        round.apply(Action::Bid(2, Strain::NoTrump)).unwrap();
        round.apply(Action::Pass).unwrap();
        round.apply(Action::Pass).unwrap();
        round.apply(Action::Pass).unwrap();
        let start = Observation::SIZE - 13;
        let obs = Observation::from((&round, 1));
        assert_eq!(block(&obs, start, 8), &[0, 0, 1, 0, 0, 0, 0, 0]);
        assert_eq!(block(&obs, start + 8, 5), &[0, 0, 0, 0, 1]);
        let lead = Judger::legal_actions(&round)[0];
        round.apply(lead).unwrap();
        let obs = Observation::from((&round, 2));
        assert_eq!(block(&obs, start, 13).iter().sum::<u8>(), 0);
    }

    #[test]
    fn mask_matches_the_legal_set() {
        let round = north_deals();
        let obs = Observation::from((&round, 0));
        let mask = obs.mask();
        assert_eq!(
            mask.iter().filter(|m| **m).count(),
            obs.legal().len()
        );
        assert!(mask[u8::from(Action::Pass) as usize]);
        assert!(!mask[u8::from(Action::NoBid) as usize]);
    }
}
