use super::action::Action;
use super::action::Strain;
use super::contract::Doubling;
use super::round::Phase;
use super::round::Round;

/// stateless oracle over a Round: the single source of truth for legality.
/// Round::apply rejects anything this set does not contain, so the set is
/// never empty while the round is live.
pub struct Judger;

impl Judger {
    pub fn legal_actions(round: &Round) -> Vec<Action> {
        match round.phase() {
            Phase::Bidding => Self::calls(round),
            Phase::Playing => Self::plays(round),
            Phase::Over => Vec::new(),
        }
    }

    /// Pass is always on; bids must strictly exceed the standing bid;
    /// Double and Redouble only inside their windows
    fn calls(round: &Round) -> Vec<Action> {
        let mut calls = vec![Action::Pass];
        calls.extend(Self::raises(round));
        if Self::may_double(round) {
            calls.push(Action::Double);
        }
        if Self::may_redouble(round) {
            calls.push(Action::Redouble);
        }
        calls
    }
    fn raises(round: &Round) -> Vec<Action> {
        let floor = round.standing_bid().and_then(|m| m.bid());
        (1..=7u8)
            .flat_map(|level| (0..5u8).map(move |s| (level, Strain::from(s))))
            .filter(|&bid| floor.is_none_or(|floor| bid > floor))
            .map(|(level, strain)| Action::Bid(level, strain))
            .collect()
    }
    /// an opposing side's standing bid, not yet doubled
    fn may_double(round: &Round) -> bool {
        round.doubling() == Doubling::Undoubled
            && round
                .standing_bid()
                .is_some_and(|m| m.player % 2 != round.actor() % 2)
    }
    /// the bidding side may redouble an opposing double
    fn may_redouble(round: &Round) -> bool {
        round.doubling() == Doubling::Doubled
            && round
                .standing_bid()
                .is_some_and(|m| m.player % 2 == round.actor() % 2)
    }

    /// follow the led suit when able; lead or discard from the whole hand
    fn plays(round: &Round) -> Vec<Action> {
        let hand = round.hand(round.actor());
        let trick = round.trick();
        let follow = trick
            .first()
            .filter(|_| trick.len() < crate::N)
            .and_then(|m| m.card())
            .map(|c| c.suit());
        follow
            .map(|suit| hand.of(&suit))
            .filter(|suited| suited.size() > 0)
            .unwrap_or(hand)
            .map(Action::Play)
            .collect()
    }
}
