use super::action::Action;
use super::action::Strain;
use super::contract::Contract;
use super::contract::Doubling;
use super::error::GameError;
use super::judger::Judger;
use super::seat::Seat;
use super::tray::Tray;
use super::turn::Turn;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// phases are one-directional: Bidding -> Playing -> Over. Playing is skipped
/// entirely when the auction is passed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Bidding,
    Playing,
    Over,
}

/// one row of the append-only move sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: usize,
    pub action: Action,
}

impl Move {
    pub fn card(&self) -> Option<Card> {
        match self.action {
            Action::Play(card) => Some(card),
            _ => None,
        }
    }
    pub fn bid(&self) -> Option<(u8, Strain)> {
        match self.action {
            Action::Bid(level, strain) => Some((level, strain)),
            _ => None,
        }
    }
    pub fn is_call(&self) -> bool {
        self.action.is_call()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{} {}", self.player, self.action)
    }
}

/// perfect-information snapshot of a round, for export by an adapter once
/// the round is finished.
#[derive(Debug, Clone, Serialize)]
pub struct Recap {
    pub tray: Tray,
    pub contract: Option<Contract>,
    pub tricks: [u8; 2],
    pub hands: [Hand; crate::N],
    pub sheet: Vec<Move>,
}

/// Round owns the full state of one deal: the four seats, the tray, the
/// append-only move sheet, and the auction/trick bookkeeping derived from it.
/// Its immutable methods reveal pure functions representing the rules of how
/// the round may proceed; apply() is the only mutation and consumes exactly
/// one legal action from the player to act.
#[derive(Debug, Clone)]
pub struct Round {
    seats: [Seat; crate::N],
    tray: Tray,
    sheet: Vec<Move>,
    phase: Phase,
    actor: usize,
    passes: u8,
    doubling: Doubling,
    highest: Option<Move>,
    contract: Option<Contract>,
    tricks: [u8; 2],
    plays: u8,
}

impl Round {
    /// seat externally dealt hands, rejecting anything but a clean
    /// 13-13-13-13 partition of the deck
    pub fn new(tray: Tray, hands: [Hand; crate::N]) -> Result<Self, GameError> {
        if hands.iter().any(|h| h.size() != crate::TRICKS) {
            return Err(GameError::MalformedDeal("each seat takes exactly 13 cards"));
        }
        let union = hands.iter().copied().map(u64::from).fold(0, |a, b| a | b);
        if Hand::from(union) != Hand::full() {
            return Err(GameError::MalformedDeal("hands must partition the deck"));
        }
        Ok(Self {
            seats: std::array::from_fn(|i| Seat::new(i, hands[i])),
            actor: tray.dealer(),
            tray,
            sheet: Vec::new(),
            phase: Phase::Bidding,
            passes: 0,
            doubling: Doubling::Undoubled,
            highest: None,
            contract: None,
            tricks: [0; 2],
            plays: 0,
        })
    }

    /// deal a fresh round from the supplied random source
    pub fn deal(rng: &mut impl Rng, tray: Tray) -> Self {
        Self::new(tray, Deck::deal(rng)).expect("a fresh deal partitions the deck")
    }

    //
    pub fn tray(&self) -> Tray {
        self.tray
    }
    pub fn actor(&self) -> usize {
        self.actor
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }
    pub fn is_bidding_over(&self) -> bool {
        self.phase != Phase::Bidding
    }
    pub fn turn(&self) -> Turn {
        match self.phase {
            Phase::Over => Turn::Terminal,
            _ => Turn::Choice(self.actor),
        }
    }
    pub fn sheet(&self) -> &[Move] {
        &self.sheet
    }
    pub fn hand(&self, position: usize) -> Hand {
        self.seats[position].hand()
    }
    pub fn contract(&self) -> Option<Contract> {
        self.contract
    }
    pub fn declarer(&self) -> Option<usize> {
        self.contract.map(|c| c.declarer)
    }
    pub fn dummy(&self) -> Option<usize> {
        self.contract.map(|c| c.dummy())
    }
    /// won tricks per pair, NS then EW
    pub fn tricks(&self) -> [u8; 2] {
        self.tricks
    }
    /// cards played so far
    pub fn plays(&self) -> usize {
        self.plays as usize
    }
    /// the standing (eventual contract) bid, if any
    pub fn standing_bid(&self) -> Option<Move> {
        self.highest
    }
    pub fn doubling(&self) -> Doubling {
        self.doubling
    }
    /// moves of the trick in progress. a just-completed trick remains
    /// visible until the next lead.
    pub fn trick(&self) -> &[Move] {
        let n = match self.plays % 4 {
            0 if self.plays == 0 => 0,
            0 => 4,
            k => k,
        } as usize;
        &self.sheet[self.sheet.len() - n..]
    }
    pub fn recap(&self) -> Recap {
        Recap {
            tray: self.tray,
            contract: self.contract,
            tricks: self.tricks,
            hands: std::array::from_fn(|i| self.seats[i].hand()),
            sheet: self.sheet.clone(),
        }
    }

    /// advance by one action from the player to act. rejects anything the
    /// judger would not offer, leaving the round untouched.
    pub fn apply(&mut self, action: Action) -> Result<Turn, GameError> {
        if self.phase == Phase::Over {
            return Err(GameError::InvalidPhase);
        }
        if !Judger::legal_actions(self).contains(&action) {
            return Err(GameError::IllegalAction(u8::from(action)));
        }
        log::trace!("P{} {}", self.actor, action);
        match action {
            Action::Pass => self.pass(),
            Action::Bid(..) => self.bid(action),
            Action::Double => self.double(),
            Action::Redouble => self.redouble(),
            Action::Play(card) => self.play(card),
            Action::NoBid => unreachable!("never offered by the judger"),
        }
        Ok(self.turn())
    }

    //
    fn record(&mut self, action: Action) {
        self.sheet.push(Move {
            player: self.actor,
            action,
        });
    }
    fn rotate(&mut self) {
        self.actor = (self.actor + 1) % crate::N;
    }

    //
    fn pass(&mut self) {
        self.record(Action::Pass);
        self.passes += 1;
        if self.highest.is_some() && self.passes >= 3 {
            self.conclude_auction();
        } else if self.highest.is_none() && self.passes as usize >= crate::N {
            self.pass_out();
        } else {
            self.rotate();
        }
    }
    fn bid(&mut self, action: Action) {
        self.record(action);
        self.highest = self.sheet.last().copied();
        self.doubling = Doubling::Undoubled;
        self.passes = 0;
        self.rotate();
    }
    fn double(&mut self) {
        self.record(Action::Double);
        self.doubling = Doubling::Doubled;
        self.passes = 0;
        self.rotate();
    }
    fn redouble(&mut self) {
        self.record(Action::Redouble);
        self.doubling = Doubling::Redoubled;
        self.passes = 0;
        self.rotate();
    }
    /// three passes behind a standing bid fix the contract and hand the
    /// opening lead to declarer's left
    fn conclude_auction(&mut self) {
        let bid = self.highest.expect("auction closed on a standing bid");
        let (level, strain) = bid.bid().expect("standing move is a bid");
        let contract = Contract {
            declarer: bid.player,
            level,
            strain,
            doubling: self.doubling,
        };
        log::debug!("contract {}", contract);
        self.actor = contract.leader();
        self.contract = Some(contract);
        self.phase = Phase::Playing;
    }
    /// four opening passes end the round with no contract and no play phase
    fn pass_out(&mut self) {
        log::debug!("passed out");
        self.phase = Phase::Over;
    }

    //
    fn play(&mut self, card: Card) {
        self.seats[self.actor].remove(card);
        self.record(Action::Play(card));
        self.plays += 1;
        if self.plays % 4 == 0 {
            self.collect();
        } else {
            self.rotate();
        }
    }
    fn collect(&mut self) {
        let winner = self.winner();
        self.tricks[winner % 2] += 1;
        self.actor = winner;
        log::trace!("trick to P{}", winner);
        if self.plays as usize == crate::N * crate::TRICKS {
            assert!(self.seats.iter().all(|s| s.hand().size() == 0));
            log::debug!("round over, tricks {:?}", self.tricks);
            self.phase = Phase::Over;
        }
    }
    /// highest trump wins if any trump was played, else highest of the led suit
    fn winner(&self) -> usize {
        let trick = self.trick();
        assert!(trick.len() == crate::N);
        let led = trick
            .first()
            .and_then(Move::card)
            .map(|c| c.suit())
            .expect("trick opens with a play");
        let trump = self.contract.and_then(|c| c.trump());
        let suit = trump
            .filter(|t| trick.iter().filter_map(|m| m.card()).any(|c| c.suit() == *t))
            .unwrap_or(led);
        trick
            .iter()
            .filter(|m| m.card().is_some_and(|c| c.suit() == suit))
            .max_by_key(|m| m.card().expect("play move").rank())
            .map(|m| m.player)
            .expect("at least the led card follows the winning suit")
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for seat in self.seats.iter() {
            writeln!(f, "{}", seat)?;
        }
        match self.contract {
            Some(contract) => write!(f, "{:?} {} @ {:?}", self.phase, contract, self.tricks),
            None => write!(f, "{:?} @ {}", self.phase, self.tray),
        }
    }
}
