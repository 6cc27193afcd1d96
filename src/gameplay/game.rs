use super::error::GameError;
use super::observe::Observation;
use super::round::Round;
use super::score::Scorer;
use super::tray::Tray;
use super::turn::Turn;
use crate::Payoff;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// top-level façade over successive rounds. owns the random source, rolls a
/// duplicate board for each reset, and speaks raw action ids so an adapter
/// never touches Action directly.
pub struct Game {
    rng: SmallRng,
    scorer: Scorer,
    round: Round,
}

impl Game {
    pub fn new() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
    /// reproducible sequence of boards and deals
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }

    /// abandon the current round, deal the next board, and hand back the
    /// dealer's view
    pub fn reset(&mut self) -> (Observation, usize) {
        let board = self.rng.random_range(1..=16);
        let tray = Tray::from(board);
        log::debug!("board {} {}", board, tray);
        self.round = Round::deal(&mut self.rng, tray);
        self.bundle()
    }

    /// advance by one raw action id from the player to act, handing back the
    /// next player's view. after the terminal action the bundle carries the
    /// last actor's (empty-handed) view.
    pub fn step(&mut self, id: u8) -> Result<(Observation, usize), GameError> {
        self.round.apply(id.try_into()?)?;
        Ok(self.bundle())
    }

    fn bundle(&self) -> (Observation, usize) {
        let actor = self.round.actor();
        (self.observe(actor), actor)
    }

    pub fn round(&self) -> &Round {
        &self.round
    }
    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }
    pub fn turn(&self) -> Turn {
        self.round.turn()
    }
    pub fn observe(&self, viewer: usize) -> Observation {
        Observation::from((&self.round, viewer))
    }
    pub fn payoffs(&self) -> [Payoff; crate::N] {
        self.scorer.payoffs(&self.round)
    }
}

impl From<SmallRng> for Game {
    fn from(mut rng: SmallRng) -> Self {
        let tray = Tray::from(rng.random_range(1..=16));
        let round = Round::deal(&mut rng, tray);
        Self {
            rng,
            scorer: Scorer::default(),
            round,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::action::Action;

    #[test]
    fn seeded_games_replay_identically() {
        let mut a = Game::seeded(2026);
        let mut b = Game::seeded(2026);
        for _ in 0..3 {
            assert_eq!(a.round().tray(), b.round().tray());
            assert_eq!(a.observe(0), b.observe(0));
            assert_eq!(a.reset(), b.reset());
        }
    }

    #[test]
    fn random_playout_terminates() {
        let mut game = Game::seeded(42);
        for _ in 0..8 {
            let mut steps = 0;
            while !game.is_over() {
                let actor = game.turn().position();
                let obs = game.observe(actor);
                assert_eq!(obs.obs().len(), Observation::SIZE);
                assert!(!obs.legal().is_empty());
                let pick = steps % obs.legal().len();
                let (next, player) = game.step(u8::from(obs.legal()[pick])).unwrap();
                assert_eq!(next.obs().len(), Observation::SIZE);
                assert!(game.is_over() || player == game.turn().position());
                steps += 1;
                assert!(steps <= 400, "round must terminate");
            }
            let payoffs = game.payoffs();
            assert_eq!(payoffs[0], payoffs[2]);
            assert_eq!(payoffs[1], payoffs[3]);
            game.reset();
        }
    }

    #[test]
    fn step_hands_back_the_next_view() {
        let mut game = Game::seeded(7);
        assert_eq!(
            game.step(u8::from(Action::NoBid)),
            Err(GameError::IllegalAction(0))
        );
        assert_eq!(game.step(200), Err(GameError::IllegalAction(200)));
        let dealer = game.round().tray().dealer();
        let (obs, player) = game.step(u8::from(Action::Pass)).unwrap();
        assert_eq!(player, (dealer + 1) % crate::N);
        assert_eq!(obs, game.observe(player));
        assert_eq!(game.round().sheet().len(), 1);
    }

    #[test]
    fn reset_rolls_a_fresh_board() {
        let mut game = Game::seeded(11);
        game.step(u8::from(Action::Pass)).unwrap();
        let (obs, player) = game.reset();
        assert!(game.round().sheet().is_empty());
        assert!(!game.is_over());
        assert_eq!(player, game.round().tray().dealer());
        assert_eq!(obs, game.observe(player));
    }
}
