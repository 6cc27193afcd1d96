use thiserror::Error;

/// IllegalAction and InvalidPhase are caller errors: the round is left
/// untouched and the caller should re-query the legal set. MalformedDeal
/// rejects a bad external deal at construction; there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("action id {0} is not legal for the player to act")]
    IllegalAction(u8),
    #[error("the round is over")]
    InvalidPhase,
    #[error("malformed deal: {0}")]
    MalformedDeal(&'static str),
}
