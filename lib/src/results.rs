use std::io;
use thiserror::Error;

/// The verdict on a single accepted guess.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Feedback {
    /// The guess matched the secret.
    Correct,
    /// The secret is higher than the guess.
    TooLow,
    /// The secret is lower than the guess.
    TooHigh,
}

/// Where a round stands after zero or more guesses.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    /// The round is still accepting guesses.
    InProgress,
    /// The player matched the secret, and used this many turns to do it.
    Won { turns_taken: u32 },
    /// The turn budget ran out before the secret was matched.
    LostOutOfTurns,
}

impl Outcome {
    /// Returns `true` once the round has ended; no further guesses are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Indicates that a guess could not be applied to a round.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum RoundError {
    /// Indicates that the guess lies outside the round's range. The round is unchanged.
    #[error("guess {guess} is outside the range {min} to {max}")]
    GuessOutOfRange { guess: i32, min: i32, max: i32 },
    /// Indicates that a predetermined secret lies outside the difficulty's range.
    #[error("secret {secret} is outside the range {min} to {max}")]
    SecretOutOfRange { secret: i32, min: i32, max: i32 },
    /// Indicates that the round already reached a terminal outcome.
    #[error("the round has already ended")]
    RoundOver,
}

/// Indicates that the game could not continue interacting with the player.
#[derive(Debug, Error)]
pub enum GameError {
    /// Indicates that the input source reached end-of-file while a prompt was waiting.
    #[error("input closed while waiting for the player")]
    InputClosed,
    /// Indicates a read or write failure on the player's terminal.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Indicates a guess the round could not accept.
    #[error(transparent)]
    Round(#[from] RoundError),
}
