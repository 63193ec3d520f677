use crate::difficulty::Difficulty;
use crate::results::{Feedback, Outcome, RoundError};
use rand::Rng;
use std::cmp::Ordering;

/// A single play-through: one secret, one turn budget, one terminal outcome.
///
/// The secret never changes for the lifetime of the round. Guesses move the
/// round from `InProgress` to either `Won` or `LostOutOfTurns`, after which
/// further guesses are rejected.
#[derive(Debug)]
pub struct Round {
    difficulty: Difficulty,
    secret: i32,
    turns_remaining: u32,
    guesses: Vec<i32>,
    last_guess: Option<i32>,
    outcome: Outcome,
}

impl Round {
    /// Starts a round, drawing the secret uniformly at random from the
    /// difficulty's inclusive range.
    pub fn new<G: Rng>(difficulty: Difficulty, rng: &mut G) -> Round {
        let secret = rng.gen_range(difficulty.min()..=difficulty.max());
        tracing::debug!(
            secret,
            min = difficulty.min(),
            max = difficulty.max(),
            turn_budget = difficulty.turn_budget(),
            "round started"
        );
        Round::from_parts(difficulty, secret)
    }

    /// Starts a round with a predetermined secret instead of a random draw.
    pub fn with_secret(difficulty: Difficulty, secret: i32) -> Result<Round, RoundError> {
        if secret < difficulty.min() || secret > difficulty.max() {
            return Err(RoundError::SecretOutOfRange {
                secret,
                min: difficulty.min(),
                max: difficulty.max(),
            });
        }
        Ok(Round::from_parts(difficulty, secret))
    }

    fn from_parts(difficulty: Difficulty, secret: i32) -> Round {
        Round {
            difficulty,
            secret,
            turns_remaining: difficulty.turn_budget(),
            guesses: Vec::new(),
            last_guess: None,
            outcome: Outcome::InProgress,
        }
    }

    /// Applies one guess. An accepted guess costs exactly one turn, is
    /// recorded in the sorted guess history, and is evaluated against the
    /// secret. A rejected guess (out of range, or after the round has ended)
    /// leaves the round untouched and costs nothing.
    pub fn apply_guess(&mut self, guess: i32) -> Result<Feedback, RoundError> {
        if self.outcome.is_terminal() {
            return Err(RoundError::RoundOver);
        }
        if guess < self.difficulty.min() || guess > self.difficulty.max() {
            return Err(RoundError::GuessOutOfRange {
                guess,
                min: self.difficulty.min(),
                max: self.difficulty.max(),
            });
        }

        self.turns_remaining -= 1;
        let position = self.guesses.partition_point(|prior| *prior <= guess);
        self.guesses.insert(position, guess);
        self.last_guess = Some(guess);

        let feedback = match guess.cmp(&self.secret) {
            Ordering::Equal => Feedback::Correct,
            Ordering::Less => Feedback::TooLow,
            Ordering::Greater => Feedback::TooHigh,
        };
        self.outcome = match feedback {
            Feedback::Correct => Outcome::Won {
                turns_taken: self.difficulty.turn_budget() - self.turns_remaining,
            },
            _ if self.turns_remaining == 0 => Outcome::LostOutOfTurns,
            _ => Outcome::InProgress,
        };
        tracing::debug!(
            guess,
            ?feedback,
            turns_remaining = self.turns_remaining,
            "guess evaluated"
        );
        Ok(feedback)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn secret(&self) -> i32 {
        self.secret
    }

    /// Turns left before the round is lost. Never exceeds the turn budget.
    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// Every accepted guess so far, sorted ascending. Duplicates are kept.
    pub fn guesses(&self) -> &[i32] {
        &self.guesses
    }

    pub fn last_guess(&self) -> Option<i32> {
        self.last_guess
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}
