use crate::difficulty::{select_difficulty, Difficulty};
use crate::input::{int_in_range, prompt_until_valid, yes_or_no};
use crate::results::{Feedback, GameError, Outcome};
use crate::round::Round;
use crate::text;
use rand::Rng;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[1;1H";

/// Display settings fixed once at startup and threaded through the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    /// Target width for wrapped text and dividers.
    pub width: usize,
    /// Cosmetic pause after each evaluated guess and outcome. Purely a pacing
    /// aid; never alters control flow.
    pub pace: Duration,
    /// Whether to emit an ANSI clear-screen sequence before each screen.
    pub clear_screen: bool,
}

impl Default for GameConfig {
    /// Safe for redirected output: 80 columns, no pauses, no escape
    /// sequences.
    fn default() -> GameConfig {
        GameConfig {
            width: 80,
            pace: Duration::ZERO,
            clear_screen: false,
        }
    }
}

/// Runs rounds until the player declines to continue.
///
/// The session owns the input, output and randomness handles for the whole
/// process lifetime, and owns the single active [`Round`] while one is being
/// played. Nothing else retains a round once it ends.
pub struct Session<R, W, G> {
    input: R,
    output: W,
    rng: G,
    config: GameConfig,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(input: R, output: W, rng: G, config: GameConfig) -> Session<R, W, G> {
        Session {
            input,
            output,
            rng,
            config,
        }
    }

    /// Plays the game to completion: the welcome banner once, then rounds
    /// until the player answers "no" to playing again.
    pub fn run(&mut self) -> Result<(), GameError> {
        self.print_banner()?;
        loop {
            let difficulty = select_difficulty(&mut self.input, &mut self.output)?;
            let round = self.play_round(difficulty)?;
            self.print_outcome(&round)?;

            let again = prompt_until_valid(
                &mut self.input,
                &mut self.output,
                "Play again? (y/n) ",
                "Please answer yes or no: ",
                yes_or_no,
            )?;
            if !again {
                tracing::debug!("player declined another round");
                writeln!(self.output, "Thanks for playing!")?;
                return Ok(());
            }
        }
    }

    fn play_round(&mut self, difficulty: Difficulty) -> Result<Round, GameError> {
        let mut round = Round::new(difficulty, &mut self.rng);
        let mut feedback = None;
        while round.outcome() == Outcome::InProgress {
            let (prompt, reprompt) = self.guess_prompts(&round, feedback);
            let guess = prompt_until_valid(
                &mut self.input,
                &mut self.output,
                &prompt,
                &reprompt,
                int_in_range(difficulty.min(), difficulty.max()),
            )?;
            feedback = Some(round.apply_guess(guess)?);
            self.pace();
        }
        Ok(round)
    }

    /// Builds the prompt for the next guess, plus the reprompt used after
    /// invalid input. Both start from the same freshly rebuilt screen, so a
    /// reprompt never leaves stale too-low/too-high feedback visible; the
    /// reprompt simply omits the feedback line.
    fn guess_prompts(&self, round: &Round, feedback: Option<Feedback>) -> (String, String) {
        let mut context = String::new();
        if self.config.clear_screen {
            context.push_str(CLEAR_SCREEN);
        }
        context.push_str(&text::divider(self.config.width, 0, 1));
        if round.difficulty().guesses_visible() && !round.guesses().is_empty() {
            let listed = round
                .guesses()
                .iter()
                .map(|guess| guess.to_string())
                .collect::<Vec<String>>();
            context.push_str(&text::wrap(
                &format!(
                    "So far you have guessed {}.",
                    text::join_with_conjunction(&listed, "and", true)
                ),
                self.config.width,
            ));
            context.push('\n');
        }
        context.push_str(&format!(
            "You have {} {} left.\n",
            round.turns_remaining(),
            plural_turns(round.turns_remaining())
        ));

        let feedback_line = match feedback {
            Some(Feedback::TooLow) => "Too low!\n",
            Some(Feedback::TooHigh) => "Too high!\n",
            Some(Feedback::Correct) | None => "",
        };
        let ask = format!(
            "Guess a number between {} and {}: ",
            round.difficulty().min(),
            round.difficulty().max()
        );

        let prompt = format!("{}{}{}", context, feedback_line, ask);
        let reprompt = format!("{}Invalid input. {}", context, ask);
        (prompt, reprompt)
    }

    fn print_banner(&mut self) -> Result<(), GameError> {
        if self.config.clear_screen {
            self.output.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        let banner = text::wrap(
            "Welcome to Hi-Lo! I will pick a secret number and you try to find it. \
             After every guess I will tell you whether you were too low or too high. \
             Find the number before you run out of turns and you win.",
            self.config.width,
        );
        writeln!(self.output, "{}", banner)?;
        writeln!(self.output, "{}", text::divider(self.config.width, 0, 0))?;
        Ok(())
    }

    fn print_outcome(&mut self, round: &Round) -> Result<(), GameError> {
        match round.outcome() {
            Outcome::Won { turns_taken } => {
                writeln!(
                    self.output,
                    "You got it! The number was {} and it took you {} {}.",
                    round.secret(),
                    turns_taken,
                    plural_turns(turns_taken)
                )?;
            }
            Outcome::LostOutOfTurns => {
                writeln!(
                    self.output,
                    "Out of turns! The number was {}.",
                    round.secret()
                )?;
            }
            Outcome::InProgress => {}
        }
        writeln!(self.output, "{}", text::divider(self.config.width, 0, 0))?;
        self.pace();
        Ok(())
    }

    fn pace(&self) {
        if !self.config.pace.is_zero() {
            thread::sleep(self.config.pace);
        }
    }
}

fn plural_turns(count: u32) -> &'static str {
    if count == 1 {
        "turn"
    } else {
        "turns"
    }
}
