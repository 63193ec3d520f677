use crate::input::prompt_until_valid;
use crate::results::GameError;
use std::io::{BufRead, Write};

/// The three numeric ranges the game can be played over. Each tier fixes the
/// inclusive bounds of the secret and the number of guesses the player gets.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RangeTier {
    /// 1 to 10, 5 guesses.
    Small,
    /// 1 to 100, 7 guesses.
    Medium,
    /// -1000 to 1000, 11 guesses.
    Large,
}

impl RangeTier {
    const fn params(&self) -> (i32, i32, u32) {
        match self {
            RangeTier::Small => (1, 10, 5),
            RangeTier::Medium => (1, 100, 7),
            RangeTier::Large => (-1000, 1000, 11),
        }
    }

    /// The lowest value the secret can take.
    pub const fn min(&self) -> i32 {
        self.params().0
    }

    /// The highest value the secret can take.
    pub const fn max(&self) -> i32 {
        self.params().1
    }

    /// How many accepted guesses a round allows.
    pub const fn turn_budget(&self) -> u32 {
        self.params().2
    }
}

/// A playable difficulty: a range tier plus whether the player gets to see
/// their previous guesses. Visibility affects only what is displayed, never
/// the game logic.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Difficulty {
    tier: RangeTier,
    guesses_visible: bool,
}

impl Difficulty {
    /// The menu as presented to the player: choices 1-3 are the tiers with
    /// guesses shown, 4-6 the same tiers with guesses hidden.
    pub const MENU: [Difficulty; 6] = [
        Difficulty::new(RangeTier::Small, true),
        Difficulty::new(RangeTier::Medium, true),
        Difficulty::new(RangeTier::Large, true),
        Difficulty::new(RangeTier::Small, false),
        Difficulty::new(RangeTier::Medium, false),
        Difficulty::new(RangeTier::Large, false),
    ];

    pub const fn new(tier: RangeTier, guesses_visible: bool) -> Difficulty {
        Difficulty {
            tier,
            guesses_visible,
        }
    }

    /// Maps a 1-based menu choice to its difficulty, or `None` if the choice
    /// is not on the menu.
    pub fn from_menu_choice(choice: i32) -> Option<Difficulty> {
        if choice < 1 {
            return None;
        }
        Difficulty::MENU.get(choice as usize - 1).copied()
    }

    pub const fn tier(&self) -> RangeTier {
        self.tier
    }

    pub const fn min(&self) -> i32 {
        self.tier.min()
    }

    pub const fn max(&self) -> i32 {
        self.tier.max()
    }

    pub const fn turn_budget(&self) -> u32 {
        self.tier.turn_budget()
    }

    /// Whether the list of previous guesses is shown before each prompt.
    pub const fn guesses_visible(&self) -> bool {
        self.guesses_visible
    }
}

/// Presents the difficulty menu and reads a choice, reprompting until the
/// player picks one of the listed options.
pub fn select_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Difficulty, GameError> {
    let mut menu = String::from("Choose a difficulty:\n");
    for (index, difficulty) in Difficulty::MENU.iter().enumerate() {
        menu.push_str(&format!(
            "  {}) {} to {}, {} guesses, previous guesses {}\n",
            index + 1,
            difficulty.min(),
            difficulty.max(),
            difficulty.turn_budget(),
            if difficulty.guesses_visible() {
                "shown"
            } else {
                "hidden"
            }
        ));
    }
    menu.push_str("Enter a number from 1 to 6: ");

    prompt_until_valid(
        input,
        output,
        &menu,
        "That isn't one of the options. Enter a number from 1 to 6: ",
        |text| text.parse::<i32>().ok().and_then(Difficulty::from_menu_choice),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn menu_choices_map_to_documented_parameters() {
        let expected = [
            (1, 1, 10, 5, true),
            (2, 1, 100, 7, true),
            (3, -1000, 1000, 11, true),
            (4, 1, 10, 5, false),
            (5, 1, 100, 7, false),
            (6, -1000, 1000, 11, false),
        ];

        for (choice, min, max, turn_budget, visible) in expected {
            let difficulty = Difficulty::from_menu_choice(choice).unwrap();

            assert_eq!(difficulty.min(), min, "min for choice {}", choice);
            assert_eq!(difficulty.max(), max, "max for choice {}", choice);
            assert_eq!(
                difficulty.turn_budget(),
                turn_budget,
                "turn budget for choice {}",
                choice
            );
            assert_eq!(
                difficulty.guesses_visible(),
                visible,
                "visibility for choice {}",
                choice
            );
        }
    }

    #[test]
    fn easy_and_hard_pairs_share_a_tier() {
        for offset in 1..=3 {
            let easy = Difficulty::from_menu_choice(offset).unwrap();
            let hard = Difficulty::from_menu_choice(offset + 3).unwrap();

            assert_eq!(easy.tier(), hard.tier());
            assert!(easy.guesses_visible());
            assert!(!hard.guesses_visible());
        }
    }

    #[test]
    fn out_of_menu_choices_are_rejected() {
        assert_eq!(Difficulty::from_menu_choice(0), None);
        assert_eq!(Difficulty::from_menu_choice(7), None);
        assert_eq!(Difficulty::from_menu_choice(-1), None);
    }

    #[test]
    fn select_difficulty_reprompts_on_invalid_choice() {
        let mut input = Cursor::new(String::from("9\nabc\n2\n"));
        let mut output: Vec<u8> = Vec::new();

        let difficulty = select_difficulty(&mut input, &mut output).unwrap();

        assert_eq!(difficulty, Difficulty::from_menu_choice(2).unwrap());
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("That isn't one of the options.").count(), 2);
    }
}
