//! Line-oriented terminal front end.
//!
//! [`Session`] runs rounds back to back over any [`BufRead`] / [`Write`]
//! pair, so the same loop serves a real terminal and in-memory tests.

use std::io::{BufRead, Write};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::{CardSource, Deck};
use crate::error::{ActionError, ConsoleError, InputError};
use crate::game::{Action, DealerPolicy, Round, RoundState};
use crate::hand::{Hand, Owner};
use crate::options::GameOptions;
use crate::result::Outcome;

const HEADER: &str = "Welcome to Blackjack!";
const ACTION_PROMPT: &str = "Do you want to hit (H) or stand (S)? ";
const PLAY_AGAIN_PROMPT: &str = "Play again (Y/n)? ";
const INVALID_INPUT: &str = "Invalid input.";

/// Builds the card source for each new round.
pub type DeckFactory = Box<dyn FnMut() -> Deck>;

/// Parses the answer to the play-again prompt.
///
/// `Y` in either case or an empty line means yes; any other answer ends the
/// session.
#[must_use]
pub fn parse_play_again(line: &str) -> bool {
    matches!(line.trim(), "" | "Y" | "y")
}

/// Renders the dealer's hand, hiding everything after the up card until the
/// hole card is revealed.
#[must_use]
pub fn dealer_view(hand: &Hand, hole_revealed: bool) -> String {
    match hand.up_card() {
        Some(up) if !hole_revealed && hand.len() > 1 => format!("[{up}, ??]"),
        _ => hand.to_string(),
    }
}

const fn hand_label(owner: Owner) -> &'static str {
    match owner {
        Owner::Dealer => "Dealer Cards: ",
        Owner::Player => "User Cards:   ",
    }
}

/// A sequence of rounds played over one input and one output.
///
/// `F` builds a fresh card source for every round.
pub struct Session<R, W, F = DeckFactory> {
    input: R,
    output: W,
    policy: DealerPolicy,
    sources: F,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that deals each round from a new [`Deck`], seeded
    /// from `seed`.
    pub fn new(input: R, output: W, options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sources: DeckFactory = Box::new(move || Deck::new(&options, rng.next_u64()));
        Self::with_sources(input, output, DealerPolicy::from_options(&options), sources)
    }
}

impl<R: BufRead, W: Write, F> Session<R, W, F> {
    /// Creates a session that asks `sources` for each round's card source.
    pub const fn with_sources(input: R, output: W, policy: DealerPolicy, sources: F) -> Self {
        Self {
            input,
            output,
            policy,
            sources,
        }
    }

    /// Consumes the session and returns its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays rounds until the player declines to continue or input ends.
    ///
    /// Returns the number of rounds that reached an outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails.
    pub fn run<S>(&mut self) -> Result<usize, ConsoleError>
    where
        S: CardSource,
        F: FnMut() -> S,
    {
        let mut rounds = 0;

        loop {
            self.print_header()?;

            let mut round = Round::with_source((self.sources)(), self.policy);
            match self.play_round(&mut round) {
                Ok(_) => rounds += 1,
                Err(ConsoleError::InputClosed) => {
                    log::debug!("input closed mid-round");
                    return Ok(rounds);
                }
                Err(err) => return Err(err),
            }

            if !self.prompt_play_again()? {
                break;
            }
            writeln!(self.output)?;
        }

        Ok(rounds)
    }

    /// Plays one round from the deal to the outcome line.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InputClosed`] if input ends before the player
    /// stands or busts, or an I/O error.
    pub fn play_round<S: CardSource>(
        &mut self,
        round: &mut Round<S>,
    ) -> Result<Outcome, ConsoleError> {
        round.deal()?;
        self.print_table(round)?;

        while round.state() == RoundState::PlayerTurn {
            let action = self.prompt_action()?;
            round.act(action)?;
            if action == Action::Hit {
                self.print_table(round)?;
            }
        }

        if round.state() == RoundState::DealerTurn {
            self.print_table(round)?;
            while round.state() == RoundState::DealerTurn {
                if round.dealer_step()?.is_some() {
                    self.print_table(round)?;
                }
            }
        }

        let outcome = round.outcome().ok_or(ActionError::InvalidState)?;
        writeln!(self.output, "{outcome}")?;
        Ok(outcome)
    }

    fn print_header(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{HEADER}")?;
        writeln!(self.output, "{}", "-".repeat(HEADER.len()))?;
        writeln!(self.output)?;
        Ok(())
    }

    fn print_table<S: CardSource>(&mut self, round: &Round<S>) -> Result<(), ConsoleError> {
        let (dealer, player) = (round.dealer(), round.player());
        writeln!(
            self.output,
            "{}{}",
            hand_label(dealer.owner()),
            dealer_view(dealer, round.is_hole_revealed())
        )?;
        writeln!(self.output, "{}{player}", hand_label(player.owner()))?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Prints `prompt` and reads one line. `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt_action(&mut self) -> Result<Action, ConsoleError> {
        loop {
            let line = self
                .read_line(ACTION_PROMPT)?
                .ok_or(ConsoleError::InputClosed)?;
            match line.parse() {
                Ok(action) => return Ok(action),
                Err(InputError::Unrecognized) => writeln!(self.output, "{INVALID_INPUT}")?,
            }
        }
    }

    fn prompt_play_again(&mut self) -> Result<bool, ConsoleError> {
        let line = self.read_line(PLAY_AGAIN_PROMPT)?;
        Ok(line.is_some_and(|line| parse_play_again(&line)))
    }
}
