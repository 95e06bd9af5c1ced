//! Round integration tests.

use std::collections::VecDeque;

use bjsolo::{
    Action, ActionError, Card, CardSource, DealerPolicy, GameOptions, Outcome, Round, RoundState,
    Suit,
};

// Numeral ranks are worth rank + 2.
const THREE: u8 = 1;
const SIX: u8 = 4;
const SEVEN: u8 = 5;
const NINE: u8 = 7;
const ELEVEN: u8 = 9;

/// Hands out cards in the order given.
struct Stacked(VecDeque<Card>);

impl CardSource for Stacked {
    fn draw(&mut self) -> Card {
        self.0.pop_front().expect("stacked deck ran out")
    }
}

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

fn round_from_draws(draws: &[Card]) -> Round<Stacked> {
    round_with_policy(draws, DealerPolicy::default())
}

fn round_with_policy(draws: &[Card], policy: DealerPolicy) -> Round<Stacked> {
    Round::with_source(Stacked(draws.iter().copied().collect()), policy)
}

#[test]
fn deal_alternates_player_and_dealer() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, Card::KING), // player
        card(Suit::Clubs, SIX),         // dealer up
        card(Suit::Spades, SEVEN),      // player
        card(Suit::Diamonds, NINE),     // dealer hole
    ]);

    assert_eq!(round.state(), RoundState::Dealing);
    assert_eq!(round.deal(), Ok(RoundState::PlayerTurn));

    assert_eq!(
        round.player().cards(),
        &[card(Suit::Hearts, Card::KING), card(Suit::Spades, SEVEN)]
    );
    assert_eq!(
        round.dealer().cards(),
        &[card(Suit::Clubs, SIX), card(Suit::Diamonds, NINE)]
    );
    assert!(!round.is_hole_revealed());
    assert_eq!(round.outcome(), None);
}

#[test]
fn player_stands_on_19_against_hard_17() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, Card::KING), // player
        card(Suit::Clubs, Card::KING),  // dealer up
        card(Suit::Spades, NINE),       // player
        card(Suit::Diamonds, SEVEN),    // dealer hole
    ]);

    round.deal().unwrap();
    assert_eq!(round.player().total(), 19);
    assert_eq!(round.dealer().total(), 17);

    round.stand().unwrap();
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert!(round.is_hole_revealed());

    let drawn = round.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(round.state(), RoundState::Settled);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, Card::KING),  // player
        card(Suit::Clubs, SIX),          // dealer up
        card(Suit::Spades, Card::QUEEN), // player
        card(Suit::Diamonds, SEVEN),     // dealer hole
        card(Suit::Hearts, THREE),       // player hit
    ]);

    round.deal().unwrap();
    let hit = round.hit().unwrap();
    assert_eq!(hit, card(Suit::Hearts, THREE));
    assert_eq!(round.player().total(), 23);

    assert_eq!(round.state(), RoundState::PlayerBust);
    assert_eq!(round.outcome(), Some(Outcome::PlayerBust));
    assert!(!round.is_hole_revealed());
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.dealer_play().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn hit_below_21_keeps_player_turn() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, THREE),     // player
        card(Suit::Clubs, Card::KING), // dealer up
        card(Suit::Spades, SIX),       // player
        card(Suit::Diamonds, NINE),    // dealer hole
        card(Suit::Hearts, SEVEN),     // player hit
    ]);

    round.deal().unwrap();
    assert_eq!(round.act(Action::Hit), Ok(RoundState::PlayerTurn));
    assert_eq!(round.player().len(), 3);
    assert_eq!(round.player().total(), 16);
}

#[test]
fn dealer_busts() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, Card::KING),   // player
        card(Suit::Clubs, Card::KING),    // dealer up
        card(Suit::Spades, Card::QUEEN),  // player
        card(Suit::Diamonds, SIX),        // dealer hole
        card(Suit::Hearts, Card::JACK),   // dealer draw
    ]);

    round.deal().unwrap();
    round.stand().unwrap();

    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Hearts, Card::JACK)]);
    assert_eq!(round.state(), RoundState::DealerBust);
    assert_eq!(round.outcome(), Some(Outcome::DealerBust));
    assert!(Outcome::DealerBust.player_won());
}

#[test]
fn dealer_hits_soft_17_and_stands_on_high_sum() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, Card::KING), // player
        card(Suit::Clubs, Card::ACE),   // dealer up
        card(Suit::Spades, NINE),       // player
        card(Suit::Diamonds, SIX),      // dealer hole
        card(Suit::Hearts, SIX),        // dealer draw
    ]);

    round.deal().unwrap();
    round.stand().unwrap();

    // Soft 17 draws one card. A, 6, 6 is 23 with the Ace high, so the dealer
    // stops, but the hand is scored as 13.
    assert_eq!(round.dealer_step(), Ok(Some(card(Suit::Hearts, SIX))));
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(round.dealer_step(), Ok(None));

    assert_eq!(round.dealer().total(), 13);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn dealer_stands_on_soft_17_when_configured() {
    let policy = DealerPolicy::from_options(&GameOptions::default().with_hit_soft_17(false));
    let mut round = round_with_policy(
        &[
            card(Suit::Hearts, Card::KING), // player
            card(Suit::Clubs, Card::ACE),   // dealer up
            card(Suit::Spades, Card::KING), // player
            card(Suit::Diamonds, SIX),      // dealer hole
        ],
        policy,
    );

    round.deal().unwrap();
    round.stand().unwrap();
    assert!(round.dealer_play().unwrap().is_empty());
    assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn equal_totals_push() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, Card::KING),  // player
        card(Suit::Clubs, Card::QUEEN),  // dealer up
        card(Suit::Spades, NINE),        // player
        card(Suit::Diamonds, NINE),      // dealer hole
    ]);

    round.deal().unwrap();
    round.stand().unwrap();
    assert_eq!(round.finish_dealer_turn(), Ok(Outcome::Push));
}

#[test]
fn higher_dealer_total_wins() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, Card::KING), // player
        card(Suit::Clubs, Card::KING),  // dealer up
        card(Suit::Spades, SEVEN),      // player
        card(Suit::Diamonds, NINE),     // dealer hole
    ]);

    round.deal().unwrap();
    round.stand().unwrap();
    assert_eq!(round.finish_dealer_turn(), Ok(Outcome::DealerWins));
    assert_eq!(Outcome::DealerWins.message(), "You lose!");
}

#[test]
fn player_over_21_on_the_deal_still_gets_a_turn() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, ELEVEN),  // player
        card(Suit::Clubs, SIX),      // dealer up
        card(Suit::Spades, ELEVEN),  // player
        card(Suit::Diamonds, SEVEN), // dealer hole
        card(Suit::Hearts, THREE),   // player hit
    ]);

    assert_eq!(round.deal(), Ok(RoundState::PlayerTurn));
    assert_eq!(round.player().total(), 22);
    assert_eq!(round.outcome(), None);

    // Only a hit checks for a bust.
    round.hit().unwrap();
    assert_eq!(round.state(), RoundState::PlayerBust);
}

#[test]
fn dealer_over_21_on_the_deal_stands_and_settles() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, Card::KING), // player
        card(Suit::Clubs, ELEVEN),      // dealer up
        card(Suit::Spades, SEVEN),      // player
        card(Suit::Diamonds, ELEVEN),   // dealer hole
    ]);

    round.deal().unwrap();
    round.stand().unwrap();
    assert_eq!(round.dealer().total(), 22);

    assert!(round.dealer_play().unwrap().is_empty());
    assert_eq!(round.state(), RoundState::Settled);
    assert_eq!(round.outcome(), Some(Outcome::DealerWins));
}

#[test]
fn out_of_phase_actions_are_rejected() {
    let mut round = round_from_draws(&[
        card(Suit::Hearts, Card::KING),
        card(Suit::Clubs, Card::KING),
        card(Suit::Spades, NINE),
        card(Suit::Diamonds, SEVEN),
    ]);

    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.dealer_step().unwrap_err(), ActionError::InvalidState);

    round.deal().unwrap();
    assert_eq!(round.deal().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.dealer_play().unwrap_err(), ActionError::InvalidState);

    round.stand().unwrap();
    assert_eq!(round.act(Action::Hit).unwrap_err(), ActionError::InvalidState);
    round.dealer_play().unwrap();

    assert!(round.state().is_terminal());
    assert_eq!(round.dealer_step().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.player().len(), 2);
}

#[test]
fn seeded_rounds_are_reproducible() {
    let mut a = Round::new(GameOptions::default(), 1234);
    let mut b = Round::new(GameOptions::default(), 1234);
    a.deal().unwrap();
    b.deal().unwrap();
    assert_eq!(a.player(), b.player());
    assert_eq!(a.dealer(), b.dealer());
}

#[test]
fn every_random_round_reaches_an_outcome() {
    for seed in 0..200 {
        let mut round = Round::new(GameOptions::default(), seed);
        round.deal().unwrap();
        while round.state() == RoundState::PlayerTurn {
            let action = if round.player().total() < 15 {
                Action::Hit
            } else {
                Action::Stand
            };
            round.act(action).unwrap();
        }
        if round.state() == RoundState::DealerTurn {
            round.dealer_play().unwrap();
        }
        assert!(round.state().is_terminal(), "seed {seed}");
        assert!(round.outcome().is_some(), "seed {seed}");
    }
}
