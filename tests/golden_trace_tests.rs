//! Golden trace: two first-legal players, known deck order, ten turns.
//!
//! The deck is the fresh deck with eleven cards moved to the front:
//! player 0 gets H3 S4 C9 S8 D2, player 1 gets H5 C5 CK DK SQ, and H7 is
//! the starter. The draw pile then runs CA, C2, C3, C4, C6, ...

use crazy_eights::agents::FirstLegalAgent;
use crazy_eights::cards::{fresh_deck, Card, Rank, Suit};
use crazy_eights::core::{PlayerId, TurnEvent};
use crazy_eights::games::crazy_eights::{CrazyEights, CrazyEightsBuilder};

fn c(suit: Suit, rank: u8) -> Card {
    Card::new(suit, Rank::new(rank).unwrap())
}

fn golden_table() -> CrazyEights {
    let top = [
        c(Suit::Hearts, 3),
        c(Suit::Spades, 4),
        c(Suit::Clubs, 9),
        c(Suit::Spades, 8),
        c(Suit::Diamonds, 2),
        c(Suit::Hearts, 5),
        c(Suit::Clubs, 5),
        c(Suit::Clubs, 13),
        c(Suit::Diamonds, 13),
        c(Suit::Spades, 12),
        c(Suit::Hearts, 7),
    ];
    let mut deck = top.to_vec();
    deck.extend(fresh_deck().into_iter().filter(|card| !top.contains(card)));

    let mut game = CrazyEightsBuilder::new()
        .player(Box::new(FirstLegalAgent::new()))
        .player(Box::new(FirstLegalAgent::new()))
        .build();
    assert!(game.deal_stacked(deck).unwrap());
    game
}

struct Step {
    current: u8,
    hand0: Vec<Card>,
    hand1: Vec<Card>,
}

fn golden_steps() -> Vec<Step> {
    use Suit::*;
    vec![
        // 1: P0 plays H3.
        Step { current: 1, hand0: vec![c(Spades, 4), c(Clubs, 9), c(Spades, 8), c(Diamonds, 2)], hand1: vec![c(Hearts, 5), c(Clubs, 5), c(Clubs, 13), c(Diamonds, 13), c(Spades, 12)] },
        // 2: P1 plays H5.
        Step { current: 0, hand0: vec![c(Spades, 4), c(Clubs, 9), c(Spades, 8), c(Diamonds, 2)], hand1: vec![c(Clubs, 5), c(Clubs, 13), c(Diamonds, 13), c(Spades, 12)] },
        // 3: P0 plays S8 and names Clubs.
        Step { current: 1, hand0: vec![c(Spades, 4), c(Clubs, 9), c(Diamonds, 2)], hand1: vec![c(Clubs, 5), c(Clubs, 13), c(Diamonds, 13), c(Spades, 12)] },
        // 4: P1 plays C5.
        Step { current: 0, hand0: vec![c(Spades, 4), c(Clubs, 9), c(Diamonds, 2)], hand1: vec![c(Clubs, 13), c(Diamonds, 13), c(Spades, 12)] },
        // 5: P0 plays C9.
        Step { current: 1, hand0: vec![c(Spades, 4), c(Diamonds, 2)], hand1: vec![c(Clubs, 13), c(Diamonds, 13), c(Spades, 12)] },
        // 6: P1 plays CK.
        Step { current: 0, hand0: vec![c(Spades, 4), c(Diamonds, 2)], hand1: vec![c(Diamonds, 13), c(Spades, 12)] },
        // 7: P0 cannot follow CK, draws CA.
        Step { current: 1, hand0: vec![c(Spades, 4), c(Diamonds, 2), c(Clubs, 1)], hand1: vec![c(Diamonds, 13), c(Spades, 12)] },
        // 8: P1 plays DK.
        Step { current: 0, hand0: vec![c(Spades, 4), c(Diamonds, 2), c(Clubs, 1)], hand1: vec![c(Spades, 12)] },
        // 9: P0 plays D2; P1 draws C2 C3 and loses the turn.
        Step { current: 0, hand0: vec![c(Spades, 4), c(Clubs, 1)], hand1: vec![c(Spades, 12), c(Clubs, 2), c(Clubs, 3)] },
        // 10: P0 cannot follow D2, draws C4.
        Step { current: 1, hand0: vec![c(Spades, 4), c(Clubs, 1), c(Clubs, 4)], hand1: vec![c(Spades, 12), c(Clubs, 2), c(Clubs, 3)] },
    ]
}

#[test]
fn test_golden_trace_ten_turns() {
    let mut game = golden_table();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    assert_eq!(game.current_player(), Some(p0));
    assert_eq!(game.top_of_discard(), Some(c(Suit::Hearts, 7)));

    for (i, step) in golden_steps().into_iter().enumerate() {
        let turn = i + 1;
        assert_eq!(game.play_turn().unwrap(), None, "round ended early at turn {}", turn);

        assert_eq!(game.current_player(), Some(PlayerId::new(step.current)), "current after turn {}", turn);
        assert_eq!(game.hand(p0).unwrap(), step.hand0, "player 0 hand after turn {}", turn);
        assert_eq!(game.hand(p1).unwrap(), step.hand1, "player 1 hand after turn {}", turn);
        assert_eq!(game.cards_in_play(), 52);
    }

    assert_eq!(game.top_of_discard(), Some(c(Suit::Diamonds, 2)));
    assert_eq!(game.draw_pile_len(), 52 - 11 - 4);
    assert_eq!(game.discard_pile_len(), 9);
}

#[test]
fn test_golden_trace_suit_change() {
    let mut game = golden_table();
    for _ in 0..3 {
        game.play_turn().unwrap();
    }

    assert_eq!(
        game.top_of_discard(),
        Some(Card::synthetic_wild(Suit::Clubs, Rank::EIGHT))
    );
}

#[test]
fn test_golden_trace_events() {
    let mut game = golden_table();
    for _ in 0..10 {
        game.play_turn().unwrap();
    }

    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);
    let turn9: Vec<TurnEvent> = game
        .events()
        .iter()
        .filter(|r| r.turn == 9)
        .map(|r| r.event.clone())
        .collect();

    assert_eq!(
        turn9,
        vec![
            TurnEvent::Played { player: p0, card: c(Suit::Diamonds, 2) },
            TurnEvent::Drew { player: p1, card: c(Suit::Clubs, 2) },
            TurnEvent::Drew { player: p1, card: c(Suit::Clubs, 3) },
            TurnEvent::Skipped { player: p1 },
        ]
    );

    let opening: Vec<TurnEvent> = game
        .events()
        .iter()
        .filter(|r| r.turn == 0)
        .map(|r| r.event.clone())
        .collect();
    assert_eq!(opening.len(), 3);
    assert_eq!(opening[2], TurnEvent::Flipped { card: c(Suit::Hearts, 7) });
}
