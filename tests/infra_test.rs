//! Тесты инфраструктуры: детерминированный RNG, вывод seed'а из строки,
//! снапшот состояния и его восстановление.

use holdem_engine::domain::{Card, Chips, Deck, GameConfig, SeatIndex};
use holdem_engine::engine::{
    process_action, ActionKind, Command, EngineError, GameState, PlayerAction, RandomSource,
};
use holdem_engine::infra::{DeterministicRng, GameSnapshot, RngSeed, SeededShuffler};

/// ===============
/// Детерминированный RNG
/// ===============

#[test]
fn same_seed_gives_the_same_shuffle() {
    let mut a = Deck::standard_52();
    let mut b = Deck::standard_52();

    DeterministicRng::from_u64(42).shuffle(&mut a.cards);
    DeterministicRng::from_u64(42).shuffle(&mut b.cards);

    assert_eq!(a.cards, b.cards);
}

#[test]
fn different_seeds_give_different_shuffles() {
    let mut a = Deck::standard_52();
    let mut b = Deck::standard_52();

    DeterministicRng::from_u64(1).shuffle(&mut a.cards);
    DeterministicRng::from_u64(2).shuffle(&mut b.cards);

    assert_ne!(a.cards, b.cards);
}

#[test]
fn shuffle_preserves_all_52_cards() {
    let mut deck = Deck::standard_52();
    DeterministicRng::from_u64(7).shuffle(&mut deck.cards);

    assert_eq!(deck.len(), 52);
    let reference = Deck::standard_52();
    for card in &reference.cards {
        assert!(deck.cards.contains(card), "карта {card} потерялась");
    }
}

/// ===============
/// RngSeed
/// ===============

#[test]
fn string_seed_expansion_is_stable() {
    let a = RngSeed::from_str_seed("tournament-123/hand-7");
    let b = RngSeed::from_str_seed("tournament-123/hand-7");
    assert_eq!(a, b);

    let c = RngSeed::from_str_seed("tournament-123/hand-8");
    assert_ne!(a, c);
}

#[test]
fn derived_seed_depends_on_game_and_hand() {
    let base = RngSeed::from_u64(99);

    assert_eq!(base.derive(1, 1), base.derive(1, 1));
    assert_ne!(base.derive(1, 1), base.derive(1, 2));
    assert_ne!(base.derive(1, 1), base.derive(2, 1));
    assert_ne!(base.derive(1, 1), base, "производный seed отличается от базового");
}

#[test]
fn seeded_shuffler_is_deterministic_by_string_seed() {
    let shuffler = SeededShuffler;

    let mut a = Deck::standard_52();
    let mut b = Deck::standard_52();
    shuffler.shuffle_deck(&mut a.cards, "game-5/hand-12");
    shuffler.shuffle_deck(&mut b.cards, "game-5/hand-12");
    assert_eq!(a.cards, b.cards);

    let mut c = Deck::standard_52();
    shuffler.shuffle_deck(&mut c.cards, "game-5/hand-13");
    assert_ne!(a.cards, c.cards);
}

/// ===============
/// Снапшот
/// ===============

fn mid_hand_state() -> GameState {
    let config = GameConfig::new(Chips(50), Chips(100), 9);
    let mut state = GameState::new(7, config).expect("валидный конфиг");

    let shuffler = SeededShuffler;
    for (i, stack) in [2_000u64, 2_000, 500].iter().enumerate() {
        state = process_action(
            &shuffler,
            &state,
            &Command::SitDown {
                player_id: (i + 1) as u64,
                seat: SeatIndex(i as u8),
                buy_in: Chips(*stack),
            },
        )
        .expect("посадка")
        .state;
    }

    state = process_action(
        &shuffler,
        &state,
        &Command::StartHand {
            seed: "snapshot-hand".into(),
        },
    )
    .expect("старт раздачи")
    .state;

    // Один ход, чтобы в снапшот попала непустая история и живой банк.
    let actor = state.to_act.expect("чей-то ход");
    let player_id = state.table.player(actor).expect("место занято").player_id;
    process_action(
        &shuffler,
        &state,
        &Command::Player(PlayerAction {
            player_id,
            kind: ActionKind::Call,
        }),
    )
    .expect("колл")
    .state
}

#[test]
fn snapshot_round_trip_restores_the_exact_state() {
    let state = mid_hand_state();

    let snapshot = GameSnapshot::from_state(&state);
    let restored = snapshot.to_state().expect("снапшот валиден");

    assert_eq!(restored, state, "восстановление без потерь");
}

#[test]
fn snapshot_survives_json_serialization() {
    let state = mid_hand_state();
    let snapshot = GameSnapshot::from_state(&state);

    let json = serde_json::to_string(&snapshot).expect("сериализация снапшота");
    let parsed: GameSnapshot = serde_json::from_str(&json).expect("десериализация");
    assert_eq!(parsed, snapshot);

    let restored = parsed.to_state().expect("снапшот валиден после JSON");
    assert_eq!(restored, state);
}

#[test]
fn snapshot_serializes_cards_as_two_char_codes() {
    let state = mid_hand_state();
    let snapshot = GameSnapshot::from_state(&state);

    for ps in &snapshot.players {
        for code in &ps.hole_cards {
            assert_eq!(code.len(), 2, "код карты {code:?} должен быть двухсимвольным");
            assert!(code.parse::<Card>().is_ok());
        }
    }
    let hand = snapshot.hand.as_ref().expect("раздача идёт");
    for code in hand.deck.iter().chain(hand.board.iter()) {
        assert_eq!(code.len(), 2);
    }
}

#[test]
fn snapshot_rejects_duplicate_cards() {
    let state = mid_hand_state();
    let mut snapshot = GameSnapshot::from_state(&state);

    // Подменяем карту игрока на уже сданную другому.
    let stolen = snapshot.players[0].hole_cards[0].clone();
    snapshot.players[1].hole_cards[0] = stolen;

    let err = snapshot.to_state().expect_err("дубликат карты в раздаче");
    assert!(matches!(err, EngineError::MalformedSnapshot(_)));
}

#[test]
fn snapshot_rejects_malformed_card_codes() {
    let state = mid_hand_state();
    let mut snapshot = GameSnapshot::from_state(&state);

    snapshot.players[0].hole_cards[0] = "Zz".to_string();
    assert!(matches!(
        snapshot.to_state(),
        Err(EngineError::MalformedSnapshot(_))
    ));
}

#[test]
fn snapshot_rejects_inconsistent_chip_totals() {
    let state = mid_hand_state();
    let mut snapshot = GameSnapshot::from_state(&state);

    // Ломаем эталонную сумму: восстановление обязано это заметить.
    snapshot.bank += 1_000;
    assert!(matches!(
        snapshot.to_state(),
        Err(EngineError::ChipConservation { .. })
    ));
}

#[test]
fn snapshot_exposes_side_pot_breakdown() {
    let state = mid_hand_state();
    let snapshot = GameSnapshot::from_state(&state);

    let pots_total: u64 = snapshot.side_pots.iter().map(|p| p.amount).sum();
    assert_eq!(pots_total, snapshot.pot_total, "слои покрывают банк целиком");
    for pot in &snapshot.side_pots {
        assert!(!pot.eligible.is_empty());
    }
}
