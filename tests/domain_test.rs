//! Тесты доменной модели: карты, колода, фишки, места, конфигурация.

use holdem_engine::domain::{
    Card, CardParseError, Chips, Deck, GameConfig, Rank, SeatIndex, Street, Suit,
};

/// ===============
/// Карты
/// ===============

#[test]
fn card_display_and_parse_round_trip() {
    let codes = ["Ah", "Td", "7c", "2s", "Kh", "Qd", "Jc", "9s"];
    for code in codes {
        let card: Card = code.parse().expect("код карты должен парситься");
        assert_eq!(
            card.to_string(),
            code,
            "Display обязан давать тот же двухсимвольный код"
        );
    }
}

#[test]
fn card_parse_is_case_insensitive() {
    let a: Card = "ah".parse().expect("нижний регистр допустим");
    let b: Card = "AH".parse().expect("верхний регистр допустим");
    assert_eq!(a, b);
    assert_eq!(a, Card::new(Rank::Ace, Suit::Hearts));
}

#[test]
fn card_parse_rejects_garbage() {
    assert!(matches!(
        "Ahh".parse::<Card>(),
        Err(CardParseError::BadLength(_))
    ));
    assert!(matches!("Xd".parse::<Card>(), Err(CardParseError::BadRank('X'))));
    assert!(matches!("Az".parse::<Card>(), Err(CardParseError::BadSuit('z'))));
    assert!(matches!("".parse::<Card>(), Err(CardParseError::BadLength(_))));
}

#[test]
fn rank_from_value_covers_2_to_14() {
    for v in 2u8..=14 {
        let rank = Rank::from_value(v).expect("значение 2..14 валидно");
        assert_eq!(rank as u8, v);
    }
    assert!(Rank::from_value(1).is_none());
    assert!(Rank::from_value(15).is_none());
}

/// ===============
/// Колода
/// ===============

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    for (i, a) in deck.cards.iter().enumerate() {
        for b in deck.cards.iter().skip(i + 1) {
            assert_ne!(a, b, "в колоде не должно быть дубликатов");
        }
    }
}

#[test]
fn deck_draw_and_burn_take_from_the_top() {
    let mut deck = Deck::standard_52();
    let top = *deck.cards.last().expect("колода не пуста");

    let drawn = deck.draw_one().expect("карта должна сдаться");
    assert_eq!(drawn, top, "draw_one берёт верхнюю карту");
    assert_eq!(deck.len(), 51);

    let burned = deck.burn_one().expect("карта должна сжечься");
    assert_eq!(deck.len(), 50);
    assert_ne!(drawn, burned);

    let three = deck.draw_n(3);
    assert_eq!(three.len(), 3);
    assert_eq!(deck.len(), 47);
}

#[test]
fn deck_draw_n_stops_at_empty() {
    let mut deck = Deck::standard_52();
    let all = deck.draw_n(60);
    assert_eq!(all.len(), 52, "больше 52 карт взять нельзя");
    assert!(deck.is_empty());
    assert!(deck.draw_one().is_none());
}

/// ===============
/// Фишки и места
/// ===============

#[test]
fn chips_subtraction_never_goes_negative() {
    let a = Chips(100);
    let b = Chips(250);

    assert_eq!(a - b, Chips::ZERO, "вычитание насыщающее");
    assert_eq!(a.saturating_sub(b), Chips::ZERO);
    assert_eq!(a.checked_sub(b), None, "checked-вариант честно говорит None");
    assert_eq!(b.checked_sub(a), Some(Chips(150)));
}

#[test]
fn seat_index_wraps_around_the_table() {
    let last = SeatIndex(8);
    assert_eq!(last.next(9), SeatIndex(0));
    assert_eq!(SeatIndex(3).next(9), SeatIndex(4));
}

/// ===============
/// Улицы и конфигурация
/// ===============

#[test]
fn street_progression_and_board_cards() {
    assert_eq!(Street::Preflop.next(), Some(Street::Flop));
    assert_eq!(Street::Flop.next(), Some(Street::Turn));
    assert_eq!(Street::Turn.next(), Some(Street::River));
    assert_eq!(Street::River.next(), Some(Street::Showdown));
    assert_eq!(Street::Showdown.next(), None);

    assert_eq!(Street::Flop.cards_to_deal(), 3);
    assert_eq!(Street::Turn.cards_to_deal(), 1);
    assert_eq!(Street::River.cards_to_deal(), 1);
    assert_eq!(Street::Preflop.cards_to_deal(), 0);
}

#[test]
fn config_validation_rejects_bad_blinds_and_limits() {
    let ok = GameConfig::new(Chips(50), Chips(100), 9);
    assert!(ok.validate().is_ok());

    let mut zero_sb = ok.clone();
    zero_sb.small_blind = Chips::ZERO;
    assert!(zero_sb.validate().is_err());

    let mut bb_below_sb = ok.clone();
    bb_below_sb.big_blind = Chips(40);
    assert!(bb_below_sb.validate().is_err());

    let mut too_many_seats = ok.clone();
    too_many_seats.max_players = 10;
    assert!(too_many_seats.validate().is_err());

    let mut solo = ok;
    solo.min_players = 1;
    assert!(solo.validate().is_err());
}
