//! Тесты валидации ставок: check/call/bet/raise/all-in, границы
//! мин-рейза по обоим хаус-рулам, набор легальных действий.

use holdem_engine::domain::{Chips, GameConfig, PlayerAtTable, PlayerStatus, Street};
use holdem_engine::engine::{
    validate_action, ActionKind, BettingState, EngineError, ErrorKind,
};
use holdem_engine::engine::validation::{legal_actions, next_min_raise};

const SB: Chips = Chips(50);
const BB: Chips = Chips(100);

fn config() -> GameConfig {
    GameConfig::new(SB, BB, 9)
}

fn player(stack: u64, bet_this_street: u64) -> PlayerAtTable {
    let mut p = PlayerAtTable::new(1, Chips(stack));
    p.bet_this_street = Chips(bet_this_street);
    p
}

/// Раунд без живой ставки (постфлоп до первого бета).
fn open_round() -> BettingState {
    BettingState::new(Street::Flop, Chips::ZERO, BB, vec![])
}

/// Раунд с живой ставкой `bet` и min_raise = BB.
fn facing_bet(bet: u64) -> BettingState {
    BettingState::new(Street::Flop, Chips(bet), BB, vec![])
}

/// ===============
/// Check / Call
/// ===============

#[test]
fn check_is_legal_only_without_a_live_bet() {
    let p = player(1_000, 0);

    assert!(validate_action(&p, ActionKind::Check, &open_round(), &config()).is_ok());

    let err = validate_action(&p, ActionKind::Check, &facing_bet(50), &config())
        .expect_err("check против ставки запрещён");
    assert_eq!(err, EngineError::CannotCheck(Chips(50)));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn call_requires_a_live_bet() {
    let p = player(1_000, 0);

    let err = validate_action(&p, ActionKind::Call, &open_round(), &config())
        .expect_err("нечего уравнивать");
    assert_eq!(err, EngineError::CannotCall);

    let ok = validate_action(&p, ActionKind::Call, &facing_bet(300), &config())
        .expect("колл против ставки легален");
    assert_eq!(ok.debit, Chips(300));
    assert_eq!(ok.new_total, Chips(300));
    assert!(!ok.is_all_in);
    assert!(!ok.reopens, "колл — не агрессия");
}

#[test]
fn call_accounts_for_chips_already_committed() {
    // Игрок уже поставил 100 (например, блайнд), цель улицы 250.
    let p = player(1_000, 100);
    let ok = validate_action(&p, ActionKind::Call, &facing_bet(250), &config())
        .expect("доплата до цели");
    assert_eq!(ok.debit, Chips(150));
    assert_eq!(ok.new_total, Chips(250));
}

#[test]
fn short_stack_call_becomes_all_in() {
    let p = player(120, 0);
    let ok = validate_action(&p, ActionKind::Call, &facing_bet(500), &config())
        .expect("короткий колл всегда легален");
    assert_eq!(ok.debit, Chips(120), "списывается весь стек");
    assert_eq!(ok.new_total, Chips(120));
    assert!(ok.is_all_in);
}

/// ===============
/// Bet
/// ===============

#[test]
fn bet_is_illegal_when_a_bet_is_live() {
    let p = player(1_000, 0);
    let err = validate_action(&p, ActionKind::Bet(Chips(200)), &facing_bet(100), &config())
        .expect_err("при живой ставке нужен raise");
    assert_eq!(err, EngineError::IllegalAction);
}

#[test]
fn bet_floor_is_the_big_blind() {
    let p = player(1_000, 0);

    let err = validate_action(&p, ActionKind::Bet(Chips(40)), &open_round(), &config())
        .expect_err("бет ниже BB запрещён");
    assert_eq!(
        err,
        EngineError::BetTooSmall {
            bet: Chips(40),
            min: BB
        }
    );

    let ok = validate_action(&p, ActionKind::Bet(BB), &open_round(), &config())
        .expect("ровно BB легален");
    assert_eq!(ok.debit, BB);
    assert!(ok.reopens);
}

#[test]
fn all_in_bet_below_floor_is_allowed() {
    // Весь стек меньше BB — единственное исключение из нижней границы.
    let p = player(60, 0);
    let ok = validate_action(&p, ActionKind::Bet(Chips(60)), &open_round(), &config())
        .expect("олл-ин на весь стек легален");
    assert!(ok.is_all_in);
}

#[test]
fn bet_cannot_exceed_the_stack() {
    let p = player(500, 0);
    let err = validate_action(&p, ActionKind::Bet(Chips(600)), &open_round(), &config())
        .expect_err("ставить больше стека нельзя");
    assert_eq!(
        err,
        EngineError::NotEnoughChips {
            need: Chips(600),
            stack: Chips(500)
        }
    );
}

/// ===============
/// Raise
/// ===============

#[test]
fn raise_must_meet_the_minimum_increment() {
    let p = player(2_000, 0);
    let betting = facing_bet(200); // min_raise = 100

    let err = validate_action(&p, ActionKind::Raise(Chips(250)), &betting, &config())
        .expect_err("повышение на 50 меньше мин-рейза");
    assert_eq!(
        err,
        EngineError::RaiseTooSmall {
            raise: Chips(50),
            min: BB
        }
    );

    let ok = validate_action(&p, ActionKind::Raise(Chips(300)), &betting, &config())
        .expect("повышение ровно на мин-рейз легально");
    assert_eq!(ok.debit, Chips(300));
    assert_eq!(ok.new_total, Chips(300));
    assert!(ok.reopens, "полноценный рейз переоткрывает торги");
}

#[test]
fn raise_without_a_live_bet_is_a_bet() {
    let p = player(1_000, 0);
    let err = validate_action(&p, ActionKind::Raise(Chips(200)), &open_round(), &config())
        .expect_err("без живой ставки это bet");
    assert_eq!(err, EngineError::IllegalAction);
}

#[test]
fn short_all_in_raise_does_not_reopen_betting() {
    // Цель 100, мин-рейз 100; стек 130 — олл-ин повышает цель до 130,
    // но прав на ре-рейз остальным не даёт.
    let p = player(130, 0);
    let ok = validate_action(&p, ActionKind::AllIn, &facing_bet(100), &config())
        .expect("олл-ин легален всегда при ненулевом стеке");
    assert_eq!(ok.new_total, Chips(130));
    assert!(ok.is_all_in);
    assert!(!ok.reopens, "недорейз не переоткрывает торги");
}

#[test]
fn full_all_in_raise_reopens_betting() {
    let p = player(500, 0);
    let ok = validate_action(&p, ActionKind::AllIn, &facing_bet(100), &config())
        .expect("олл-ин легален");
    assert_eq!(ok.new_total, Chips(500));
    assert!(ok.reopens, "повышение на 400 >= мин-рейза 100");
}

/// ===============
/// Статусы и блайнды
/// ===============

#[test]
fn folded_and_all_in_players_cannot_act() {
    let mut folded = player(1_000, 0);
    folded.status = PlayerStatus::Folded;
    assert_eq!(
        validate_action(&folded, ActionKind::Check, &open_round(), &config()),
        Err(EngineError::AlreadyFolded)
    );

    let mut all_in = player(0, 500);
    all_in.status = PlayerStatus::AllIn;
    assert_eq!(
        validate_action(&all_in, ActionKind::Check, &open_round(), &config()),
        Err(EngineError::IllegalAction)
    );
}

#[test]
fn blinds_are_not_postable_as_player_commands() {
    let p = player(1_000, 0);
    for kind in [ActionKind::SmallBlind, ActionKind::BigBlind] {
        assert_eq!(
            validate_action(&p, kind, &open_round(), &config()),
            Err(EngineError::BlindNotPostable)
        );
    }
}

/// ===============
/// Легальные действия
/// ===============

#[test]
fn legal_actions_facing_a_bet() {
    let p = player(1_000, 0);
    let actions = legal_actions(&p, &facing_bet(50));

    assert!(actions.contains(&ActionKind::Fold));
    assert!(actions.contains(&ActionKind::Call));
    assert!(actions.contains(&ActionKind::AllIn));
    assert!(!actions.contains(&ActionKind::Check), "check против ставки нелегален");
    assert!(
        !actions.iter().any(|a| matches!(a, ActionKind::Bet(_))),
        "bet при живой ставке нелегален"
    );
    assert!(
        actions.iter().any(|a| matches!(a, ActionKind::Raise(_))),
        "стека хватает на рейз"
    );
}

#[test]
fn legal_actions_without_a_bet() {
    let p = player(1_000, 0);
    let actions = legal_actions(&p, &open_round());

    assert!(actions.contains(&ActionKind::Fold));
    assert!(actions.contains(&ActionKind::Check));
    assert!(actions.iter().any(|a| matches!(a, ActionKind::Bet(_))));
    assert!(!actions.contains(&ActionKind::Call));
}

#[test]
fn suggested_raise_is_capped_by_the_stack() {
    // Стек 150 против ставки 100 с мин-рейзом 100: полный рейз до 200
    // недоступен, предложение обязано быть рейзом-олл-ином до 150.
    let p = player(150, 0);
    let actions = legal_actions(&p, &facing_bet(100));

    let suggested = actions
        .iter()
        .find_map(|a| match a {
            ActionKind::Raise(total) => Some(*total),
            _ => None,
        })
        .expect("стек больше цены колла — рейз предлагается");
    assert_eq!(suggested, Chips(150), "предложение не превышает стек");

    // Предложенное действие обязано проходить валидацию (олл-ин недорейзом).
    let ok = validate_action(&p, ActionKind::Raise(suggested), &facing_bet(100), &config())
        .expect("предложенный рейз валиден");
    assert!(ok.is_all_in);
}

#[test]
fn suggested_bet_is_capped_by_the_stack() {
    // Стек 60 меньше BB: предлагается бет-олл-ин на весь стек.
    let p = player(60, 0);
    let actions = legal_actions(&p, &open_round());

    let suggested = actions
        .iter()
        .find_map(|a| match a {
            ActionKind::Bet(amount) => Some(*amount),
            _ => None,
        })
        .expect("бет предлагается на открытой улице");
    assert_eq!(suggested, Chips(60));
    assert!(validate_action(&p, ActionKind::Bet(suggested), &open_round(), &config()).is_ok());
}

#[test]
fn short_stack_cannot_raise_only_call_or_shove() {
    // Стек 80 при цели 100: рейз невозможен, колл уходит в олл-ин.
    let p = player(80, 0);
    let actions = legal_actions(&p, &facing_bet(100));
    assert!(actions.contains(&ActionKind::Call));
    assert!(actions.contains(&ActionKind::AllIn));
    assert!(!actions.iter().any(|a| matches!(a, ActionKind::Raise(_))));
}

/// ===============
/// Хаус-рулы мин-рейза
/// ===============

#[test]
fn default_min_raise_tracks_the_last_raise() {
    let cfg = config();
    assert_eq!(next_min_raise(&cfg, Chips(300)), Chips(300));
    // BB — нижняя граница, даже если повышение было меньше.
    assert_eq!(next_min_raise(&cfg, Chips(60)), BB);
}

#[test]
fn fixed_min_raise_rule_pins_the_minimum_to_bb() {
    let mut cfg = config();
    cfg.fixed_min_raise = true;
    assert_eq!(next_min_raise(&cfg, Chips(700)), BB);
    assert_eq!(next_min_raise(&cfg, Chips(60)), BB);
}
