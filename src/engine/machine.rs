//! Оркестратор раздачи: применение команд к GameState.
//!
//! Поток одной команды:
//!   валидация → мутация клона (стеки/ставки/банк) → проверка конца
//!   раунда → переход улицы / авто-докрутка / шоудаун → события.

use log::{debug, trace};

use crate::domain::{
    Chips, Deck, HandState, PlayerAtTable, PlayerId, PlayerStatus, SeatIndex, Street,
};
use crate::engine::actions::{ActionKind, AppliedAction, Command, PlayerAction};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::events::{GameEvent, SettlementSnapshot, WinnerSummary};
use crate::engine::positions::{
    active_seats_from, blind_seats, next_dealer, order_after_aggressor, postflop_order,
    preflop_order,
};
use crate::engine::side_pots::{compute_side_pots, split_pot, SidePot};
use crate::engine::state::{GameState, GameStatus};
use crate::engine::validation::{next_min_raise, validate_action};
use crate::engine::RandomSource;
use crate::eval::{evaluate_best_hand, find_winners, HandRank};

/// Результат успешного перехода: новый стейт + события для рассылки.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

/// Применить одну команду к игре.
///
/// Чистая функция: вход не мутируется, вся работа идёт по клону.
/// На успехе версия стейта инкрементируется и выполняется аудит
/// сохранения фишек; несходимость — фатальный инвариант.
pub fn process_action<R: RandomSource>(
    rng: &R,
    state: &GameState,
    command: &Command,
) -> Result<Transition, EngineError> {
    trace!(
        "process_action: game={} version={}",
        state.id,
        state.version
    );

    let mut next = state.clone();
    let mut events = Vec::new();

    match command {
        Command::SitDown {
            player_id,
            seat,
            buy_in,
        } => sit_down(&mut next, &mut events, *player_id, *seat, *buy_in)?,

        Command::Leave { player_id } => leave(&mut next, &mut events, *player_id)?,

        Command::StartHand { seed } => start_hand(rng, &mut next, &mut events, seed)?,

        Command::Player(action) => apply_player_action(&mut next, &mut events, action)?,

        Command::AdvanceStreet => advance_street_command(&mut next, &mut events)?,

        Command::Pause => pause(&mut next, &mut events)?,

        Command::Resume => resume(&mut next, &mut events)?,
    }

    next.version += 1;
    next.audit_chips()?;

    Ok(Transition {
        state: next,
        events,
    })
}

// ---------------------------------------------------------------------------
// Посадка / уход
// ---------------------------------------------------------------------------

fn sit_down(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    player_id: PlayerId,
    seat: SeatIndex,
    buy_in: Chips,
) -> Result<(), EngineError> {
    if state.status.is_in_hand() || state.status == GameStatus::Paused {
        return Err(EngineError::HandAlreadyInProgress);
    }
    if seat.index() >= state.table.seats.len() {
        return Err(EngineError::InvalidSeat(seat));
    }
    if !state.table.is_seat_empty(seat) {
        return Err(EngineError::SeatTaken(seat));
    }
    if state.table.seat_of(player_id).is_some() {
        return Err(EngineError::PlayerAlreadySeated(player_id));
    }
    if buy_in.is_zero() {
        return Err(EngineError::NotEnoughChips {
            need: Chips(1),
            stack: buy_in,
        });
    }

    state.table.seats[seat.index()] = Some(PlayerAtTable::new(player_id, buy_in));
    state.bank += buy_in;
    events.push(GameEvent::PlayerJoined { player_id, seat });
    Ok(())
}

fn leave(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    player_id: PlayerId,
) -> Result<(), EngineError> {
    if state.status.is_in_hand() || state.status == GameStatus::Paused {
        return Err(EngineError::LeaveDuringHand);
    }
    let seat = state
        .table
        .seat_of(player_id)
        .ok_or(EngineError::UnknownPlayer(player_id))?;

    let stack = state.table.player(seat).map(|p| p.stack).unwrap_or(Chips::ZERO);
    state.table.seats[seat.index()] = None;
    state.bank -= stack;
    events.push(GameEvent::PlayerLeft { player_id, seat });
    Ok(())
}

// ---------------------------------------------------------------------------
// Старт раздачи
// ---------------------------------------------------------------------------

fn start_hand<R: RandomSource>(
    rng: &R,
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    seed: &str,
) -> Result<(), EngineError> {
    if state.status.is_in_hand() || state.status == GameStatus::Paused {
        return Err(EngineError::HandAlreadyInProgress);
    }

    // Сброс пер-хендовых полей; нулевые стеки превращаются в Busted.
    for seat_opt in state.table.seats.iter_mut() {
        if let Some(p) = seat_opt {
            p.reset_for_hand();
            if p.stack.is_zero() && matches!(p.status, PlayerStatus::Active) {
                p.status = PlayerStatus::Busted;
            }
        }
    }

    let participants = state
        .table
        .seats
        .iter()
        .filter_map(|s| s.as_ref())
        .filter(|p| p.can_act())
        .count();
    if participants < state.config.min_players as usize {
        return Err(EngineError::NotEnoughPlayers {
            seated: participants,
            required: state.config.min_players as usize,
        });
    }

    state.status = GameStatus::Dealing;
    state.pot.reset();
    state.history.clear();
    state.hands_played += 1;
    let hand_no = state.hands_played;

    // Кнопка и блайнды (хедз-ап: дилер постит малый блайнд).
    let dealer = next_dealer(&state.table).ok_or(EngineError::Internal(
        "не найден дилер при достаточном числе игроков",
    ))?;
    let (sb_seat, bb_seat) = blind_seats(&state.table, dealer).ok_or(EngineError::Internal(
        "не найдены позиции блайндов",
    ))?;
    state.table.dealer = Some(dealer);
    state.table.small_blind = Some(sb_seat);
    state.table.big_blind = Some(bb_seat);

    debug!(
        "start_hand: game={} hand={} dealer={} sb={} bb={}",
        state.id, hand_no, dealer, sb_seat, bb_seat
    );

    events.push(GameEvent::HandStarted {
        hand_no,
        dealer,
        small_blind: state.config.small_blind,
        big_blind: state.config.big_blind,
    });

    // Детерминированная перетасовка по seed'у.
    let mut deck = Deck::standard_52();
    rng.shuffle_deck(&mut deck.cards, seed);
    state.hand = Some(HandState::new(hand_no, deck, seed.to_string()));

    // Карманные карты: по одной, по кругу начиная с малого блайнда.
    let order = active_seats_from(&state.table, sb_seat);
    for _round in 0..2 {
        for &seat in &order {
            let card = state
                .hand
                .as_mut()
                .and_then(|h| h.deck.draw_one())
                .ok_or(EngineError::DeckExhausted)?;
            let player = state
                .table
                .player_mut(seat)
                .ok_or(EngineError::EmptySeat(seat))?;
            player.hole_cards.push(card);
        }
    }
    for &seat in &order {
        let cards = state
            .table
            .player(seat)
            .map(|p| p.hole_cards.clone())
            .unwrap_or_default();
        events.push(GameEvent::HoleCardsDealt { seat, cards });
    }

    // Блайнды. Короткий стек постит олл-ин "за сколько есть".
    let sb = state.config.small_blind;
    let bb = state.config.big_blind;
    post_blind(state, events, sb_seat, ActionKind::SmallBlind, sb)?;
    post_blind(state, events, bb_seat, ActionKind::BigBlind, bb)?;

    // Раунд префлопа: цель — большой блайнд, первый ходит UTG,
    // большой блайнд закрывает очередь (опцион).
    let mut betting = BettingState::new(Street::Preflop, bb, bb, preflop_order(&state.table, bb_seat));
    betting.last_raise = bb;
    betting.last_aggressor = Some(bb_seat);
    state.betting = betting;
    state.status = GameStatus::Preflop;
    state.to_act = state.betting.next_to_act();

    // Все оказались в олл-ине уже на блайндах — докручиваем раздачу.
    if state.betting.is_round_complete() {
        end_of_round(state, events)?;
    }

    Ok(())
}

/// Списать блайнд (не больше стека), отразить в банке, истории и событиях.
fn post_blind(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    seat: SeatIndex,
    kind: ActionKind,
    amount: Chips,
) -> Result<(), EngineError> {
    let player = state
        .table
        .player_mut(seat)
        .ok_or(EngineError::EmptySeat(seat))?;

    let paid = amount.min(player.stack);
    player.stack -= paid;
    player.bet_this_street += paid;
    player.total_committed += paid;
    if player.stack.is_zero() {
        player.status = PlayerStatus::AllIn;
    }
    let player_id = player.player_id;

    state.pot.add_contribution(seat, paid);
    state.history.push(AppliedAction {
        player_id,
        seat,
        kind,
        amount: paid,
    });
    events.push(GameEvent::BlindPosted { seat, kind, amount: paid });
    Ok(())
}

// ---------------------------------------------------------------------------
// Действия игрока
// ---------------------------------------------------------------------------

fn apply_player_action(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    action: &PlayerAction,
) -> Result<(), EngineError> {
    match state.status {
        GameStatus::Preflop | GameStatus::Flop | GameStatus::Turn | GameStatus::River => {}
        GameStatus::Paused => return Err(EngineError::AlreadyPaused),
        _ => return Err(EngineError::NoActiveHand),
    }

    let seat = state
        .table
        .seat_of(action.player_id)
        .ok_or(EngineError::UnknownPlayer(action.player_id))?;

    if state.to_act != Some(seat) {
        return Err(EngineError::NotPlayersTurn(action.player_id));
    }

    let street = state.street().ok_or(EngineError::NoActiveHand)?;
    let current_bet_before = state.betting.current_bet;

    let validated = {
        let player = state
            .table
            .player(seat)
            .ok_or(EngineError::EmptySeat(seat))?;
        validate_action(player, action.kind, &state.betting, &state.config)?
    };

    // Мутация игрока: списание, ставка, статус.
    {
        let player = state
            .table
            .player_mut(seat)
            .ok_or(EngineError::EmptySeat(seat))?;

        player.stack -= validated.debit;
        player.bet_this_street = validated.new_total;
        player.total_committed += validated.debit;

        match action.kind {
            ActionKind::Fold => player.status = PlayerStatus::Folded,
            _ if validated.is_all_in => player.status = PlayerStatus::AllIn,
            _ => {}
        }
    }
    state.pot.add_contribution(seat, validated.debit);

    state.history.push(AppliedAction {
        player_id: action.player_id,
        seat,
        kind: action.kind,
        amount: validated.debit,
    });
    events.push(GameEvent::PlayerActed {
        player_id: action.player_id,
        seat,
        kind: action.kind,
        amount: validated.debit,
        street,
    });

    // Очередь: игрок сходил.
    state.betting.mark_acted(seat);
    state.betting.actions_this_round += 1;

    // Агрессия перестраивает очередь; короткий олл-ин поверх ставки
    // повышает цель колла, но прав на рейз не даёт.
    if validated.new_total > current_bet_before {
        let raise_size = validated.new_total - current_bet_before;
        let reopened = order_after_aggressor(&state.table, seat);
        if validated.reopens {
            let new_min = next_min_raise(&state.config, raise_size);
            state
                .betting
                .on_aggression(seat, validated.new_total, raise_size, new_min, reopened);
        } else {
            state.betting.on_short_all_in(validated.new_total, reopened);
        }
    }

    // Остался один претендент на банк — раздача окончена без шоудауна.
    if state.table.players_in_hand() == 1 {
        return settle_uncontested(state, events);
    }

    if state.betting.is_round_complete() {
        end_of_round(state, events)
    } else {
        state.to_act = state.betting.next_to_act();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Переход улиц
// ---------------------------------------------------------------------------

/// Раунд ставок завершён: следующая улица, авто-докрутка или шоудаун.
fn end_of_round(state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
    let street = state.street().ok_or(EngineError::NoActiveHand)?;

    if street == Street::River {
        return settle_showdown(state, events);
    }

    // Ставки больше невозможны (меньше двух игроков с фишками):
    // либо докручиваем все улицы сразу, либо ждём внешних AdvanceStreet.
    if state.table.players_who_can_act() < 2 {
        state.to_act = None;
        if state.config.auto_run_out {
            while state.street() != Some(Street::River) {
                deal_next_street(state, events)?;
            }
            return settle_showdown(state, events);
        }
        // Режим показа по одной улице: транзакция останавливается,
        // каждую оставшуюся улицу открывает внешний слой командой
        // AdvanceStreet.
        return Ok(());
    }

    deal_next_street(state, events)?;
    state.to_act = state.betting.next_to_act();
    Ok(())
}

/// Открыть следующую улицу: сжечь карту, сдать борд, сбросить раунд ставок.
fn deal_next_street(state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
    let street = state.street().ok_or(EngineError::NoActiveHand)?;
    let next_street = street.next().ok_or(EngineError::Internal(
        "advance за пределами River",
    ))?;
    if next_street == Street::Showdown {
        return Err(EngineError::Internal("advance на Showdown идёт через settle"));
    }

    let hand = state.hand.as_mut().ok_or(EngineError::NoActiveHand)?;
    hand.deck.burn_one().ok_or(EngineError::DeckExhausted)?;
    for _ in 0..next_street.cards_to_deal() {
        let card = hand.deck.draw_one().ok_or(EngineError::DeckExhausted)?;
        hand.board.push(card);
    }
    hand.street = next_street;
    let board = hand.board.clone();

    events.push(GameEvent::StreetAdvanced {
        street: next_street,
        board,
    });

    // Новый раунд ставок: ставки улицы обнуляются, цель = 0,
    // min_raise = большой блайнд, первым ходит сосед кнопки.
    for seat_opt in state.table.seats.iter_mut() {
        if let Some(p) = seat_opt {
            p.bet_this_street = Chips::ZERO;
        }
    }
    let dealer = state.table.dealer.ok_or(EngineError::Internal(
        "нет кнопки в активной раздаче",
    ))?;
    state.betting = BettingState::new(
        next_street,
        Chips::ZERO,
        state.config.big_blind,
        postflop_order(&state.table, dealer),
    );
    state.status = GameStatus::for_street(next_street);
    state.to_act = state.betting.next_to_act();
    Ok(())
}

/// Ручное открытие улицы при auto_run_out = false.
fn advance_street_command(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
) -> Result<(), EngineError> {
    if !state.status.is_in_hand() {
        return Err(EngineError::NoActiveHand);
    }
    if state.config.auto_run_out {
        return Err(EngineError::IllegalAction);
    }
    // Двигать улицы руками можно только когда ставки невозможны.
    if !state.betting.is_round_complete() || state.table.players_who_can_act() >= 2 {
        return Err(EngineError::IllegalAction);
    }

    if state.street() == Some(Street::River) {
        settle_showdown(state, events)
    } else {
        deal_next_street(state, events)?;
        state.betting.to_act.clear();
        state.to_act = None;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Завершение раздачи
// ---------------------------------------------------------------------------

/// Снимок банка и олл-ин флагов до выплат (очистка их сотрёт).
fn settlement_snapshot(state: &GameState, pots: &[SidePot]) -> SettlementSnapshot {
    let all_in_seats = state
        .table
        .seats
        .iter()
        .enumerate()
        .filter_map(|(idx, s)| {
            s.as_ref()
                .filter(|p| matches!(p.status, PlayerStatus::AllIn))
                .map(|_| SeatIndex(idx as u8))
        })
        .collect();

    SettlementSnapshot {
        total_pot: state.pot.total,
        pots: pots.to_vec(),
        all_in_seats,
    }
}

/// Все сфолдили — единственный оставшийся забирает банк без вскрытия.
fn settle_uncontested(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
) -> Result<(), EngineError> {
    let winner_seat = state
        .table
        .seats
        .iter()
        .enumerate()
        .find_map(|(idx, s)| {
            s.as_ref()
                .filter(|p| p.is_in_hand())
                .map(|_| SeatIndex(idx as u8))
        })
        .ok_or(EngineError::Internal("нет победителя при uncontested"))?;

    let pots = compute_side_pots(&state.pot.contributions);
    let snapshot = settlement_snapshot(state, &pots);
    let total_pot = state.pot.total;

    let winner = state
        .table
        .player_mut(winner_seat)
        .ok_or(EngineError::EmptySeat(winner_seat))?;
    winner.stack += total_pot;
    let winner_id = winner.player_id;

    events.push(GameEvent::PotAwarded {
        pot_index: 0,
        awards: split_pot(total_pot, &[winner_seat]),
    });

    let hand_no = state.hand.as_ref().map(|h| h.hand_no).unwrap_or_default();
    events.push(GameEvent::HandCompleted {
        hand_no,
        winners: vec![WinnerSummary {
            player_id: winner_id,
            seat: winner_seat,
            amount: total_pot,
            rank: None,
        }],
        total_pot,
        snapshot,
    });

    debug!(
        "hand settled uncontested: game={} hand={} winner={}",
        state.id, hand_no, winner_id
    );

    finish_hand(state);
    Ok(())
}

/// Шоудаун: оценка рук, победители по каждому банку, выплаты.
fn settle_showdown(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
) -> Result<(), EngineError> {
    state.status = GameStatus::Showdown;
    if let Some(hand) = state.hand.as_mut() {
        hand.street = Street::Showdown;
    }

    let board = state
        .hand
        .as_ref()
        .map(|h| h.board.clone())
        .ok_or(EngineError::NoActiveHand)?;

    let pots = compute_side_pots(&state.pot.contributions);
    let pots_total: u64 = pots.iter().map(|p| p.amount.0).sum();
    if Chips(pots_total) != state.pot.total {
        return Err(EngineError::PotMismatch {
            pots: Chips(pots_total),
            total: state.pot.total,
        });
    }

    let snapshot = settlement_snapshot(state, &pots);
    let total_pot = state.pot.total;

    // Оценка рук всех, кто дошёл до вскрытия (по порядку мест).
    let mut showdown_hands: Vec<(SeatIndex, HandRank)> = Vec::new();
    for (idx, seat_opt) in state.table.seats.iter().enumerate() {
        let seat = SeatIndex(idx as u8);
        if let Some(p) = seat_opt.as_ref() {
            if p.is_in_hand() {
                let rank = evaluate_best_hand(&p.hole_cards, &board);
                events.push(GameEvent::ShowdownReveal {
                    seat,
                    player_id: p.player_id,
                    hole_cards: p.hole_cards.clone(),
                    rank: rank.clone(),
                });
                showdown_hands.push((seat, rank));
            }
        }
    }

    // Победители и выплаты по каждому банку, от главного к старшим.
    let mut winner_totals: Vec<WinnerSummary> = Vec::new();
    for (pot_index, pot) in pots.iter().enumerate() {
        let contenders: Vec<(SeatIndex, HandRank)> = showdown_hands
            .iter()
            .filter(|(seat, _)| pot.eligible_seats.contains(seat))
            .cloned()
            .collect();

        let (winners, rank) = match find_winners(&contenders) {
            Some(found) => found,
            // Банк без живых претендентов не бывает: его слои образованы
            // вкладами, а вклад сфолдившего остаётся, но сам он не
            // претендует — выше всегда есть хотя бы один в раздаче.
            None => return Err(EngineError::Internal("банк без претендентов")),
        };

        let awards = split_pot(pot.amount, &winners);
        for award in &awards {
            let player = state
                .table
                .player_mut(award.seat)
                .ok_or(EngineError::EmptySeat(award.seat))?;
            player.stack += award.amount;

            match winner_totals.iter_mut().find(|w| w.seat == award.seat) {
                Some(w) => w.amount += award.amount,
                None => winner_totals.push(WinnerSummary {
                    player_id: player.player_id,
                    seat: award.seat,
                    amount: award.amount,
                    rank: Some(rank.clone()),
                }),
            }
        }

        events.push(GameEvent::PotAwarded { pot_index, awards });
    }

    let hand_no = state.hand.as_ref().map(|h| h.hand_no).unwrap_or_default();
    events.push(GameEvent::HandCompleted {
        hand_no,
        winners: winner_totals,
        total_pot,
        snapshot,
    });

    debug!(
        "hand settled at showdown: game={} hand={} pot={}",
        state.id, hand_no, total_pot
    );

    finish_hand(state);
    Ok(())
}

/// Очистка после выплат: банк пуст, ход ничей, нулевые стеки — Busted.
/// Борд и карманные карты остаются до следующего StartHand.
fn finish_hand(state: &mut GameState) {
    for seat_opt in state.table.seats.iter_mut() {
        if let Some(p) = seat_opt {
            p.bet_this_street = Chips::ZERO;
            if p.stack.is_zero()
                && !matches!(p.status, PlayerStatus::SittingOut | PlayerStatus::Busted)
            {
                p.status = PlayerStatus::Busted;
            }
        }
    }
    state.pot.reset();
    state.betting = BettingState::idle();
    state.to_act = None;
    state.status = GameStatus::Completed;
}

// ---------------------------------------------------------------------------
// Пауза
// ---------------------------------------------------------------------------

fn pause(state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
    if state.status == GameStatus::Paused {
        return Err(EngineError::AlreadyPaused);
    }
    if !state.status.is_in_hand() {
        return Err(EngineError::NoActiveHand);
    }
    state.paused_from = Some(state.status);
    state.status = GameStatus::Paused;
    events.push(GameEvent::GamePaused);
    Ok(())
}

fn resume(state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
    if state.status != GameStatus::Paused {
        return Err(EngineError::NotPaused);
    }
    state.status = state
        .paused_from
        .take()
        .ok_or(EngineError::Internal("Paused без paused_from"))?;
    events.push(GameEvent::GameResumed);
    Ok(())
}
