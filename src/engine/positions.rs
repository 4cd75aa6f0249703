//! Порядок хода и позиции: кнопка, блайнды, очереди действий.
//!
//! Всё движение по кругу — по часовой стрелке от дилерской кнопки.
//! "Активные" места — игроки со статусом Active: фолды, олл-ины,
//! пустые и выбывшие места при обходе пропускаются.

use crate::domain::{PlayerStatus, SeatIndex, Table};

/// Активные места по кругу, начиная с `start` (включительно).
pub fn active_seats_from(table: &Table, start: SeatIndex) -> Vec<SeatIndex> {
    collect_active(table, start, None)
}

/// Следующее активное место по кругу после `start` (не включая start).
pub fn next_active_seat(table: &Table, start: SeatIndex) -> Option<SeatIndex> {
    let max = table.max_seats();
    if max == 0 {
        return None;
    }

    let mut idx = start.next(max);
    for _ in 0..max {
        if is_active(table, idx) {
            return Some(idx);
        }
        idx = idx.next(max);
    }
    None
}

/// Следующая позиция дилерской кнопки:
/// - есть текущая кнопка — следующее активное место (кнопка может
///   указывать на выбывшего, тогда просто идём дальше по кругу);
/// - кнопки ещё не было — первое активное место с нуля.
pub fn next_dealer(table: &Table) -> Option<SeatIndex> {
    match table.dealer {
        Some(button) => next_active_seat(table, button),
        None => active_seats_from(table, SeatIndex(0)).first().copied(),
    }
}

/// Позиции блайндов относительно кнопки.
///
/// Хедз-ап — особый случай: дилер постит малый блайнд,
/// второй игрок — большой.
pub fn blind_seats(table: &Table, dealer: SeatIndex) -> Option<(SeatIndex, SeatIndex)> {
    let order = active_seats_from(table, dealer);
    match order.len() {
        0 | 1 => None,
        2 => Some((order[0], order[1])), // heads-up: дилер = SB
        _ => Some((order[1], order[2])),
    }
}

/// Очередь действий на префлопе: первым ходит сосед большого блайнда (UTG),
/// дальше по кругу, большой блайнд закрывает очередь (у него опцион).
pub fn preflop_order(table: &Table, big_blind: SeatIndex) -> Vec<SeatIndex> {
    collect_active(table, big_blind.next(table.max_seats()), None)
}

/// Очередь действий на постфлоп улицах: первым ходит первый активный
/// слева от кнопки (место малого блайнда, пропуская фолды/олл-ины/пустые),
/// кнопка закрывает очередь.
pub fn postflop_order(table: &Table, dealer: SeatIndex) -> Vec<SeatIndex> {
    collect_active(table, dealer.next(table.max_seats()), None)
}

/// Очередь после рейза: все активные по кругу, начиная с соседа рейзера;
/// сам рейзер не включается — действие должно вернуться к нему без
/// нового повышения.
pub fn order_after_aggressor(table: &Table, aggressor: SeatIndex) -> Vec<SeatIndex> {
    collect_active(table, aggressor.next(table.max_seats()), Some(aggressor))
}

fn is_active(table: &Table, seat: SeatIndex) -> bool {
    table
        .player(seat)
        .map(|p| matches!(p.status, PlayerStatus::Active))
        .unwrap_or(false)
}

/// Активные места по кругу, начиная с `first`, каждое не более одного
/// раза; `exclude` пропускается.
fn collect_active(table: &Table, first: SeatIndex, exclude: Option<SeatIndex>) -> Vec<SeatIndex> {
    let max = table.max_seats();
    let mut order = Vec::new();
    if max == 0 {
        return order;
    }

    let mut idx = first;
    for _ in 0..max {
        if Some(idx) != exclude && is_active(table, idx) {
            order.push(idx);
        }
        idx = idx.next(max);
    }
    order
}
