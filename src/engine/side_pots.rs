//! Сайд-поты и распределение банка.
//!
//! Алгоритм слоёв: уровни вкладов сортируются по возрастанию; каждый
//! отличный уровень образует слой размером (уровень − предыдущий) × число
//! мест с вкладом не ниже уровня. Кто внёс меньше уровня — в слое не
//! участвует; множества eligible вложены по убыванию сверху вниз.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Один банк: главный (cap = уровень младшего олл-ина или весь банк)
/// либо сайд-пот, созданный олл-ином.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Места, претендующие на этот банк (отсортированы по индексу).
    pub eligible_seats: Vec<SeatIndex>,
    /// Уровень вклада, закрывший этот слой (для аудита/снапшота).
    pub cap: Chips,
}

/// Выплата из банка конкретному месту.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotAward {
    pub seat: SeatIndex,
    pub amount: Chips,
}

/// Посчитать банки из суммарных вкладов мест за раздачу.
///
/// Выход упорядочен от главного банка к старшим сайд-потам
/// (по возрастанию cap). Сумма amounts в точности равна сумме вкладов.
pub fn compute_side_pots(contributions: &BTreeMap<SeatIndex, Chips>) -> Vec<SidePot> {
    let mut entries: Vec<(SeatIndex, Chips)> = contributions
        .iter()
        .filter(|(_, chips)| !chips.is_zero())
        .map(|(seat, chips)| (*seat, *chips))
        .collect();

    if entries.is_empty() {
        return Vec::new();
    }

    entries.sort_by_key(|&(seat, chips)| (chips, seat));

    let mut pots: Vec<SidePot> = Vec::new();
    let mut prev_level = Chips::ZERO;

    for &(_, level) in entries.iter() {
        if level == prev_level {
            continue;
        }
        let layer = level - prev_level;

        // В слое участвуют все, чей вклад не ниже уровня.
        let mut eligible: Vec<SeatIndex> = entries
            .iter()
            .filter(|&&(_, c)| c >= level)
            .map(|&(seat, _)| seat)
            .collect();
        eligible.sort_unstable();

        pots.push(SidePot {
            amount: Chips(layer.0 * eligible.len() as u64),
            eligible_seats: eligible,
            cap: level,
        });

        prev_level = level;
    }

    pots
}

/// Поделить банк поровну между победителями.
///
/// Целочисленное деление с раздачей остатка по одной фишке в порядке
/// мест — сумма выплат всегда в точности равна банку, фишки не теряются
/// и не возникают из воздуха.
pub fn split_pot(amount: Chips, winners: &[SeatIndex]) -> Vec<PotAward> {
    if winners.is_empty() || amount.is_zero() {
        return Vec::new();
    }

    let mut sorted: Vec<SeatIndex> = winners.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let n = sorted.len() as u64;
    let share = amount.0 / n;
    let mut remainder = amount.0 % n;

    sorted
        .into_iter()
        .map(|seat| {
            let mut prize = share;
            if remainder > 0 {
                prize += 1;
                remainder -= 1;
            }
            PotAward {
                seat,
                amount: Chips(prize),
            }
        })
        .collect()
}
