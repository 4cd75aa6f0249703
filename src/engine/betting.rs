use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex, Street};

/// Состояние раунда ставок на конкретной улице. Сбрасывается при входе
/// на новую улицу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Улица, к которой относится раунд.
    pub street: Street,
    /// Целевая ставка улицы, до которой должны дотянуться игроки.
    pub current_bet: Chips,
    /// Минимальный размер повышающей части следующего рейза.
    pub min_raise: Chips,
    /// Размер последнего повышения (для правила min_raise = last raise).
    pub last_raise: Chips,
    /// Seat последнего агрессора (bet/raise/полноценный all-in).
    pub last_aggressor: Option<SeatIndex>,
    /// Очередь ходящих по кругу: кто ещё должен действовать на улице.
    /// Раунд завершён ⇔ очередь пуста. При рейзе очередь перестраивается,
    /// что и кодирует правило "действие вернулось к агрессору".
    pub to_act: Vec<SeatIndex>,
    /// Сколько действий уже применено в этом раунде.
    pub actions_this_round: u32,
}

impl BettingState {
    pub fn new(street: Street, current_bet: Chips, min_raise: Chips, to_act: Vec<SeatIndex>) -> Self {
        Self {
            street,
            current_bet,
            min_raise,
            last_raise: Chips::ZERO,
            last_aggressor: None,
            to_act,
            actions_this_round: 0,
        }
    }

    /// Пустой раунд (до старта раздачи).
    pub fn idle() -> Self {
        Self::new(Street::Preflop, Chips::ZERO, Chips::ZERO, Vec::new())
    }

    /// Первый в очереди — тот, чей сейчас ход.
    pub fn next_to_act(&self) -> Option<SeatIndex> {
        self.to_act.first().copied()
    }

    /// Убрать seat из очереди (игрок сходил / сфолдил / в олл-ине).
    pub fn mark_acted(&mut self, seat: SeatIndex) {
        self.to_act.retain(|s| *s != seat);
    }

    /// Обновить состояние после bet/raise: новая целевая ставка, новый
    /// min_raise (считает валидация по хаус-рулу), агрессор, перезапуск
    /// очереди — все, кто уже ходил, должны отреагировать снова.
    pub fn on_aggression(
        &mut self,
        seat: SeatIndex,
        new_bet: Chips,
        raise_size: Chips,
        new_min_raise: Chips,
        new_to_act: Vec<SeatIndex>,
    ) {
        self.current_bet = new_bet;
        self.last_raise = raise_size;
        self.min_raise = new_min_raise;
        self.last_aggressor = Some(seat);
        self.to_act = new_to_act;
    }

    /// Олл-ин "недорейзом": целевая ставка растёт, очередь переоткрывается
    /// (остальным нужно доплатить), но min_raise и агрессор не меняются —
    /// короткий олл-ин не даёт новых прав на рейз.
    pub fn on_short_all_in(&mut self, new_bet: Chips, new_to_act: Vec<SeatIndex>) {
        self.current_bet = new_bet;
        self.to_act = new_to_act;
    }

    /// Раунд ставок завершён: никто больше не должен ходить.
    pub fn is_round_complete(&self) -> bool {
        self.to_act.is_empty()
    }
}
