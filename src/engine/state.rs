use serde::{Deserialize, Serialize};

use crate::domain::{
    Chips, GameConfig, GameId, HandId, HandState, SeatIndex, Street, Table,
};
use crate::engine::actions::AppliedAction;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::pot::Pot;

/// Статус игры. Улицы раздачи подняты на уровень статуса, чтобы внешнему
/// слою не приходилось заглядывать внутрь HandState.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    /// Ждём игроков / следующей раздачи.
    Waiting,
    /// Идёт раздача карт и постановка блайндов.
    Dealing,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    /// Раздача завершена, выплаты сделаны.
    Completed,
    /// Пауза; статус до паузы хранится в `GameState::paused_from`.
    Paused,
}

impl GameStatus {
    /// Статус, соответствующий улице раздачи.
    pub fn for_street(street: Street) -> GameStatus {
        match street {
            Street::Preflop => GameStatus::Preflop,
            Street::Flop => GameStatus::Flop,
            Street::Turn => GameStatus::Turn,
            Street::River => GameStatus::River,
            Street::Showdown => GameStatus::Showdown,
        }
    }

    /// Находится ли игра внутри раздачи.
    pub fn is_in_hand(self) -> bool {
        matches!(
            self,
            GameStatus::Dealing
                | GameStatus::Preflop
                | GameStatus::Flop
                | GameStatus::Turn
                | GameStatus::River
                | GameStatus::Showdown
        )
    }
}

/// Агрегат игры: единственный владелец всего состояния одной игры.
///
/// Значение иммутабельно для внешнего слоя: `process_action` берёт
/// `&GameState` и возвращает новый стейт. Внутри движка мутации идут
/// по клону, так что ошибка на любом шаге оставляет оригинал нетронутым.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub id: GameId,
    pub status: GameStatus,
    /// Статус, из которого игра ушла на паузу (только при Paused).
    pub paused_from: Option<GameStatus>,
    pub config: GameConfig,
    pub table: Table,
    /// Пер-хендовое состояние; None вне раздачи.
    pub hand: Option<HandState>,
    pub betting: BettingState,
    pub pot: Pot,
    /// Чей сейчас ход (максимум один игрок в любой момент).
    pub to_act: Option<SeatIndex>,
    /// История применённых действий текущей раздачи.
    pub history: Vec<AppliedAction>,
    /// Сколько раздач уже сыграно (номер следующей = hands_played + 1).
    pub hands_played: HandId,
    /// Счётчик версий для оптимистичной конкуренции внешнего слоя.
    /// Инкрементируется на каждом успешном переходе.
    pub version: u64,
    /// Эталонная сумма фишек в игре (стеки + банк). Меняется только
    /// посадкой/уходом игроков; всё остальное обязано её сохранять.
    pub bank: Chips,
}

impl GameState {
    pub fn new(id: GameId, config: GameConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::BadConfig)?;
        let table = Table::new(config.max_players);
        Ok(Self {
            id,
            status: GameStatus::Waiting,
            paused_from: None,
            config,
            table,
            hand: None,
            betting: BettingState::idle(),
            pot: Pot::new(),
            to_act: None,
            history: Vec::new(),
            hands_played: 0,
            version: 0,
            bank: Chips::ZERO,
        })
    }

    /// Фактическая сумма фишек: стеки + банк.
    /// Ставки текущей улицы уже учтены внутри pot.total.
    pub fn chip_total(&self) -> Chips {
        let stacks: u64 = self
            .table
            .seats
            .iter()
            .filter_map(|s| s.as_ref())
            .map(|p| p.stack.0)
            .sum();
        Chips(stacks) + self.pot.total
    }

    /// Аудит сохранения фишек. Несходимость — фатальный инвариант,
    /// не подлежащий "тихому" исправлению.
    pub fn audit_chips(&self) -> Result<(), EngineError> {
        let actual = self.chip_total();
        if actual != self.bank {
            return Err(EngineError::ChipConservation {
                expected: self.bank,
                actual,
            });
        }
        Ok(())
    }

    /// Текущая улица, если раздача идёт.
    pub fn street(&self) -> Option<Street> {
        self.hand.as_ref().map(|h| h.street)
    }
}
