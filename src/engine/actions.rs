use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId, SeatIndex};

/// Тип действия игрока.
///
/// `SmallBlind`/`BigBlind` присутствуют в enum, потому что попадают в
/// историю действий и в события, но постит их только сам движок при
/// старте раздачи — как команда игрока они отклоняются.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    /// Bet на улице без текущей ставки.
    Bet(Chips),
    /// Raise до указанной суммарной ставки на улице.
    Raise(Chips),
    /// Поставить весь оставшийся стек.
    AllIn,
    /// Форсированная ставка малого блайнда (только движок).
    SmallBlind,
    /// Форсированная ставка большого блайнда (только движок).
    BigBlind,
}

impl ActionKind {
    /// Является ли действие форсированным блайндом.
    pub fn is_blind(&self) -> bool {
        matches!(self, ActionKind::SmallBlind | ActionKind::BigBlind)
    }
}

/// Действие конкретного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    pub player_id: PlayerId,
    pub kind: ActionKind,
}

/// Команда верхнего уровня, применяемая к одному GameState.
///
/// Внешний слой (CQRS/транспорт) сериализует вызовы по game id;
/// движок видит только упорядоченный поток команд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Посадить игрока за стол (между раздачами).
    SitDown {
        player_id: PlayerId,
        seat: SeatIndex,
        buy_in: Chips,
    },

    /// Убрать игрока из-за стола (между раздачами).
    Leave { player_id: PlayerId },

    /// Начать новую раздачу. Seed задаёт детерминированную перетасовку;
    /// источник энтропии — забота внешнего слоя.
    StartHand { seed: String },

    /// Действие игрока в раздаче (включая форс-фолд/чек по таймауту,
    /// который внешний таймер шлёт как обычное действие).
    Player(PlayerAction),

    /// Открыть следующую улицу вручную (только при auto_run_out = false,
    /// когда ставки уже невозможны).
    AdvanceStreet,

    /// Поставить игру на паузу / снять с паузы.
    Pause,
    Resume,
}

/// Запись в истории действий раздачи: что реально было применено.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppliedAction {
    pub player_id: PlayerId,
    pub seat: SeatIndex,
    pub kind: ActionKind,
    /// Сколько фишек реально ушло из стека этим действием.
    pub amount: Chips,
}
