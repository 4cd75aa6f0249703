use thiserror::Error;

use crate::domain::{Chips, PlayerId, SeatIndex};

/// Класс ошибки: определяет, как внешний слой должен на неё реагировать.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Недопустимое действие игрока: команда отклонена, состояние не
    /// изменилось, ход игрока не потрачен.
    Validation,
    /// Структурная ошибка команды (неизвестный игрок, неверная фаза):
    /// состояние не изменилось, нужен лог/алерт.
    Structural,
    /// Нарушение инварианта движка (несходимость фишек, дубль карты):
    /// транзакция прервана, требуется расследование, не ретрай.
    Invariant,
}

/// Ошибки движка. Движок никогда не паникует через границу —
/// всё возвращается значением.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    // --- Валидация действий ---
    #[error("Сейчас не ход игрока {0}")]
    NotPlayersTurn(PlayerId),

    #[error("Недопустимое действие в текущем состоянии раздачи")]
    IllegalAction,

    #[error("Невозможно сделать check — нужно уравнять ставку {0}")]
    CannotCheck(Chips),

    #[error("Невозможно сделать call — нет ставки для уравнивания")]
    CannotCall,

    #[error("Bet {bet} меньше минимума {min}")]
    BetTooSmall { bet: Chips, min: Chips },

    #[error("Повышение {raise} меньше минимального рейза {min}")]
    RaiseTooSmall { raise: Chips, min: Chips },

    #[error("Недостаточно фишек: нужно {need}, в стеке {stack}")]
    NotEnoughChips { need: Chips, stack: Chips },

    #[error("Игрок уже сфолдил")]
    AlreadyFolded,

    // --- Структурные ошибки ---
    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("Место {0} пустое")]
    EmptySeat(SeatIndex),

    #[error("Место {0} уже занято")]
    SeatTaken(SeatIndex),

    #[error("Игрок {0} не найден за столом")]
    UnknownPlayer(PlayerId),

    #[error("Игрок {0} уже сидит за столом")]
    PlayerAlreadySeated(PlayerId),

    #[error("Недостаточно игроков для раздачи: {seated} < {required}")]
    NotEnoughPlayers { seated: usize, required: usize },

    #[error("Раздача уже идёт")]
    HandAlreadyInProgress,

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Игра уже на паузе")]
    AlreadyPaused,

    #[error("Игра не на паузе")]
    NotPaused,

    #[error("Нельзя покинуть стол во время раздачи")]
    LeaveDuringHand,

    #[error("Блайнды постит движок, командой их отправить нельзя")]
    BlindNotPostable,

    #[error("Некорректная конфигурация игры: {0}")]
    BadConfig(String),

    #[error("Некорректный снапшот: {0}")]
    MalformedSnapshot(String),

    // --- Нарушения инвариантов ---
    #[error("Нарушение сохранения фишек: ожидалось {expected}, получено {actual}")]
    ChipConservation { expected: Chips, actual: Chips },

    #[error("Сумма банков {pots} не сходится с общим банком {total}")]
    PotMismatch { pots: Chips, total: Chips },

    #[error("Колода исчерпана при раздаче")]
    DeckExhausted,

    #[error("Внутренняя ошибка движка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Класс ошибки по таксономии (валидация / структура / инвариант).
    pub fn kind(&self) -> ErrorKind {
        use EngineError::*;
        match self {
            NotPlayersTurn(_) | IllegalAction | CannotCheck(_) | CannotCall
            | BetTooSmall { .. } | RaiseTooSmall { .. } | NotEnoughChips { .. }
            | AlreadyFolded => ErrorKind::Validation,

            InvalidSeat(_) | EmptySeat(_) | SeatTaken(_) | UnknownPlayer(_)
            | PlayerAlreadySeated(_) | NotEnoughPlayers { .. } | HandAlreadyInProgress
            | NoActiveHand | AlreadyPaused | NotPaused | LeaveDuringHand
            | BlindNotPostable | BadConfig(_) | MalformedSnapshot(_) => ErrorKind::Structural,

            ChipConservation { .. } | PotMismatch { .. } | DeckExhausted | Internal(_) => {
                ErrorKind::Invariant
            }
        }
    }
}
