use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, HandId, PlayerId, SeatIndex, Street};
use crate::engine::actions::ActionKind;
use crate::engine::side_pots::{PotAward, SidePot};
use crate::eval::HandRank;

/// Снимок состояния банка до раздачи выигрышей: очистка раздачи стирает
/// ставки и олл-ин флаги, поэтому событие HandCompleted несёт их копию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementSnapshot {
    pub total_pot: Chips,
    pub pots: Vec<SidePot>,
    /// Места, бывшие в олл-ине на момент расчёта.
    pub all_in_seats: Vec<SeatIndex>,
}

/// Итог одного победителя (по всем банкам суммарно).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerSummary {
    pub player_id: PlayerId,
    pub seat: SeatIndex,
    pub amount: Chips,
    /// Ранг руки — None, если раздача закончилась без шоудауна.
    pub rank: Option<HandRank>,
}

/// Типизированные события перехода. Движок возвращает их упорядоченным
/// списком; рассылку/персист делает внешний слой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEvent {
    HandStarted {
        hand_no: HandId,
        dealer: SeatIndex,
        small_blind: Chips,
        big_blind: Chips,
    },

    /// Форсированная ставка (SB/BB); amount — сколько реально ушло
    /// из стека (короткий стек постит меньше номинала).
    BlindPosted {
        seat: SeatIndex,
        kind: ActionKind,
        amount: Chips,
    },

    /// Карманные карты сданы месту (по одной, round-robin).
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    PlayerActed {
        player_id: PlayerId,
        seat: SeatIndex,
        kind: ActionKind,
        amount: Chips,
        street: Street,
    },

    StreetAdvanced {
        street: Street,
        board: Vec<Card>,
    },

    /// Шоудаун: вскрытие карт места.
    ShowdownReveal {
        seat: SeatIndex,
        player_id: PlayerId,
        hole_cards: Vec<Card>,
        rank: HandRank,
    },

    /// Выплата конкретного банка.
    PotAwarded {
        pot_index: usize,
        awards: Vec<PotAward>,
    },

    HandCompleted {
        hand_no: HandId,
        winners: Vec<WinnerSummary>,
        total_pot: Chips,
        /// Снимок до мутаций выплат.
        snapshot: SettlementSnapshot,
    },

    GamePaused,
    GameResumed,

    PlayerJoined { player_id: PlayerId, seat: SeatIndex },
    PlayerLeft { player_id: PlayerId, seat: SeatIndex },
}
