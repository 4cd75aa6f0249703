use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Статус игрока в контексте стола/раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен в текущей раздаче и может делать ставки.
    Active,
    /// Игрок сфолдил и больше не претендует на банк.
    Folded,
    /// Игрок в олл-ине — участвует в банке, но ставить больше не может.
    AllIn,
    /// Игрок сидит за столом, но в раздаче не участвует.
    SittingOut,
    /// Нулевой стек по итогам раздачи — место освобождает внешний слой.
    Busted,
}

/// Состояние игрока за столом.
///
/// Живёт между раздачами (стек переносится), пер-хендовые поля
/// (карты, ставки, флаги) сбрасывает `reset_for_hand`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAtTable {
    pub player_id: PlayerId,
    /// Текущий стек.
    pub stack: Chips,
    /// Ставка на текущей улице.
    pub bet_this_street: Chips,
    /// Сколько всего внесено в банк за раздачу (для сайд-потов).
    pub total_committed: Chips,
    pub status: PlayerStatus,
    /// Карманные карты (0 или 2 для холдема).
    pub hole_cards: Vec<Card>,
}

impl PlayerAtTable {
    pub fn new(player_id: PlayerId, stack: Chips) -> Self {
        Self {
            player_id,
            stack,
            bet_this_street: Chips::ZERO,
            total_committed: Chips::ZERO,
            status: PlayerStatus::Active,
            hole_cards: Vec::new(),
        }
    }

    /// Участвует ли игрок в текущем банке.
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Может ли игрок ещё делать ставки.
    pub fn can_act(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }

    /// Сброс пер-хендовых полей перед новой раздачей.
    /// Busted / SittingOut статусы не трогаем.
    pub fn reset_for_hand(&mut self) {
        self.bet_this_street = Chips::ZERO;
        self.total_committed = Chips::ZERO;
        self.hole_cards.clear();
        if !matches!(self.status, PlayerStatus::Busted | PlayerStatus::SittingOut) {
            self.status = PlayerStatus::Active;
        }
    }
}
