use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerAtTable;
use crate::domain::seat::SeatIndex;
use crate::domain::PlayerId;

/// Места за столом и позиционные маркеры (кнопка, блайнды).
///
/// Карты борда и банк здесь не живут — это пер-хендовое состояние
/// (`HandState` / `Pot`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    /// Места за столом: индекс вектора = SeatIndex. None — место пустое.
    pub seats: Vec<Option<PlayerAtTable>>,

    /// Позиция дилерской кнопки (None до первой раздачи).
    pub dealer: Option<SeatIndex>,
    /// Позиция малого блайнда в текущей раздаче.
    pub small_blind: Option<SeatIndex>,
    /// Позиция большого блайнда в текущей раздаче.
    pub big_blind: Option<SeatIndex>,
}

impl Table {
    pub fn new(max_seats: u8) -> Self {
        Self {
            seats: vec![None; max_seats as usize],
            dealer: None,
            small_blind: None,
            big_blind: None,
        }
    }

    pub fn max_seats(&self) -> u8 {
        self.seats.len() as u8
    }

    pub fn seated_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&PlayerAtTable> {
        self.seats.get(seat.index()).and_then(|s| s.as_ref())
    }

    pub fn player_mut(&mut self, seat: SeatIndex) -> Option<&mut PlayerAtTable> {
        self.seats.get_mut(seat.index()).and_then(|s| s.as_mut())
    }

    /// Найти место игрока по его id.
    pub fn seat_of(&self, player_id: PlayerId) -> Option<SeatIndex> {
        self.seats.iter().enumerate().find_map(|(idx, seat)| {
            seat.as_ref()
                .filter(|p| p.player_id == player_id)
                .map(|_| SeatIndex(idx as u8))
        })
    }

    pub fn is_seat_empty(&self, seat: SeatIndex) -> bool {
        self.seats
            .get(seat.index())
            .map(|s| s.is_none())
            .unwrap_or(true)
    }

    /// Сколько игроков участвует в текущем банке (Active + AllIn).
    pub fn players_in_hand(&self) -> usize {
        self.seats
            .iter()
            .filter_map(|s| s.as_ref())
            .filter(|p| p.is_in_hand())
            .count()
    }

    /// Сколько игроков ещё может делать ставки.
    pub fn players_who_can_act(&self) -> usize {
        self.seats
            .iter()
            .filter_map(|s| s.as_ref())
            .filter(|p| p.can_act())
            .count()
    }
}
