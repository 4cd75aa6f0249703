use core::fmt;

use serde::{Deserialize, Serialize};

/// Индекс места за столом (0..max_seats-1).
///
/// Обёртка над u8 вместо алиаса: индекс места и количество фишек —
/// разные величины, смешивать их в арифметике нельзя.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct SeatIndex(pub u8);

impl SeatIndex {
    pub fn new(idx: u8) -> Self {
        SeatIndex(idx)
    }

    /// Индекс для доступа к вектору мест.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Следующее место по кругу при max мест за столом.
    pub fn next(self, max_seats: u8) -> SeatIndex {
        SeatIndex((self.0 + 1) % max_seats.max(1))
    }
}

impl fmt::Display for SeatIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
