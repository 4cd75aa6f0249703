use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Банк раздачи: общая сумма + вклад каждого места.
///
/// Фишки попадают сюда в момент списания со стека (блайнды, коллы,
/// ставки). Детализация по сайд-потам считается из contributions
/// на этапе расчёта (`side_pots`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Pot {
    pub total: Chips,
    /// BTreeMap — детерминированный порядок мест для реплея
    /// и раздачи остатка при сплите.
    pub contributions: BTreeMap<SeatIndex, Chips>,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Зачесть вклад места в банк.
    pub fn add_contribution(&mut self, seat: SeatIndex, amount: Chips) {
        if amount.is_zero() {
            return;
        }
        self.total += amount;
        *self.contributions.entry(seat).or_insert(Chips::ZERO) += amount;
    }

    pub fn reset(&mut self) {
        self.total = Chips::ZERO;
        self.contributions.clear();
    }
}
