use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Конфигурация игры: блайнды, лимиты мест, хаус-рулы.
///
/// Значение иммутабельно на протяжении игры; проверяется `validate()`
/// при создании.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Минимум игроков для старта раздачи (не меньше 2).
    pub min_players: u8,
    /// Максимум мест за столом (2–9).
    pub max_players: u8,

    /// Хаус-рул для мин-рейза:
    /// - false (по умолчанию): min_raise = размер последнего повышения
    ///   (стандартный no-limit), большой блайнд — нижняя граница улицы;
    /// - true: min_raise всегда равен большому блайнду.
    pub fixed_min_raise: bool,

    /// Когда ставки больше невозможны (все в олл-ине), автоматически
    /// докручивать оставшиеся улицы до шоудауна. false — внешний слой
    /// двигает улицы сам командой AdvanceStreet (покарточный показ).
    pub auto_run_out: bool,
}

impl GameConfig {
    pub fn new(small_blind: Chips, big_blind: Chips, max_players: u8) -> Self {
        Self {
            small_blind,
            big_blind,
            min_players: 2,
            max_players,
            fixed_min_raise: false,
            auto_run_out: true,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind.is_zero() {
            return Err("GameConfig: small_blind = 0".into());
        }
        if self.big_blind.0 <= self.small_blind.0 {
            return Err(format!(
                "GameConfig: big_blind ({}) <= small_blind ({})",
                self.big_blind, self.small_blind
            ));
        }
        if self.min_players < 2 {
            return Err("GameConfig: min_players < 2".into());
        }
        if self.max_players < self.min_players || self.max_players > 9 {
            return Err(format!(
                "GameConfig: max_players ({}) вне диапазона {}..=9",
                self.max_players, self.min_players
            ));
        }
        Ok(())
    }
}
