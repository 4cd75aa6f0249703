//! Движок холдема: ставки, переход улиц, сайд-поты, шоудаун.
//!
//! Высокоуровневая операция одна: `process_action(rng, state, command)`.
//! Это чистая функция — она не делает I/O, берёт текущий `GameState`
//! и возвращает новый стейт плюс упорядоченный список событий.
//! Ошибка на любом шаге оставляет входное состояние нетронутым.

pub mod actions;
pub mod betting;
pub mod errors;
pub mod events;
pub mod machine;
pub mod positions;
pub mod pot;
pub mod side_pots;
pub mod state;
pub mod validation;

pub use actions::{ActionKind, AppliedAction, Command, PlayerAction};
pub use betting::BettingState;
pub use errors::{EngineError, ErrorKind};
pub use events::{GameEvent, SettlementSnapshot, WinnerSummary};
pub use machine::{process_action, Transition};
pub use pot::Pot;
pub use side_pots::{compute_side_pots, split_pot, PotAward, SidePot};
pub use state::{GameState, GameStatus};
pub use validation::{legal_actions, validate_action, ValidatedAction};

use crate::domain::Card;

/// RNG-интерфейс движка: детерминированная перетасовка по строковому seed.
///
/// Движок не знает, откуда взялась энтропия seed'а — реализацию даёт
/// infra (SHA-256 → StdRng → Fisher–Yates). Одинаковый seed обязан
/// давать одинаковую перестановку: на этом стоит реплей и аудит.
pub trait RandomSource {
    fn shuffle_deck(&self, cards: &mut [Card], seed: &str);
}
