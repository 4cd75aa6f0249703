//! Доменная модель холдема: карты, фишки, игроки, стол, конфигурация игры.

pub mod card;
pub mod chips;
pub mod config;
pub mod deck;
pub mod hand;
pub mod player;
pub mod seat;
pub mod table;

// Базовые идентификаторы. Генерацию ID делает внешний слой.
pub type PlayerId = u64;
pub type GameId = u64;
pub type HandId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use config::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use seat::*;
pub use table::*;
