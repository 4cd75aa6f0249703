//! Оценка силы покерных рук (Texas Hold'em).
//!
//! Основные операции:
//!   - `evaluate_best_hand(hole, board) -> HandRank` — лучшая 5 из 7;
//!   - `HandRank: Ord` — строгий тотальный порядок (равенство = сплит);
//!   - `find_winners(...)` — победители среди набора рук.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate_best_hand, find_winners};
pub use hand_rank::{HandCategory, HandRank};
