//! Детерминированный движок раздачи Texas Hold'em.
//!
//! Движок — чистая машина состояний: никакого I/O, никаких часов,
//! никакой собственной энтропии. Единственная операция верхнего уровня —
//! `engine::process_action(rng, state, command)`: она берёт текущий
//! `GameState`, применяет одну команду и возвращает новый стейт плюс
//! упорядоченный список событий. Одинаковый стейт + команда + seed
//! всегда дают одинаковый результат — на этом стоят реплей и аудит.
//!
//! Слои:
//!   - `domain` — карты, фишки, игроки, стол, конфигурация;
//!   - `engine` — ставки, очереди ходов, сайд-поты, переход улиц;
//!   - `eval`   — оценка силы рук (лучшая 5 из 7);
//!   - `infra`  — RNG-реализации и сериализуемый снапшот.
//!
//! Транспорт, таймеры и хранение — забота внешнего слоя: он сериализует
//! команды по игре и рассылает события.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
