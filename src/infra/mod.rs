//! Инфраструктура вокруг движка:
//! - детерминированный RNG;
//! - вывод seed'а из строки (SHA-256);
//! - сериализуемый снапшот GameState для внешнего хранилища.

pub mod rng;
pub mod rng_seed;
pub mod snapshot;

pub use rng::{DeterministicRng, SeededShuffler};
pub use rng_seed::RngSeed;
pub use snapshot::GameSnapshot;
