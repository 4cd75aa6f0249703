use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::Card;
use crate::engine::RandomSource;
use crate::infra::rng_seed::RngSeed;

/// Детерминированный RNG для движка, тестов и реплея.
/// Одинаковый seed → одна и та же последовательность перестановок.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Перетасовать слайс (Fisher–Yates внутри SliceRandom).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Реализация движкового RandomSource: строковый seed разворачивается
/// в 32 байта через SHA-256 и задаёт StdRng. Именно этот объект
/// передаётся в `process_action`.
#[derive(Clone, Debug, Default)]
pub struct SeededShuffler;

impl RandomSource for SeededShuffler {
    fn shuffle_deck(&self, cards: &mut [Card], seed: &str) {
        let mut rng = RngSeed::from_str_seed(seed).to_rng();
        rng.shuffle(cards);
    }
}
