//! RngSeed — доменно-разделённый seed для покерного RNG.
//!
//! Позволяет:
//!   - разворачивать произвольный строковый seed в 32 байта (SHA-256);
//!   - делать детерминированное hash-reseeding с контекстом
//!     (game_id, hand_no): new = H(domain || old || game || hand);
//!   - создавать DeterministicRng из seed.
//!
//! Откуда берётся энтропия строки — забота внешнего слоя; движку
//! важна только воспроизводимость: один seed → одна колода.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// Доменный префикс: защищает от переиспользования того же seed'а
/// другими подсистемами.
const DOMAIN_TAG: &[u8] = b"HOLDEM_ENGINE_RNG_V1";

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 (удобно в тестах).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Развернуть произвольную строку в seed: H(domain || строка).
    pub fn from_str_seed(seed: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_TAG);
        hasher.update(seed.as_bytes());
        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);
        Self { bytes: out }
    }

    /// Хэш-расширение с контекстом раздачи:
    ///   new_seed = H(domain || old || game_id || hand_no).
    pub fn derive(&self, game_id: u64, hand_no: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_TAG);
        hasher.update(self.bytes);
        hasher.update(game_id.to_le_bytes());
        hasher.update(hand_no.to_le_bytes());
        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);
        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
