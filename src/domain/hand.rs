use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::HandId;

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Следующая улица (River → Showdown, дальше некуда).
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => Some(Street::Showdown),
            Street::Showdown => None,
        }
    }

    /// Сколько карт борда открывается при входе на улицу.
    pub fn cards_to_deal(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown => 0,
        }
    }
}

/// Состояние одной раздачи: номер, улица, борд, остаток колоды, seed.
/// Сбрасывается целиком при старте новой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandState {
    /// Монотонный номер раздачи в рамках игры.
    pub hand_no: HandId,
    pub street: Street,
    /// Общие карты борда (0/3/4/5).
    pub board: Vec<Card>,
    /// Остаток колоды после раздачи карманных карт и борда.
    pub deck: Deck,
    /// Seed, из которого была перемешана колода (для реплея/аудита).
    pub seed: String,
}

impl HandState {
    pub fn new(hand_no: HandId, deck: Deck, seed: String) -> Self {
        Self {
            hand_no,
            street: Street::Preflop,
            board: Vec::new(),
            deck,
            seed,
        }
    }
}
