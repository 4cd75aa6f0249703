use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе (1 = старшая карта, 10 = роял-флеш).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandCategory {
    /// Человеческое описание категории.
    pub fn describe(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

/// Ранг руки: категория + значимые ранги в порядке убывания значимости.
///
/// `ranks` хранит категорийные ранги, затем кикеры:
///   - каре:      [каре, кикер]
///   - фулл-хаус: [тройка, пара]
///   - сет:       [тройка, кикер1, кикер2]
///   - две пары:  [старшая пара, младшая пара, кикер]
///   - пара:      [пара, кикер1, кикер2, кикер3]
///   - остальное: 5 рангов по убыванию (для стрита — старшая карта первой,
///     wheel кодируется как 5-high).
///
/// Сравнение — строгий тотальный порядок по (категория, ранги);
/// равенство — честный сплит банка.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HandRank {
    pub category: HandCategory,
    pub ranks: Vec<Rank>,
    /// Упакованное значение для быстрого сравнения:
    /// [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4].
    value: u32,
}

impl HandRank {
    /// Собрать HandRank из категории и значимых рангов (макс. 5).
    pub fn new(category: HandCategory, ranks: Vec<Rank>) -> Self {
        debug_assert!(ranks.len() <= 5);

        let mut value = (category as u32) << 20;
        for (i, r) in ranks.iter().enumerate() {
            // Ранги 2..14 помещаются в 4 бита каждый.
            value |= (*r as u32) << (16 - 4 * i as u32);
        }

        Self {
            category,
            ranks,
            value,
        }
    }

    /// Старший категорийный ранг (каре, тройка, пара, старшая карта...).
    pub fn primary(&self) -> Rank {
        self.ranks[0]
    }

    /// Второй категорийный ранг, если есть (пара фулл-хауса, младшая пара).
    pub fn secondary(&self) -> Option<Rank> {
        match self.category {
            HandCategory::FullHouse | HandCategory::TwoPair => self.ranks.get(1).copied(),
            _ => None,
        }
    }

    /// Кикеры — ранги вне категорийной комбинации, по убыванию.
    pub fn kickers(&self) -> &[Rank] {
        let skip = match self.category {
            HandCategory::HighCard => 1,
            HandCategory::OnePair => 1,
            HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 1,
            HandCategory::FourOfAKind => 1,
            // У стритов/флешей/фулл-хаусов кикеров нет.
            HandCategory::Straight
            | HandCategory::Flush
            | HandCategory::FullHouse
            | HandCategory::StraightFlush
            | HandCategory::RoyalFlush => return &[],
        };
        &self.ranks[skip..]
    }

    /// Упакованное значение (стабильно при одинаковых категории/рангах).
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Описание руки ("Royal Flush", "Four of a Kind", ...).
    pub fn describe(&self) -> &'static str {
        self.category.describe()
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for HandRank {}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.describe(), self.primary())
    }
}
