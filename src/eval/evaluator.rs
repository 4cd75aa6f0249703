use crate::domain::card::{Card, Rank, Suit};
use crate::domain::seat::SeatIndex;

use super::hand_rank::{HandCategory, HandRank};
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Вычислить лучшую 5-карточную руку из hole + board.
///
/// Ожидается `hole.len() == 2` и `board.len()` от 3 до 5, но функция
/// корректно работает для любых 5–7 карт суммарно: перебираются все
/// C(n,5) комбинаций (для 7 карт — 21), берётся максимум.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    assert!(
        (5..=7).contains(&all_cards.len()),
        "evaluate_best_hand ожидает от 5 до 7 карт"
    );

    best_of_all_5card_combinations(&all_cards)
}

/// Победители среди набора рук: максимальный ранг и все места,
/// чьи руки ему в точности равны (сплит).
pub fn find_winners(hands: &[(SeatIndex, HandRank)]) -> Option<(Vec<SeatIndex>, HandRank)> {
    let best = hands.iter().map(|(_, r)| r).max()?.clone();
    let winners = hands
        .iter()
        .filter(|(_, r)| *r == best)
        .map(|(seat, _)| *seat)
        .collect();
    Some((winners, best))
}

/// Перебор всех комбинаций 5 карт из N (N=5–7), выбор лучшей.
fn best_of_all_5card_combinations(cards: &[Card]) -> HandRank {
    let n = cards.len();
    let mut best: Option<HandRank> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let r = evaluate_5card_hand(&five);
                        if best.as_ref().map_or(true, |best_r| r > *best_r) {
                            best = Some(r);
                        }
                    }
                }
            }
        }
    }

    best.expect("должна быть хотя бы одна 5-карточная комбинация")
}

/// Оценка строго 5-карточной комбинации.
pub fn evaluate_5card_hand(cards: &[Card; 5]) -> HandRank {
    let mut suit_counts = [0u8; 4]; // clubs, diamonds, hearts, spades
    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut rank_mask: RankMask = 0;

    for card in cards.iter() {
        let suit_idx = match card.suit {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        };
        suit_counts[suit_idx] += 1;
        rank_counts[card.rank as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = suit_counts.iter().any(|&c| c == 5);
    let straight_high = detect_straight(rank_mask);

    // Straight flush / royal flush: в 5 картах флеш и стрит — это одна рука.
    if is_flush {
        if let Some(high) = straight_high {
            let category = if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandRank::new(category, vec![high]);
        }
    }

    // Список (rank, count), сортировка: количество desc, затем ранг desc.
    let mut rc_list: Vec<(Rank, u8)> = Vec::with_capacity(5);
    for r_val in (2usize..=14).rev() {
        let count = rank_counts[r_val];
        if count > 0 {
            let rank = Rank::from_value(r_val as u8).expect("ранг в диапазоне 2..14");
            rc_list.push((rank, count));
        }
    }
    rc_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    // Шаблон количеств: [4,1], [3,2], [3,1,1], [2,2,1], [2,1,1,1], [1;5].
    let pattern: Vec<u8> = rc_list.iter().map(|&(_, c)| c).collect();

    if pattern == [4, 1] {
        return HandRank::new(
            HandCategory::FourOfAKind,
            vec![rc_list[0].0, rc_list[1].0],
        );
    }

    if pattern == [3, 2] {
        return HandRank::new(HandCategory::FullHouse, vec![rc_list[0].0, rc_list[1].0]);
    }

    if is_flush {
        let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        return HandRank::new(HandCategory::Flush, ranks);
    }

    if let Some(high) = straight_high {
        return HandRank::new(HandCategory::Straight, vec![high]);
    }

    if pattern == [3, 1, 1] {
        return HandRank::new(
            HandCategory::ThreeOfAKind,
            vec![rc_list[0].0, rc_list[1].0, rc_list[2].0],
        );
    }

    if pattern == [2, 2, 1] {
        return HandRank::new(
            HandCategory::TwoPair,
            vec![rc_list[0].0, rc_list[1].0, rc_list[2].0],
        );
    }

    if pattern == [2, 1, 1, 1] {
        return HandRank::new(
            HandCategory::OnePair,
            vec![rc_list[0].0, rc_list[1].0, rc_list[2].0, rc_list[3].0],
        );
    }

    // High card: 5 рангов по убыванию.
    let ranks: Vec<Rank> = rc_list.iter().map(|&(r, _)| r).collect();
    HandRank::new(HandCategory::HighCard, ranks)
}
