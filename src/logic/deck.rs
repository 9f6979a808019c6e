// src/logic/deck.rs

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::layout::DECK_SIZE;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// 生成された時点では、すべてのカードは裏向きになってる！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
///
/// 乱数生成器は外から渡す。シードを固定すれば毎回同じ並びになるよ！
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
    debug!("[Deck] Shuffled {} cards", deck.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！
        let unique: HashSet<_> = deck.iter().map(|card| (card.suit, card.rank)).collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");

        // 3. すべてのカードが裏向きかチェック！
        assert!(deck.iter().all(|card| !card.revealed), "デッキに表向きのカードが含まれています！");
    }

    #[test]
    fn shuffle_keeps_the_cards() {
        let initial_deck = create_standard_deck();
        let mut shuffled_deck = initial_deck.clone();
        shuffle_deck(&mut shuffled_deck, &mut StdRng::seed_from_u64(7));

        // 並び順は (ほぼ確実に) 変わるけど、中身は同じはず
        assert_ne!(initial_deck, shuffled_deck);
        let a: HashSet<_> = initial_deck.into_iter().collect();
        let b: HashSet<_> = shuffled_deck.into_iter().collect();
        assert_eq!(a, b, "シャッフルでカードが変わった！");
    }

    #[test]
    fn same_seed_same_order() {
        let mut first = create_standard_deck();
        let mut second = create_standard_deck();
        shuffle_deck(&mut first, &mut StdRng::seed_from_u64(42));
        shuffle_deck(&mut second, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
