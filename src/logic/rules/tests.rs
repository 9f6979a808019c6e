// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use itertools::iproduct;

use super::*;
use crate::components::card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
use crate::components::stack::StackType;

// --- テスト用ヘルパー関数 ---
fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

// --- 各ルール関数のテスト ---

#[test]
fn test_foundation_suit_mapping() {
    for (i, &suit) in ALL_SUITS.iter().enumerate() {
        let index = i as u8;
        assert_eq!(get_foundation_suit(index), Some(suit));
        assert_eq!(foundation_index_for(suit), index);
    }
    assert_eq!(get_foundation_suit(4), None);
}

#[test]
fn test_stock_waste_rules() {
    // ストックがある場合
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, false), "ストックがある場合はリセットできないはず");
    assert!(!can_reset_stock_from_waste(false, true), "ストックがある場合はリセットできないはず");

    // ストックが空の場合
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true), "ストックもウェストも空ならリセットできないはず");

    assert!(can_draw(false, true));
    assert!(can_draw(true, false));
    assert!(!can_draw(true, true), "両方空なら何も起きないはず");
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition(52), "カードが52枚あればクリアなはず！🏆");
    assert!(!check_win_condition(51), "カードが51枚ではクリアじゃないはず！🙅");
    assert!(!check_win_condition(0), "カードが0枚ではクリアじゃないはず！🙅");
}

#[test]
fn test_can_move_to_tableau() {
    // --- シナリオ 1: 空の Tableau への移動 ---
    assert!(can_move_to_tableau(&up(Suit::Club, Rank::King), &[]), "空の列に K♣ は置けるはず");
    assert!(!can_move_to_tableau(&up(Suit::Club, Rank::Queen), &[]), "空の列に Q♣ は置けないはず");

    // --- シナリオ 2: 空でない Tableau への有効な移動 ---
    let pile = [Card::new(Suit::Club, Rank::Two), up(Suit::Heart, Rank::Queen)];
    assert!(can_move_to_tableau(&up(Suit::Spade, Rank::Jack), &pile), "Q❤️ に J♠ は置けるはず");

    // --- シナリオ 3: 同色 ---
    assert!(!can_move_to_tableau(&up(Suit::Diamond, Rank::Jack), &pile), "Q❤️ に J♦ は置けないはず (同色)");

    // --- シナリオ 4: ランク違い ---
    assert!(!can_move_to_tableau(&up(Suit::Spade, Rank::Ten), &pile), "Q❤️ に 10♠ は置けないはず");
    assert!(!can_move_to_tableau(&up(Suit::Spade, Rank::King), &pile), "Q❤️ に K♠ は置けないはず");
}

#[test]
fn test_can_move_to_foundation() {
    let hearts = [up(Suit::Heart, Rank::Ace)];

    assert!(can_move_to_foundation(&up(Suit::Heart, Rank::Two), &hearts, 0), "A♥ に 2♥ は置けるはず");
    assert!(!can_move_to_foundation(&up(Suit::Spade, Rank::Two), &hearts, 0), "A♥ に 2♠ は置けないはず");
    assert!(!can_move_to_foundation(&up(Suit::Heart, Rank::Three), &hearts, 0), "ランクが飛ぶのはダメ");

    // 空の組札はエースだけ。しかもスートの場所が合ってないとダメ。
    assert!(can_move_to_foundation(&up(Suit::Spade, Rank::Ace), &[], 3));
    assert!(!can_move_to_foundation(&up(Suit::Spade, Rank::Ace), &[], 0), "スペードは 3 番のはず");
    assert!(!can_move_to_foundation(&up(Suit::Spade, Rank::Two), &[], 3));
    assert!(!can_move_to_foundation(&up(Suit::Heart, Rank::Ace), &[], 9), "存在しない組札");
}

#[test]
fn test_is_move_valid_dispatches_by_target() {
    let king = up(Suit::Club, Rank::King);
    assert!(is_move_valid(&king, &[], StackType::Tableau(4)));
    assert!(!is_move_valid(&king, &[], StackType::Foundation(2)));
    assert!(!is_move_valid(&king, &[], StackType::Waste), "捨て札には置けない");
    assert!(!is_move_valid(&king, &[], StackType::Stock), "山札にも置けない");

    let ace = up(Suit::Diamond, Rank::Ace);
    assert!(is_move_valid(&ace, &[], StackType::Foundation(1)));
}

/// 全カードの組み合わせで、場札ルールが「色違い・ランク1つ下」と一致するか。
#[test]
fn test_tableau_rule_over_all_pairs() {
    for (&s1, &r1, &s2, &r2) in iproduct!(ALL_SUITS.iter(), ALL_RANKS.iter(), ALL_SUITS.iter(), ALL_RANKS.iter()) {
        let card = up(s1, r1);
        let top = up(s2, r2);
        let expected = card.color() != top.color() && r1.value() + 1 == r2.value();
        assert_eq!(
            is_move_valid(&card, &[top.clone()], StackType::Tableau(0)),
            expected,
            "{} onto {}",
            card,
            top
        );
    }
}

/// 全カードの組み合わせで、組札ルールが「同じスート・ランク1つ上」と一致するか。
#[test]
fn test_foundation_rule_over_all_pairs() {
    for (&s1, &r1, &s2, &r2) in iproduct!(ALL_SUITS.iter(), ALL_RANKS.iter(), ALL_SUITS.iter(), ALL_RANKS.iter()) {
        let card = up(s1, r1);
        let top = up(s2, r2);
        let index = foundation_index_for(s2);
        let expected = s1 == s2 && r1.value() == r2.value() + 1;
        assert_eq!(
            is_move_valid(&card, &[top.clone()], StackType::Foundation(index)),
            expected,
            "{} onto {}",
            card,
            top
        );
    }
}
