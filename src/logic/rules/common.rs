//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::Suit;

pub use crate::components::card::CardColor;

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Heart ❤️, 1: Diamond ♦️, 2: Club ♣️, 3: Spade ♠️
pub fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    match foundation_index {
        0 => Some(Suit::Heart),
        1 => Some(Suit::Diamond),
        2 => Some(Suit::Club),
        3 => Some(Suit::Spade),
        _ => None,
    }
}

/// `get_foundation_suit` の逆。スートが行くべき組札のインデックス。
pub fn foundation_index_for(suit: Suit) -> u8 {
    match suit {
        Suit::Heart => 0,
        Suit::Diamond => 1,
        Suit::Club => 2,
        Suit::Spade => 3,
    }
}
